use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_GRID_POINTS: usize = 1_000_000;

/// Process-level settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub max_grid_points: usize,
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_grid_points: DEFAULT_MAX_GRID_POINTS,
            json_logs: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().with_context(|| format!("invalid PORT '{}'", v))?,
            None => DEFAULT_PORT,
        };
        let max_grid_points: usize = match lookup("MAX_GRID_POINTS") {
            Some(v) => v
                .trim()
                .replace('_', "")
                .parse()
                .with_context(|| format!("invalid MAX_GRID_POINTS '{}'", v))?,
            None => DEFAULT_MAX_GRID_POINTS,
        };
        anyhow::ensure!(max_grid_points >= 1, "MAX_GRID_POINTS must be at least 1");
        let json_logs = lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self { host, port, max_grid_points, json_logs })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid HOST/PORT ({}:{})", self.host, self.port))
    }
}
