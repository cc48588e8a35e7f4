use anyhow::Context;

use popgrowth::api::{router, AppState};
use popgrowth::config::ApiConfig;
use popgrowth::logging::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cfg = ApiConfig::from_env()?;
    init_logger(cfg.json_logs);

    let addr = cfg.addr()?;
    let app = router(AppState { max_grid_points: cfg.max_grid_points });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind failed ({})", addr))?;
    tracing::info!(%addr, max_grid_points = cfg.max_grid_points, "popgrowth-api listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
