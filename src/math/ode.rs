//! Fixed-step single-step integrators for a scalar ODE dp/dt = f(t, p).
//!
//! Every scheme works with increments already scaled by the step size
//! (`k = dt * f(..)`), so a step is `p + increment`.

use std::fmt;
use std::str::FromStr;

/// One explicit Euler step.
pub fn euler_step<F>(p: f64, t: f64, dt: f64, f: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    p + dt * f(t, p)
}

/// One midpoint (second-order) Runge-Kutta step.
pub fn rk2_step<F>(p: f64, t: f64, dt: f64, f: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = dt * f(t, p);
    let k2 = dt * f(t + dt / 2.0, p + k1 / 2.0);
    p + k2
}

/// One classical fourth-order Runge-Kutta step.
pub fn rk4_step<F>(p: f64, t: f64, dt: f64, f: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = dt * f(t, p);
    let k2 = dt * f(t + dt / 2.0, p + k1 / 2.0);
    let k3 = dt * f(t + dt / 2.0, p + k2 / 2.0);
    let k4 = dt * f(t + dt, p + k3);
    p + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

/// Stepping scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Euler,
    Rk2,
    Rk4,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Euler, Method::Rk2, Method::Rk4];

    pub fn step<F>(self, p: f64, t: f64, dt: f64, f: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        match self {
            Method::Euler => euler_step(p, t, dt, f),
            Method::Rk2 => rk2_step(p, t, dt, f),
            Method::Rk4 => rk4_step(p, t, dt, f),
        }
    }

    /// Global order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Rk2 => 2,
            Method::Rk4 => 4,
        }
    }

    /// Short name used by clients to pick a method.
    pub fn key(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Rk2 => "rk2",
            Method::Rk4 => "rk4",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown method '{}' (expected euler, rk2 or rk4)", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" => Ok(Method::Rk2),
            "rk4" => Ok(Method::Rk4),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}
