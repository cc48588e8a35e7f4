pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod model;
pub mod simulation;

pub use math::ode::Method;
pub use model::logistic::LogisticModel;
pub use simulation::{predict, simulate, Prediction, SimulationParams, Trajectory};
