use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::math::grid::TimeGrid;
use crate::math::ode::Method;
use crate::model::logistic::LogisticModel;

/// Validated inputs of one prediction run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub p0: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub dt: f64,
    pub r: f64,
    pub k: f64,
}

impl SimulationParams {
    pub fn model(&self) -> LogisticModel {
        LogisticModel::new(self.r, self.k)
    }

    pub fn grid(&self, max_points: usize) -> Result<TimeGrid, GridError> {
        TimeGrid::build(self.t_start, self.t_end, self.dt, max_points)
    }
}

/// Approximated population at every grid time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub populations: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.populations.iter().copied())
    }
}

/// Integrate `f` over `grid` with `method`, starting from `p0`.
pub fn integrate<F>(method: Method, grid: &TimeGrid, p0: f64, f: F) -> Trajectory
where
    F: Fn(f64, f64) -> f64,
{
    let times = grid.as_slice();
    let dt = grid.dt();
    let mut populations = Vec::with_capacity(times.len());
    if times.is_empty() {
        return Trajectory { times: Vec::new(), populations };
    }

    let mut p = p0;
    populations.push(p);
    for &t in &times[..times.len() - 1] {
        p = method.step(p, t, dt, &f);
        populations.push(p);
    }

    debug_assert_eq!(populations.len(), times.len());
    Trajectory { times: times.to_vec(), populations }
}

/// Run a single method over its own freshly built grid.
pub fn simulate(params: &SimulationParams, method: Method, max_points: usize) -> Result<Trajectory, GridError> {
    let grid = params.grid(max_points)?;
    let model = params.model();
    Ok(integrate(method, &grid, params.p0, |t, p| model.rate(t, p)))
}

/// The three trajectories returned for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub euler_method: Trajectory,
    pub runge_kutta_2: Trajectory,
    pub runge_kutta_4: Trajectory,
}

impl Prediction {
    pub fn get(&self, method: Method) -> &Trajectory {
        match method {
            Method::Euler => &self.euler_method,
            Method::Rk2 => &self.runge_kutta_2,
            Method::Rk4 => &self.runge_kutta_4,
        }
    }
}

/// Run all three methods independently over the same parameters.
///
/// The grid is validated before anything is integrated, so a run either yields
/// three complete trajectories or fails without computing any of them.
pub fn predict(params: &SimulationParams, max_points: usize) -> Result<Prediction, GridError> {
    TimeGrid::planned_len(params.t_start, params.t_end, params.dt, max_points)?;

    Ok(Prediction {
        euler_method: simulate(params, Method::Euler, max_points)?,
        runge_kutta_2: simulate(params, Method::Rk2, max_points)?,
        runge_kutta_4: simulate(params, Method::Rk4, max_points)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> SimulationParams {
        SimulationParams { p0: 10.0, t_start: 0.0, t_end: 2.0, dt: 1.0, r: 0.5, k: 100.0 }
    }

    #[test]
    fn euler_first_step_matches_hand_computation() {
        let traj = simulate(&reference_params(), Method::Euler, 1_000).unwrap();
        assert_eq!(traj.times, vec![0.0, 1.0, 2.0]);
        assert_eq!(traj.populations[0], 10.0);
        assert_eq!(traj.populations[1], 14.5);
    }

    #[test]
    fn all_methods_share_grid_length_and_initial_value() {
        let params = SimulationParams { p0: 37.0, t_start: 1.5, t_end: 9.25, dt: 0.3, r: 0.8, k: 250.0 };
        let pred = predict(&params, 1_000).unwrap();
        let n = pred.euler_method.len();
        for m in Method::ALL {
            let traj = pred.get(m);
            assert_eq!(traj.times.len(), traj.populations.len());
            assert_eq!(traj.len(), n);
            assert_eq!(traj.populations[0], 37.0);
            assert_eq!(traj.times, pred.euler_method.times);
        }
    }

    #[test]
    fn equilibrium_is_a_fixed_point() {
        let params = SimulationParams { p0: 100.0, t_start: 0.0, t_end: 10.0, dt: 0.5, r: 1.2, k: 100.0 };
        let pred = predict(&params, 1_000).unwrap();
        for m in Method::ALL {
            assert!(pred.get(m).populations.iter().all(|&p| p == 100.0), "{m} drifted");
        }
    }

    #[test]
    fn zero_capacity_yields_non_finite_populations() {
        let params = SimulationParams { k: 0.0, ..reference_params() };
        let traj = simulate(&params, Method::Rk4, 1_000).unwrap();
        assert_eq!(traj.populations[0], 10.0);
        assert!(traj.populations[1..].iter().all(|p| !p.is_finite()));
    }

    #[test]
    fn oversized_grid_fails_before_integrating() {
        let params = SimulationParams { dt: 1e-6, ..reference_params() };
        assert!(matches!(predict(&params, 1_000), Err(GridError::TooLarge { .. })));
    }
}
