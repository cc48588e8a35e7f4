//! Convergence orders of the three schemes against the closed-form logistic curve.
//!
//! Errors are measured in the max norm over each run's grid, so a sign change of
//! the pointwise error somewhere along the curve cannot distort the ratios.

use popgrowth::{simulate, LogisticModel, Method, SimulationParams};

fn max_error(method: Method, dt: f64) -> f64 {
    let params = SimulationParams { p0: 10.0, t_start: 0.0, t_end: 12.0, dt, r: 0.5, k: 100.0 };
    let model = LogisticModel::new(params.r, params.k);
    let traj = simulate(&params, method, 1_000_000).unwrap();

    traj.points()
        .map(|(t, p)| (p - model.exact(t, params.t_start, params.p0)).abs())
        .fold(0.0, f64::max)
}

fn assert_ratios(method: Method, steps: &[f64], lo: f64, hi: f64) {
    let errors: Vec<f64> = steps.iter().map(|&dt| max_error(method, dt)).collect();
    for w in errors.windows(2) {
        let ratio = w[0] / w[1];
        println!("{method} convergence ratio: {ratio}");
        assert!(ratio > lo && ratio < hi, "{method}: ratio {ratio} outside ({lo}, {hi}), errors {errors:?}");
    }
}

#[test]
fn euler_is_first_order() {
    assert_ratios(Method::Euler, &[0.0625, 0.03125, 0.015625], 1.8, 2.2);
}

#[test]
fn rk2_is_second_order() {
    assert_ratios(Method::Rk2, &[0.125, 0.0625, 0.03125], 3.4, 4.6);
}

#[test]
fn rk4_is_fourth_order() {
    assert_ratios(Method::Rk4, &[0.5, 0.25, 0.125], 13.0, 19.0);
}

#[test]
fn higher_order_is_more_accurate_at_equal_step() {
    let dt = 0.25;
    let e1 = max_error(Method::Euler, dt);
    let e2 = max_error(Method::Rk2, dt);
    let e4 = max_error(Method::Rk4, dt);
    assert!(e1 > e2 && e2 > e4, "errors not ordered: euler={e1} rk2={e2} rk4={e4}");
    assert!(e4 < 1e-2);
}
