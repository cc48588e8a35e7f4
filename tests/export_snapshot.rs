use popgrowth::io::export::trajectory_csv_string;
use popgrowth::{simulate, Method, SimulationParams};

#[test]
fn euler_export_snapshot_small() {
    // Dyadic inputs keep every value exactly representable.
    let params = SimulationParams { p0: 1.0, t_start: 0.0, t_end: 2.0, dt: 1.0, r: 1.0, k: 2.0 };
    let traj = simulate(&params, Method::Euler, 100).expect("simulate");

    let csv = trajectory_csv_string(&traj).expect("render csv");
    insta::assert_snapshot!(csv, @r###"
    time,population
    0.0,1.0
    1.0,1.5
    2.0,1.875
    "###);
}

#[test]
fn export_has_one_row_per_grid_point() {
    let params = SimulationParams { p0: 5.0, t_start: 0.0, t_end: 3.3, dt: 0.5, r: 0.9, k: 40.0 };
    for m in Method::ALL {
        let traj = simulate(&params, m, 100).expect("simulate");
        let csv = trajectory_csv_string(&traj).expect("render csv");
        assert_eq!(csv.lines().count(), traj.len() + 1, "{m}");
        assert_eq!(csv.lines().nth(1), Some("0.0,5.0"), "{m}");
    }
}
