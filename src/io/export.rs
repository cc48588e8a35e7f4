use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::simulation::Trajectory;

#[derive(Debug, Serialize)]
struct Row {
    time: f64,
    population: f64,
}

/// Write a trajectory as a `time,population` CSV table.
pub fn write_trajectory_csv<W: Write>(out: W, traj: &Trajectory) -> anyhow::Result<()> {
    anyhow::ensure!(
        traj.times.len() == traj.populations.len(),
        "trajectory length mismatch (times={}, populations={})",
        traj.times.len(),
        traj.populations.len()
    );

    let mut wtr = csv::Writer::from_writer(out);
    for (time, population) in traj.points() {
        wtr.serialize(Row { time, population })
            .with_context(|| format!("write csv row failed at t={}", time))?;
    }
    wtr.flush().context("flush csv writer failed")?;
    Ok(())
}

/// Render a trajectory as CSV text.
pub fn trajectory_csv_string(traj: &Trajectory) -> anyhow::Result<String> {
    let mut buf = Vec::with_capacity(traj.len() * 24);
    write_trajectory_csv(&mut buf, traj)?;
    String::from_utf8(buf).context("csv output is not utf-8")
}
