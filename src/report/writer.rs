//! Per-instance result files.
//!
//! One text file per solved instance: headline statistics, a LaTeX table
//! row, then the winning run's tours and traces.

use super::stats::SampleStats;
use crate::error::Result;
use crate::sa::ConstructionStatus;
use crate::solver::Summary;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Renders the report text for one summary.
pub fn render(summary: &Summary) -> String {
    let stats = SampleStats::from_samples(&summary.samples);
    let duration = summary.total_duration.as_secs_f64();
    let mut out = String::new();

    let _ = writeln!(out, "name: {}", summary.name);
    let _ = writeln!(out, "vehicles: {}", summary.vehicles);
    let _ = writeln!(out, "capacity: {}", summary.capacity);
    if let Some(opt) = summary.best_known {
        let _ = writeln!(out, "best_known: {opt:.2}");
    }
    let _ = writeln!(out, "best_cost: {:.2}", summary.best_cost);
    let _ = writeln!(out, "avg_cost: {:.2}", stats.mean);
    let _ = writeln!(out, "duration(s): {duration:.2}");
    if let Some(opt) = summary.best_known {
        let absolute = summary.best_cost - opt;
        let _ = writeln!(out, "absolute_error: {absolute:.2}");
        let _ = writeln!(out, "relative_error(%): {:.2}", absolute / opt * 100.0);
    }
    let _ = writeln!(out, "variance: {:.2}", stats.variance);
    let _ = writeln!(out, "standard_deviation: {:.2}", stats.std_dev);

    match summary.construction {
        ConstructionStatus::Feasible => {}
        ConstructionStatus::Incomplete { unassigned } => {
            let _ = writeln!(out, "status: incomplete, {unassigned} customers unassigned");
        }
        ConstructionStatus::Infeasible => {
            let _ = writeln!(out, "status: infeasible");
        }
    }
    for failure in &summary.failures {
        let _ = writeln!(out, "worker_failure: {}: {}", failure.worker, failure.message);
    }

    // row for the results table: name & capacity & opt & best & avg &
    // absolute error & relative error & standard deviation & time
    let (opt, abs_err, rel_err) = match summary.best_known {
        Some(opt) => {
            let absolute = summary.best_cost - opt;
            (
                format!("{opt:.2}"),
                format!("{absolute:.2}"),
                format!("{:.2}", absolute / opt * 100.0),
            )
        }
        None => ("-".into(), "-".into(), "-".into()),
    };
    let _ = writeln!(
        out,
        "latex: {} & {} & {} & {:.2} & {:.2} & {} & {} & {:.2} & {:.2} \\\\",
        summary.name,
        summary.capacity,
        opt,
        summary.best_cost,
        stats.mean,
        abs_err,
        rel_err,
        stats.std_dev,
        duration
    );

    let _ = writeln!(out, "tour: {}", summary.current);
    let _ = writeln!(out, "best_tour: {}", summary.best);
    let _ = writeln!(out, "start_tour: {}", summary.start);
    let _ = writeln!(out, "samples: {}", join(&summary.samples, 2));
    let _ = writeln!(out, "temperatures: {}", join(&summary.temperature_trace, 4));
    let _ = writeln!(out, "costs: {}", join(&summary.cost_trace, 2));

    out
}

/// Writes the rendered report to `<dir>/<name>.txt`, creating the
/// directory if needed.
pub fn write(summary: &Summary, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.txt", summary.name));
    std::fs::write(&path, render(summary))?;
    Ok(path)
}

fn join(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(" ")
}
