use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters and timings for one solve call. Reset at the start of every
/// call; monotonic while it runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Candidate trials, successful or not.
    pub assignments: u64,
    /// Undone trials. Never exceeds `assignments`.
    pub backtracks: u64,
    /// Wall time of the whole solve call.
    pub duration: Duration,
    /// Per-propagator counters, in pipeline order.
    pub propagators: Vec<PropagatorStats>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PropagatorStats {
    pub name: String,
    pub description: String,
    /// Pipeline invocations.
    pub calls: u64,
    /// Trail entries recorded across all calls, i.e. domains narrowed.
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Renders the per-propagator counters as a text table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Propagator"),
        Cell::new("Description"),
        Cell::new("Calls"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    for propagator in &stats.propagators {
        let avg_time = if propagator.calls > 0 {
            propagator.time_spent_micros as f64 / propagator.calls as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&propagator.name),
            Cell::new(&propagator.description),
            Cell::new(&propagator.calls.to_string()),
            Cell::new(&propagator.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                propagator.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
