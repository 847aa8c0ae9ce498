//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planner_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::time::Instant;

use planner_core::{FormInput, MemoryAdapter, PlannerApp};

fn main() {
    let mut app = PlannerApp::new(MemoryAdapter::new());
    app.start(&[], Instant::now());

    let input = FormInput {
        title: "Smoke check".to_string(),
        duration: "30".to_string(),
        due_date: "2026-09-01".to_string(),
        tag: "Study".to_string(),
        description: "core wiring probe".to_string(),
    };
    if let Err(err) = app.submit_form(&input, None, Instant::now()) {
        eprintln!("planner_core smoke submit failed: {err:?}");
        std::process::exit(1);
    }

    let projection = app.view();
    println!("planner_core version={}", planner_core::core_version());
    println!(
        "planner_core rows={} total={} avg={}min",
        projection.rows.len(),
        projection.aggregates.total,
        projection.aggregates.average_duration
    );
}
