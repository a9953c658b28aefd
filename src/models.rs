//! Shared data models for setup step outcomes and the run report.

use serde::Serialize;

#[derive(Serialize)]
/// Result of a single setup step.
///
/// `step` and `status` together act as a machine-readable reason code;
/// `detail` is the human message. `status` is one of `ok`, `skipped`,
/// `planned`, or `failed`.
pub struct StepOutcome {
    pub step: String,
    pub status: String,
    pub detail: String,
}

#[derive(Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub ok: usize,
    pub skipped: usize,
    pub planned: usize,
    pub failed: usize,
}

#[derive(Serialize)]
/// Full report for one setup run.
pub struct SetupReport {
    pub steps: Vec<StepOutcome>,
    pub summary: Summary,
}
