//! Process-level outcome derived from a report.

use hamcheck_align::DiscrepancyReport;

/// Pass/fail signal of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No hard-fail discrepancy.
    Passed,
    /// At least one hard-fail discrepancy.
    Failed,
}

impl Outcome {
    /// Outcome of a single report.
    pub fn of(report: &DiscrepancyReport) -> Self {
        if report.passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    /// Process exit status: `0` when passed, `1` otherwise.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}
