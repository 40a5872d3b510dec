#![doc = "Alignment of a reference symbol table against local tables, producing a deterministic discrepancy report."]

/// Case label multimap and duplicate detection.
pub mod cases;
/// Comparator and its inputs.
pub mod compare;
/// Discrepancy taxonomy.
pub mod discrepancy;
/// Report data model.
pub mod report;
/// Handler tag normalization.
pub mod tags;

pub use cases::{Assignment, CaseAssignments};
pub use compare::{align, AuditInputs, Comparator, HandlerSource};
pub use discrepancy::{Category, DiscrepancyRecord, InvalidReason, MismatchField};
pub use report::{AlignmentRow, DiscrepancyReport, ReportProvenance, Summary};
pub use tags::{normalize_tag, DEPRECATED_TAG};
