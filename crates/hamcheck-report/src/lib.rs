#![deny(missing_docs)]
#![doc = "Deterministic rendering of discrepancy reports, process outcome, and source-shaped code generation."]

pub mod generate;
pub mod keytable;
pub mod limits;
pub mod outcome;
pub mod render;

pub use generate::proposed_cases;
pub use keytable::{keyname_array, offset_sample};
pub use limits::PreviewLimits;
pub use outcome::Outcome;
pub use render::{render, ReportView};

/// Horizontal rule framing every section heading.
pub const RULE: &str =
    "======================================================================";
