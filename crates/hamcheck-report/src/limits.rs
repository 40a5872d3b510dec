//! Truncation limits for the text report.

use serde::{Deserialize, Serialize};

/// Bounded preview counts per section. Summary counts are never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLimits {
    /// Entries shown in the mismatch, ordinal shift and not-in-reference
    /// sections.
    #[serde(default = "PreviewLimits::default_mismatches")]
    pub mismatches: usize,
    /// Entries shown in the length and invalid reference sections.
    #[serde(default = "PreviewLimits::default_missing")]
    pub missing: usize,
    /// Entries shown per unmapped category group.
    #[serde(default = "PreviewLimits::default_per_group")]
    pub per_group: usize,
    /// Rows of the sample alignment table.
    #[serde(default = "PreviewLimits::default_sample_rows")]
    pub sample_rows: usize,
}

impl PreviewLimits {
    fn default_mismatches() -> usize {
        20
    }

    fn default_missing() -> usize {
        10
    }

    fn default_per_group() -> usize {
        5
    }

    fn default_sample_rows() -> usize {
        20
    }

    /// Limits that never truncate.
    pub fn unbounded() -> Self {
        Self {
            mismatches: usize::MAX,
            missing: usize::MAX,
            per_group: usize::MAX,
            sample_rows: usize::MAX,
        }
    }
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            mismatches: Self::default_mismatches(),
            missing: Self::default_missing(),
            per_group: Self::default_per_group(),
            sample_rows: Self::default_sample_rows(),
        }
    }
}
