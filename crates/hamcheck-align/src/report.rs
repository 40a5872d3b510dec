use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::discrepancy::{Category, DiscrepancyRecord, InvalidReason};

/// One row of the positional alignment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRow {
    /// Shared ordinal.
    pub ordinal: usize,
    /// Declared enumerator at the ordinal, when a declaration list is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Local name compared, as used for the comparison.
    pub local: String,
    /// Reference keyname at the same ordinal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Whether both sides agree.
    pub matches: bool,
}

/// Exact, untruncated counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Record count per input table, keyed by origin label.
    pub table_sizes: BTreeMap<String, usize>,
    /// Ordinals whose keynames agree.
    pub aligned: usize,
    /// Declared symbols resolved in the reference by name.
    pub resolved: usize,
    /// Resolved symbols whose handler type agrees with the reference.
    pub verified: usize,
    /// Record count per category.
    pub counts: BTreeMap<Category, usize>,
}

/// Inputs and checks that produced a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProvenance {
    /// SHA256 of every input text, keyed by source label.
    pub input_hashes: BTreeMap<String, String>,
    /// Checks executed, in order.
    pub check_order: Vec<String>,
}

/// Every discrepancy found in a run, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    /// Records per category in order of first appearance.
    pub records: BTreeMap<Category, Vec<DiscrepancyRecord>>,
    /// Positional alignment rows for the sample table.
    pub alignment: Vec<AlignmentRow>,
    /// Aggregate counts.
    pub summary: Summary,
    /// Input hashes and check order.
    pub provenance: ReportProvenance,
    /// True iff no hard-fail category holds a record.
    pub passed: bool,
}

impl DiscrepancyReport {
    /// Records of one category.
    pub fn records(&self, category: Category) -> &[DiscrepancyRecord] {
        self.records
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of records of one category.
    pub fn count(&self, category: Category) -> usize {
        self.records(category).len()
    }

    /// Total number of records across hard-fail categories.
    pub fn hard_fail_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|category| category.is_hard_fail())
            .map(|category| self.count(*category))
            .sum()
    }
}

/// Accumulates records while the comparator runs.
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    report: DiscrepancyReport,
    entry_ordinals: BTreeSet<(bool, usize)>,
}

impl ReportBuilder {
    /// Missing and surplus entries raised by several length checks are kept
    /// once per ordinal.
    pub(crate) fn push(&mut self, record: DiscrepancyRecord) {
        let entry_key = match &record {
            DiscrepancyRecord::InvalidReference {
                reason: InvalidReason::MissingEntry,
                ordinal: Some(ordinal),
                ..
            } => Some((true, *ordinal)),
            DiscrepancyRecord::InvalidReference {
                reason: InvalidReason::SurplusEntry,
                ordinal: Some(ordinal),
                ..
            } => Some((false, *ordinal)),
            _ => None,
        };
        if let Some(key) = entry_key {
            if !self.entry_ordinals.insert(key) {
                return;
            }
        }
        self.insert(record);
    }

    fn insert(&mut self, record: DiscrepancyRecord) {
        self.report
            .records
            .entry(record.category())
            .or_default()
            .push(record);
    }

    pub(crate) fn summary_mut(&mut self) -> &mut Summary {
        &mut self.report.summary
    }

    pub(crate) fn provenance_mut(&mut self) -> &mut ReportProvenance {
        &mut self.report.provenance
    }

    pub(crate) fn push_row(&mut self, row: AlignmentRow) {
        self.report.alignment.push(row);
    }

    pub(crate) fn finish(mut self) -> DiscrepancyReport {
        let counts = self
            .report
            .records
            .iter()
            .map(|(category, records)| (*category, records.len()))
            .collect();
        self.report.summary.counts = counts;
        self.report.passed = self.report.hard_fail_count() == 0;
        self.report
    }
}
