//! Plain-text report in a fixed section order.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use hamcheck_align::{
    Category, DiscrepancyRecord, DiscrepancyReport, InvalidReason, MismatchField,
};

use crate::{PreviewLimits, RULE};

/// Renders `report` under `title`.
pub fn render(report: &DiscrepancyReport, limits: &PreviewLimits, title: &str) -> String {
    ReportView::new(report, limits, title).to_string()
}

/// Display adapter writing the report sections in order: counts, length
/// mismatches, duplicates, invalid references, mismatches, ordinal shifts,
/// unmapped by group, not in reference, sample alignment, verdict.
///
/// Sections without records are omitted; the counts and the verdict are
/// always written.
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    report: &'a DiscrepancyReport,
    limits: &'a PreviewLimits,
    title: &'a str,
}

impl<'a> ReportView<'a> {
    /// Wraps a report with its preview limits and heading.
    pub fn new(report: &'a DiscrepancyReport, limits: &'a PreviewLimits, title: &'a str) -> Self {
        Self {
            report,
            limits,
            title,
        }
    }

    fn section(&self, f: &mut Formatter<'_>, category: Category, heading: &str) -> fmt::Result {
        writeln!(f)?;
        banner(f, &format!("{heading} ({})", self.report.count(category)))
    }

    fn write_counts(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let summary = &self.report.summary;
        writeln!(f)?;
        for (origin, size) in &summary.table_sizes {
            writeln!(f, "{:<30}{size}", format!("{origin} entries:"))?;
        }
        writeln!(f, "{:<30}{}", "aligned by ordinal:", summary.aligned)?;
        writeln!(f, "{:<30}{}", "resolved by name:", summary.resolved)?;
        writeln!(f, "{:<30}{}", "verified handler types:", summary.verified)?;
        for category in Category::ALL {
            let marker = if category.is_hard_fail() { "!" } else { " " };
            writeln!(
                f,
                "{:<30}{}",
                format!("{marker}{category}:"),
                self.report.count(category)
            )?;
        }
        Ok(())
    }

    fn write_lengths(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::LengthMismatch);
        if records.is_empty() {
            return Ok(());
        }
        self.section(f, Category::LengthMismatch, "LENGTH MISMATCHES")?;
        preview(f, records, self.limits.missing, |f, record| match record {
            DiscrepancyRecord::LengthMismatch {
                expected_origin,
                actual_origin,
                expected,
                actual,
            } => writeln!(
                f,
                "    {actual_origin} has {actual} entries, {expected_origin} has {expected}"
            ),
            _ => Ok(()),
        })
    }

    fn write_duplicates(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::DuplicateOrdinal);
        if records.is_empty() {
            return Ok(());
        }
        self.section(
            f,
            Category::DuplicateOrdinal,
            "DUPLICATES - WILL NOT COMPILE",
        )?;
        preview(f, records, self.limits.mismatches, |f, record| match record {
            DiscrepancyRecord::DuplicateOrdinal {
                origin,
                name,
                first_ordinal,
                second_ordinal,
                first,
                second,
            } => match (first, second) {
                (Some(first), Some(second)) => writeln!(
                    f,
                    "    {name}: {first} vs {second} ({origin} entries {first_ordinal} and {second_ordinal})"
                ),
                _ => writeln!(
                    f,
                    "    {name}: {origin} entries {first_ordinal} and {second_ordinal}"
                ),
            },
            _ => Ok(()),
        })
    }

    fn write_invalid(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::InvalidReference);
        if records.is_empty() {
            return Ok(());
        }
        self.section(f, Category::InvalidReference, "INVALID REFERENCES")?;
        preview(f, records, self.limits.missing, |f, record| match record {
            DiscrepancyRecord::InvalidReference {
                origin,
                reason,
                ordinal,
                name,
            } => {
                let at = ordinal.map(|o| format!("[{o}] ")).unwrap_or_default();
                match reason {
                    InvalidReason::UnknownCase => {
                        writeln!(f, "    {at}{name}: not a declared enumerator")
                    }
                    InvalidReason::UnknownEntry => {
                        writeln!(f, "    {at}{name}: no declared enumerator in {origin}")
                    }
                    InvalidReason::MissingEntry => {
                        writeln!(f, "    {at}{name}: missing from {origin}")
                    }
                    InvalidReason::SurplusEntry => {
                        writeln!(f, "    {at}{name}: surplus entry in {origin}")
                    }
                }
            }
            _ => Ok(()),
        })
    }

    fn write_mismatches(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::NameMismatch);
        if records.is_empty() {
            return Ok(());
        }
        self.section(f, Category::NameMismatch, "MISMATCHES - THESE NEED FIXING")?;
        preview(f, records, self.limits.mismatches, |f, record| match record {
            DiscrepancyRecord::NameMismatch {
                field: MismatchField::Keyname,
                ordinal,
                symbol,
                reference,
                local,
            } => {
                let symbol = symbol.clone().unwrap_or_else(|| format!("index_{ordinal}"));
                writeln!(f, "[{ordinal}] {symbol}:")?;
                writeln!(f, "      reference expects: '{reference}'")?;
                writeln!(f, "      local has:         '{local}'")
            }
            DiscrepancyRecord::NameMismatch {
                field: MismatchField::HandlerType,
                ordinal,
                symbol,
                reference,
                local,
            } => {
                let symbol = symbol.clone().unwrap_or_else(|| format!("index_{ordinal}"));
                writeln!(f, "{symbol}:")?;
                writeln!(f, "      reference expects: {reference}")?;
                writeln!(f, "      local has:         {local}")
            }
            _ => Ok(()),
        })
    }

    fn write_shifts(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::OrdinalMismatch);
        if records.is_empty() {
            return Ok(());
        }
        self.section(f, Category::OrdinalMismatch, "ORDINAL SHIFTS")?;
        preview(f, records, self.limits.mismatches, |f, record| match record {
            DiscrepancyRecord::OrdinalMismatch {
                name,
                local_ordinal,
                reference_ordinal,
            } => writeln!(
                f,
                "    '{name}' is local [{local_ordinal}] but reference [{reference_ordinal}]"
            ),
            _ => Ok(()),
        })
    }

    fn write_unmapped(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::Unmapped);
        if records.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        banner(
            f,
            &format!("UNMAPPED BY CATEGORY ({} total)", records.len()),
        )?;
        let mut groups: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
        for record in records {
            if let DiscrepancyRecord::Unmapped {
                symbol,
                reference_tag,
                group,
                ..
            } = record
            {
                groups
                    .entry(group.as_str())
                    .or_default()
                    .push((symbol.as_str(), reference_tag.as_deref().unwrap_or("(untyped)")));
            }
        }
        for (group, members) in &groups {
            writeln!(f, "\n{group} ({} functions):", members.len())?;
            preview(f, members, self.limits.per_group, |f, (symbol, tag)| {
                writeln!(f, "    {symbol} -> {tag}")
            })?;
        }
        Ok(())
    }

    fn write_not_in_reference(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let records = self.report.records(Category::NotInReference);
        if records.is_empty() {
            return Ok(());
        }
        self.section(f, Category::NotInReference, "NOT IN REFERENCE")?;
        preview(f, records, self.limits.mismatches, |f, record| match record {
            DiscrepancyRecord::NotInReference {
                symbol,
                looked_for,
                ..
            } => writeln!(f, "    {symbol} (looked for: {looked_for})"),
            _ => Ok(()),
        })
    }

    fn write_sample(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rows = &self.report.alignment;
        let shown = rows.len().min(self.limits.sample_rows);
        if shown == 0 {
            return Ok(());
        }
        writeln!(f)?;
        banner(f, &format!("SAMPLE ALIGNMENT (first {shown})"))?;
        for row in rows.iter().take(shown) {
            let symbol = row.symbol.as_deref().unwrap_or("???");
            let status = if row.matches { "OK" } else { "MISMATCH" };
            writeln!(
                f,
                "[{:3}] {symbol:40} -> '{}' [{status}]",
                row.ordinal, row.local
            )?;
        }
        Ok(())
    }

    fn write_verdict(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if self.report.passed {
            banner(f, "ALL CHECKS PASSED")
        } else {
            banner(
                f,
                &format!(
                    "FAILED: {} hard-fail discrepancies",
                    self.report.hard_fail_count()
                ),
            )
        }
    }
}

impl Display for ReportView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        banner(f, self.title)?;
        self.write_counts(f)?;
        self.write_lengths(f)?;
        self.write_duplicates(f)?;
        self.write_invalid(f)?;
        self.write_mismatches(f)?;
        self.write_shifts(f)?;
        self.write_unmapped(f)?;
        self.write_not_in_reference(f)?;
        self.write_sample(f)?;
        self.write_verdict(f)
    }
}

fn banner(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "{text}")?;
    writeln!(f, "{RULE}")
}

/// Writes at most `limit` items, then the size of the remainder.
fn preview<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    limit: usize,
    mut line: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for item in items.iter().take(limit) {
        line(f, item)?;
    }
    if items.len() > limit {
        writeln!(f, "    ... and {} more", items.len() - limit)?;
    }
    Ok(())
}
