//! Proposed switch/case blocks for unmapped symbols.

use std::collections::{BTreeMap, BTreeSet};

use hamcheck_align::{normalize_tag, Category, DiscrepancyRecord, DiscrepancyReport, DEPRECATED_TAG};
use tracing::debug;

/// Groups every unmapped symbol under the handler the reference expects
/// and emits one case block per handler, handlers and labels sorted.
///
/// Symbols whose expected handler is untyped, deprecated or removed are
/// skipped. Returns an empty string when nothing is left to propose.
pub fn proposed_cases(report: &DiscrepancyReport) -> String {
    let mut by_handler: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut skipped = 0usize;
    for record in report.records(Category::Unmapped) {
        let DiscrepancyRecord::Unmapped {
            symbol,
            reference_tag,
            ..
        } = record
        else {
            continue;
        };
        match reference_tag.as_deref() {
            Some(tag) if normalize_tag(tag) != DEPRECATED_TAG => {
                by_handler.entry(tag).or_default().insert(symbol.as_str());
            }
            _ => skipped += 1,
        }
    }
    debug!(handlers = by_handler.len(), skipped, "grouped unmapped symbols");

    let mut out = String::new();
    for (handler, labels) in by_handler {
        let family = handler.strip_prefix("Hook_").unwrap_or(handler);
        out.push_str(&format!("\n        // {family} functions\n"));
        for label in labels {
            out.push_str(&format!("        case {label}:\n"));
        }
        out.push_str(&format!(
            "            return reinterpret_cast<void*>({handler});\n"
        ));
    }
    out
}
