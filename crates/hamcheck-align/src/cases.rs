use hamcheck_core::SymbolTable;
use indexmap::IndexMap;

/// One occurrence of a case label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Ordinal of the occurrence in the case table.
    pub ordinal: usize,
    /// Handler returned by the run containing the label.
    pub handler: Option<String>,
}

/// Append-only multimap from case label to every handler assigned to it,
/// keyed in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseAssignments {
    by_label: IndexMap<String, Vec<Assignment>>,
}

impl CaseAssignments {
    /// Accumulates every record of a case table without overwriting.
    pub fn from_table(table: &SymbolTable) -> Self {
        let mut by_label: IndexMap<String, Vec<Assignment>> = IndexMap::new();
        for record in table {
            by_label
                .entry(record.raw_name.clone())
                .or_default()
                .push(Assignment {
                    ordinal: record.ordinal,
                    handler: record.kind_tag.clone(),
                });
        }
        Self { by_label }
    }

    /// Distinct labels with their first occurrence, in appearance order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &Assignment)> + '_ {
        self.by_label
            .iter()
            .filter_map(|(label, seen)| seen.first().map(|first| (label.as_str(), first)))
    }

    /// Handler of the first run that claimed `label`.
    pub fn first_handler(&self, label: &str) -> Option<&str> {
        self.by_label
            .get(label)
            .and_then(|seen| seen.first())
            .and_then(|first| first.handler.as_deref())
    }

    /// Every re-assignment, paired with the first assignment of its label.
    pub fn duplicates(&self) -> Vec<(&str, &Assignment, &Assignment)> {
        let mut found = Vec::new();
        for (label, seen) in &self.by_label {
            if let Some((first, later)) = seen.split_first() {
                for again in later {
                    found.push((label.as_str(), first, again));
                }
            }
        }
        found
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// True when no label was recorded.
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}
