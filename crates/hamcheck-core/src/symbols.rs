//! Ordered symbol tables produced by the extractors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Source that produced a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Upstream hook list (call-form records).
    HookList,
    /// Upstream enumerator list.
    ReferenceEnum,
    /// Local enumerator list.
    DeclaredEnum,
    /// Local function table (array literal entries).
    FunctionTable,
    /// Local switch/case handler map.
    CaseMap,
    /// Upstream gamedata offset blocks.
    Offsets,
}

impl Origin {
    /// Returns true for tables whose names are already lookup keys in the
    /// reference convention.
    pub fn is_keyname_source(&self) -> bool {
        matches!(
            self,
            Origin::HookList | Origin::FunctionTable | Origin::Offsets
        )
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::HookList => "hook list",
            Origin::ReferenceEnum => "reference enum",
            Origin::DeclaredEnum => "declared enum",
            Origin::FunctionTable => "function table",
            Origin::CaseMap => "case map",
            Origin::Offsets => "offsets",
        };
        f.write_str(label)
    }
}

/// Single named record, positioned by its first appearance in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Name exactly as it appeared in the source text.
    pub raw_name: String,
    /// Zero-based position within the owning table.
    pub ordinal: usize,
    /// Optional type or handler tag carried by the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_tag: Option<String>,
    /// Per-platform integer values (offset blocks only).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_values: BTreeMap<String, i64>,
}

impl SymbolRecord {
    /// Lower-cased comparison form of the name.
    pub fn key(&self) -> String {
        self.raw_name.to_lowercase()
    }
}

/// Ordered sequence of records from one source.
///
/// Ordinals are assigned by [`SymbolTable::push`], so they always form the
/// sequence `0..len` without gaps or repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    origin: Origin,
    records: Vec<SymbolRecord>,
}

impl SymbolTable {
    /// Creates an empty table for the given origin.
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            records: Vec::new(),
        }
    }

    /// Builds a table from bare names, mostly useful in tests and fixtures.
    pub fn from_names<I, S>(origin: Origin, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(origin);
        for name in names {
            table.push(name, None);
        }
        table
    }

    /// Builds a table from `(name, tag)` pairs.
    pub fn from_tagged<I, S, T>(origin: Origin, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::new(origin);
        for (name, tag) in entries {
            table.push(name, Some(tag.into()));
        }
        table
    }

    /// Appends a record and returns its ordinal.
    pub fn push(&mut self, raw_name: impl Into<String>, kind_tag: Option<String>) -> usize {
        self.push_with_values(raw_name, kind_tag, BTreeMap::new())
    }

    /// Appends a record carrying per-platform values and returns its ordinal.
    pub fn push_with_values(
        &mut self,
        raw_name: impl Into<String>,
        kind_tag: Option<String>,
        platform_values: BTreeMap<String, i64>,
    ) -> usize {
        let ordinal = self.records.len();
        self.records.push(SymbolRecord {
            raw_name: raw_name.into(),
            ordinal,
            kind_tag,
            platform_values,
        });
        ordinal
    }

    /// Source that produced the table.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Records in ordinal order.
    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no record was extracted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the given ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&SymbolRecord> {
        self.records.get(ordinal)
    }

    /// Iterates over the records in ordinal order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolRecord> {
        self.records.iter()
    }

    /// First record whose lower-cased name equals `key`.
    pub fn find_key(&self, key: &str) -> Option<&SymbolRecord> {
        self.records.iter().find(|record| record.key() == key)
    }

    /// Index from lower-cased name to the first record carrying it.
    pub fn key_index(&self) -> BTreeMap<String, &SymbolRecord> {
        let mut index = BTreeMap::new();
        for record in &self.records {
            index.entry(record.key()).or_insert(record);
        }
        index
    }

    /// Returns true when ordinals are exactly `0..len`.
    pub fn ordinals_contiguous(&self) -> bool {
        self.records
            .iter()
            .enumerate()
            .all(|(idx, record)| record.ordinal == idx)
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolRecord;
    type IntoIter = std::slice::Iter<'a, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
