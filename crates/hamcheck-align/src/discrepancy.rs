use std::fmt;

use hamcheck_core::Origin;
use serde::{Deserialize, Serialize};

/// Report section a discrepancy belongs to, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Two tables meant to be parallel differ in length.
    LengthMismatch,
    /// A label or declaration appears more than once.
    DuplicateOrdinal,
    /// An entry refers to something that does not exist.
    InvalidReference,
    /// Keyname or handler type disagrees with the reference.
    NameMismatch,
    /// A mismatched local name exists in the reference at another position.
    OrdinalMismatch,
    /// Found in the reference but no local handler is assigned.
    Unmapped,
    /// Local symbol whose canonical name is absent from the reference.
    NotInReference,
}

impl Category {
    /// Every category, in rendering order.
    pub const ALL: [Category; 7] = [
        Category::LengthMismatch,
        Category::DuplicateOrdinal,
        Category::InvalidReference,
        Category::NameMismatch,
        Category::OrdinalMismatch,
        Category::Unmapped,
        Category::NotInReference,
    ];

    /// Whether any record of this category fails the run.
    pub fn is_hard_fail(&self) -> bool {
        matches!(
            self,
            Category::LengthMismatch
                | Category::NameMismatch
                | Category::DuplicateOrdinal
                | Category::InvalidReference
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::LengthMismatch => "length mismatch",
            Category::DuplicateOrdinal => "duplicate",
            Category::InvalidReference => "invalid reference",
            Category::NameMismatch => "mismatch",
            Category::OrdinalMismatch => "ordinal shift",
            Category::Unmapped => "unmapped",
            Category::NotInReference => "not in reference",
        };
        f.write_str(label)
    }
}

/// Which value a [`DiscrepancyRecord::NameMismatch`] compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchField {
    /// Lookup keyname at a shared ordinal.
    Keyname,
    /// Handler type assigned to a symbol found by name.
    HandlerType,
}

/// Why a [`DiscrepancyRecord::InvalidReference`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidReason {
    /// Case label that is not a declared enumerator.
    UnknownCase,
    /// Function table keyname that no declared enumerator canonicalizes to.
    UnknownEntry,
    /// Ordinal present in the governing table but missing locally.
    MissingEntry,
    /// Local ordinal beyond the end of the governing table.
    SurplusEntry,
}

/// Single finding, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum DiscrepancyRecord {
    /// Local name found in the reference at a different ordinal.
    OrdinalMismatch {
        /// Lower-cased name compared.
        name: String,
        /// Position in the local table.
        local_ordinal: usize,
        /// Position of the same name in the reference.
        reference_ordinal: usize,
    },
    /// Keyname or handler type differs from the reference.
    NameMismatch {
        /// Compared value.
        field: MismatchField,
        /// Ordinal the comparison was made at.
        ordinal: usize,
        /// Declared enumerator involved, when known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
        /// Value expected by the reference.
        reference: String,
        /// Value found locally.
        local: String,
    },
    /// Label or declaration assigned more than once.
    DuplicateOrdinal {
        /// Table containing the duplicate.
        origin: Origin,
        /// Duplicated identifier.
        name: String,
        /// Ordinal of the first assignment.
        first_ordinal: usize,
        /// Ordinal of the repeated assignment.
        second_ordinal: usize,
        /// Value of the first assignment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<String>,
        /// Value of the repeated assignment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        second: Option<String>,
    },
    /// Entry referring to a missing symbol or ordinal.
    InvalidReference {
        /// Table holding the reference.
        origin: Origin,
        /// Failure reason.
        reason: InvalidReason,
        /// Ordinal involved, for missing or surplus entries.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ordinal: Option<usize>,
        /// Name involved.
        name: String,
    },
    /// Symbol resolved in the reference but without a local handler.
    Unmapped {
        /// Declared enumerator.
        symbol: String,
        /// Reference keyname it resolved to.
        reference_name: String,
        /// Handler type the reference expects.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference_tag: Option<String>,
        /// Category prefix group of the symbol.
        group: String,
    },
    /// Symbol whose canonical name is not in the reference.
    NotInReference {
        /// Declared enumerator.
        symbol: String,
        /// Canonical name that was looked up.
        looked_for: String,
        /// Handler mapped locally, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        local_tag: Option<String>,
    },
    /// Tables meant to be parallel differ in length.
    LengthMismatch {
        /// Governing table.
        expected_origin: Origin,
        /// Table checked against it.
        actual_origin: Origin,
        /// Length of the governing table.
        expected: usize,
        /// Length of the checked table.
        actual: usize,
    },
}

impl DiscrepancyRecord {
    /// Category of the record.
    pub fn category(&self) -> Category {
        match self {
            DiscrepancyRecord::OrdinalMismatch { .. } => Category::OrdinalMismatch,
            DiscrepancyRecord::NameMismatch { .. } => Category::NameMismatch,
            DiscrepancyRecord::DuplicateOrdinal { .. } => Category::DuplicateOrdinal,
            DiscrepancyRecord::InvalidReference { .. } => Category::InvalidReference,
            DiscrepancyRecord::Unmapped { .. } => Category::Unmapped,
            DiscrepancyRecord::NotInReference { .. } => Category::NotInReference,
            DiscrepancyRecord::LengthMismatch { .. } => Category::LengthMismatch,
        }
    }
}
