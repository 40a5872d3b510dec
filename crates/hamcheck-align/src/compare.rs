use std::collections::{BTreeMap, BTreeSet};

use hamcheck_core::{Origin, SymbolRecord, SymbolTable};
use hamcheck_names::Canonicalizer;
use tracing::debug;

use crate::cases::CaseAssignments;
use crate::discrepancy::{DiscrepancyRecord, InvalidReason, MismatchField};
use crate::report::{AlignmentRow, DiscrepancyReport, ReportBuilder};
use crate::tags::normalize_tag;

/// Where the local handler assigned to each declared symbol comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerSource {
    /// Case labels grouped under returned handlers.
    Cases(SymbolTable),
    /// Tag of the function table entry at the declared symbol's ordinal.
    EntryTags,
}

/// Tables handed to the comparator. Only the reference is mandatory; each
/// check runs when the tables it needs are present.
#[derive(Debug, Clone)]
pub struct AuditInputs {
    /// Upstream hook list.
    pub reference: SymbolTable,
    /// Local enumerator declarations.
    pub declared: Option<SymbolTable>,
    /// Local function table, parallel to the declarations.
    pub entries: Option<SymbolTable>,
    /// Local handler assignments.
    pub handlers: Option<HandlerSource>,
    /// Digests of the texts the tables were extracted from.
    pub input_hashes: BTreeMap<String, String>,
}

impl AuditInputs {
    /// Starts from a reference table alone.
    pub fn new(reference: SymbolTable) -> Self {
        Self {
            reference,
            declared: None,
            entries: None,
            handlers: None,
            input_hashes: BTreeMap::new(),
        }
    }

    /// Adds the declaration list.
    pub fn with_declared(mut self, declared: SymbolTable) -> Self {
        self.declared = Some(declared);
        self
    }

    /// Adds the function table.
    pub fn with_entries(mut self, entries: SymbolTable) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Adds the handler source.
    pub fn with_handlers(mut self, handlers: HandlerSource) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Records the digest of one input text.
    pub fn with_input_hash(mut self, label: impl Into<String>, digest: impl Into<String>) -> Self {
        self.input_hashes.insert(label.into(), digest.into());
        self
    }

    /// Table compared position by position against the reference.
    fn positional(&self) -> Option<&SymbolTable> {
        self.entries.as_ref().or(self.declared.as_ref())
    }
}

/// Runs every applicable check of `inputs` with the given canonicalizer.
pub fn align(inputs: &AuditInputs, canon: &Canonicalizer) -> DiscrepancyReport {
    Comparator::new(canon).run(inputs)
}

/// Aligns local tables against the reference.
#[derive(Debug, Clone, Copy)]
pub struct Comparator<'a> {
    canon: &'a Canonicalizer,
}

impl<'a> Comparator<'a> {
    /// Creates a comparator over a canonicalizer.
    pub fn new(canon: &'a Canonicalizer) -> Self {
        Self { canon }
    }

    /// Produces the full report.
    pub fn run(&self, inputs: &AuditInputs) -> DiscrepancyReport {
        let mut out = ReportBuilder::default();
        out.provenance_mut().input_hashes = inputs.input_hashes.clone();

        let cases = match &inputs.handlers {
            Some(HandlerSource::Cases(table)) => Some(CaseAssignments::from_table(table)),
            _ => None,
        };

        let sizes = &mut out.summary_mut().table_sizes;
        for table in [
            Some(&inputs.reference),
            inputs.declared.as_ref(),
            inputs.entries.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            sizes.insert(table.origin().to_string(), table.len());
        }
        if let Some(HandlerSource::Cases(table)) = &inputs.handlers {
            sizes.insert(table.origin().to_string(), table.len());
        }

        let declared = inputs.declared.as_ref();
        if let Some(local) = inputs.positional() {
            self.check_lengths(&mut out, &inputs.reference, local, declared);
        }
        if let (Some(declared), Some(entries)) = (&inputs.declared, &inputs.entries) {
            self.check_lengths(&mut out, declared, entries, Some(declared));
        }

        self.push_check(&mut out, "duplicates");
        if let Some(declared) = &inputs.declared {
            self.check_duplicate_declarations(&mut out, declared);
        }
        if let Some(cases) = &cases {
            self.check_duplicate_cases(&mut out, cases);
        }

        if let (Some(declared), Some(cases)) = (&inputs.declared, &cases) {
            self.push_check(&mut out, "references");
            self.check_case_references(&mut out, declared, cases);
        }
        if let (Some(declared), Some(entries)) = (&inputs.declared, &inputs.entries) {
            self.push_check(&mut out, "references");
            self.check_entry_references(&mut out, declared, entries);
        }

        if let Some(local) = inputs.positional() {
            self.push_check(&mut out, "positional");
            self.compare_positional(&mut out, &inputs.reference, local, inputs.declared.as_ref());
        }

        if let Some(declared) = &inputs.declared {
            self.push_check(&mut out, "name-set");
            let mapped = self.mapped_handlers(declared, inputs, cases.as_ref());
            self.compare_by_name(&mut out, &inputs.reference, declared, mapped.as_deref());
        }

        out.finish()
    }

    fn push_check(&self, out: &mut ReportBuilder, name: &str) {
        let order = &mut out.provenance_mut().check_order;
        if !order.iter().any(|existing| existing == name) {
            order.push(name.to_string());
        }
    }

    /// Length check between a governing table and one meant to parallel it.
    ///
    /// Every ordinal beyond the shorter table is reported: missing when the
    /// checked table is short, surplus when it is long. Missing ordinals are
    /// named after the declared enumerator when one exists.
    fn check_lengths(
        &self,
        out: &mut ReportBuilder,
        expected: &SymbolTable,
        actual: &SymbolTable,
        declared: Option<&SymbolTable>,
    ) {
        self.push_check(out, "lengths");
        if expected.len() == actual.len() {
            return;
        }
        debug!(
            expected = expected.len(),
            actual = actual.len(),
            "{} and {} differ in length",
            expected.origin(),
            actual.origin()
        );
        out.push(DiscrepancyRecord::LengthMismatch {
            expected_origin: expected.origin(),
            actual_origin: actual.origin(),
            expected: expected.len(),
            actual: actual.len(),
        });
        for record in &expected.records()[actual.len().min(expected.len())..] {
            let name = declared
                .and_then(|table| table.get(record.ordinal))
                .unwrap_or(record);
            out.push(DiscrepancyRecord::InvalidReference {
                origin: actual.origin(),
                reason: InvalidReason::MissingEntry,
                ordinal: Some(record.ordinal),
                name: name.raw_name.clone(),
            });
        }
        for record in &actual.records()[expected.len().min(actual.len())..] {
            out.push(DiscrepancyRecord::InvalidReference {
                origin: actual.origin(),
                reason: InvalidReason::SurplusEntry,
                ordinal: Some(record.ordinal),
                name: record.raw_name.clone(),
            });
        }
    }

    fn check_duplicate_declarations(&self, out: &mut ReportBuilder, declared: &SymbolTable) {
        let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
        for record in declared {
            match first_seen.get(record.raw_name.as_str()) {
                Some(&first_ordinal) => out.push(DiscrepancyRecord::DuplicateOrdinal {
                    origin: declared.origin(),
                    name: record.raw_name.clone(),
                    first_ordinal,
                    second_ordinal: record.ordinal,
                    first: None,
                    second: None,
                }),
                None => {
                    first_seen.insert(&record.raw_name, record.ordinal);
                }
            }
        }
    }

    fn check_duplicate_cases(&self, out: &mut ReportBuilder, cases: &CaseAssignments) {
        for (label, first, again) in cases.duplicates() {
            out.push(DiscrepancyRecord::DuplicateOrdinal {
                origin: Origin::CaseMap,
                name: label.to_string(),
                first_ordinal: first.ordinal,
                second_ordinal: again.ordinal,
                first: first.handler.clone(),
                second: again.handler.clone(),
            });
        }
    }

    fn check_case_references(
        &self,
        out: &mut ReportBuilder,
        declared: &SymbolTable,
        cases: &CaseAssignments,
    ) {
        let names: BTreeSet<&str> = declared.iter().map(|r| r.raw_name.as_str()).collect();
        for (label, first) in cases.labels() {
            if !names.contains(label) {
                out.push(DiscrepancyRecord::InvalidReference {
                    origin: Origin::CaseMap,
                    reason: InvalidReason::UnknownCase,
                    ordinal: Some(first.ordinal),
                    name: label.to_string(),
                });
            }
        }
    }

    /// Function table keynames must name a declared enumerator.
    fn check_entry_references(
        &self,
        out: &mut ReportBuilder,
        declared: &SymbolTable,
        entries: &SymbolTable,
    ) {
        let keys: BTreeSet<String> = declared
            .iter()
            .map(|record| self.comparison_key(declared.origin(), record))
            .collect();
        for entry in entries {
            if !keys.contains(&entry.key()) {
                out.push(DiscrepancyRecord::InvalidReference {
                    origin: entries.origin(),
                    reason: InvalidReason::UnknownEntry,
                    ordinal: Some(entry.ordinal),
                    name: entry.raw_name.clone(),
                });
            }
        }
    }

    /// Name used to compare a local record against reference keynames.
    fn comparison_key(&self, origin: Origin, record: &SymbolRecord) -> String {
        if origin.is_keyname_source() {
            record.key()
        } else {
            self.canon.canonicalize(&record.raw_name).to_lowercase()
        }
    }

    fn compare_positional(
        &self,
        out: &mut ReportBuilder,
        reference: &SymbolTable,
        local: &SymbolTable,
        declared: Option<&SymbolTable>,
    ) {
        let reference_index = reference.key_index();
        for record in local {
            let ordinal = record.ordinal;
            let local_key = self.comparison_key(local.origin(), record);
            let symbol = declared
                .and_then(|table| table.get(ordinal))
                .map(|symbol| symbol.raw_name.clone());
            let Some(expected) = reference.get(ordinal) else {
                out.push_row(AlignmentRow {
                    ordinal,
                    symbol,
                    local: local_key,
                    reference: None,
                    matches: false,
                });
                continue;
            };
            let matches = expected.key() == local_key;
            out.push_row(AlignmentRow {
                ordinal,
                symbol: symbol.clone(),
                local: local_key.clone(),
                reference: Some(expected.key()),
                matches,
            });
            if matches {
                out.summary_mut().aligned += 1;
                continue;
            }
            out.push(DiscrepancyRecord::NameMismatch {
                field: MismatchField::Keyname,
                ordinal,
                symbol,
                reference: expected.raw_name.clone(),
                local: record.raw_name.clone(),
            });
            if let Some(elsewhere) = reference_index.get(&local_key) {
                out.push(DiscrepancyRecord::OrdinalMismatch {
                    name: local_key,
                    local_ordinal: ordinal,
                    reference_ordinal: elsewhere.ordinal,
                });
            }
        }
    }

    /// Handler assigned locally to each declared ordinal, or `None` when no
    /// handler source was supplied.
    fn mapped_handlers(
        &self,
        declared: &SymbolTable,
        inputs: &AuditInputs,
        cases: Option<&CaseAssignments>,
    ) -> Option<Vec<Option<String>>> {
        match (&inputs.handlers, cases) {
            (Some(HandlerSource::Cases(_)), Some(cases)) => Some(
                declared
                    .iter()
                    .map(|record| cases.first_handler(&record.raw_name).map(str::to_string))
                    .collect(),
            ),
            (Some(HandlerSource::EntryTags), _) => Some(
                declared
                    .iter()
                    .map(|record| {
                        inputs
                            .entries
                            .as_ref()
                            .and_then(|entries| entries.get(record.ordinal))
                            .and_then(|entry| entry.kind_tag.clone())
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    fn compare_by_name(
        &self,
        out: &mut ReportBuilder,
        reference: &SymbolTable,
        declared: &SymbolTable,
        mapped: Option<&[Option<String>]>,
    ) {
        let reference_index = reference.key_index();
        for record in declared {
            let looked_for = self.canon.canonicalize(&record.raw_name).to_lowercase();
            let local_tag = mapped.and_then(|tags| tags.get(record.ordinal).cloned().flatten());
            let Some(found) = reference_index.get(&looked_for) else {
                out.push(DiscrepancyRecord::NotInReference {
                    symbol: record.raw_name.clone(),
                    looked_for,
                    local_tag,
                });
                continue;
            };
            out.summary_mut().resolved += 1;
            if mapped.is_none() {
                continue;
            }
            let Some(local_tag) = local_tag else {
                out.push(DiscrepancyRecord::Unmapped {
                    symbol: record.raw_name.clone(),
                    reference_name: found.raw_name.clone(),
                    reference_tag: found.kind_tag.clone(),
                    group: self.canon.category_of(&record.raw_name).to_string(),
                });
                continue;
            };
            let expected = found.kind_tag.as_deref().map(normalize_tag);
            if expected == Some(normalize_tag(&local_tag)) {
                out.summary_mut().verified += 1;
                continue;
            }
            out.push(DiscrepancyRecord::NameMismatch {
                field: MismatchField::HandlerType,
                ordinal: record.ordinal,
                symbol: Some(record.raw_name.clone()),
                reference: found
                    .kind_tag
                    .clone()
                    .unwrap_or_else(|| "(untyped)".to_string()),
                local: local_tag,
            });
        }
    }
}
