use hamcheck_align::{
    align, AuditInputs, Category, DiscrepancyRecord, HandlerSource, InvalidReason, MismatchField,
};
use hamcheck_core::{Origin, SymbolTable};
use hamcheck_extract::SwitchForm;
use hamcheck_names::Canonicalizer;

fn reference(names: &[&str]) -> SymbolTable {
    SymbolTable::from_tagged(Origin::HookList, names.iter().map(|n| (*n, "Hook_Void_Void")))
}

#[test]
fn full_match_passes() {
    let reference = SymbolTable::from_tagged(
        Origin::HookList,
        [("foo", "Hook_TypeA"), ("bar", "Hook_TypeB")],
    );
    let declared = SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Foo", "Ham_Bar"]);
    let entries = SymbolTable::from_tagged(
        Origin::FunctionTable,
        [("foo", "Hook_TypeA"), ("bar", "Hook_TypeB")],
    );
    let inputs = AuditInputs::new(reference)
        .with_declared(declared)
        .with_entries(entries)
        .with_handlers(HandlerSource::EntryTags);

    let report = align(&inputs, &Canonicalizer::default());
    assert!(report.passed);
    assert_eq!(report.hard_fail_count(), 0);
    assert_eq!(report.summary.aligned, 2);
    assert_eq!(report.summary.resolved, 2);
    assert_eq!(report.summary.verified, 2);
    assert!(report.records.is_empty());
    assert_eq!(
        report.provenance.check_order,
        ["lengths", "duplicates", "references", "positional", "name-set"]
    );
}

#[test]
fn short_local_table_reports_every_missing_ordinal() {
    let names: Vec<String> = (0..10).map(|i| format!("hook{i}")).collect();
    let reference = SymbolTable::from_tagged(
        Origin::HookList,
        names.iter().map(|n| (n.clone(), "Hook_Void_Void")),
    );
    let entries = SymbolTable::from_names(Origin::FunctionTable, names[..8].iter().cloned());

    let report = align(&AuditInputs::new(reference).with_entries(entries), &Canonicalizer::default());
    assert!(!report.passed);
    assert_eq!(
        report.records(Category::LengthMismatch),
        [DiscrepancyRecord::LengthMismatch {
            expected_origin: Origin::HookList,
            actual_origin: Origin::FunctionTable,
            expected: 10,
            actual: 8,
        }]
    );
    let missing: Vec<_> = report
        .records(Category::InvalidReference)
        .iter()
        .map(|record| match record {
            DiscrepancyRecord::InvalidReference {
                reason: InvalidReason::MissingEntry,
                ordinal: Some(ordinal),
                ..
            } => *ordinal,
            other => panic!("unexpected record {other:?}"),
        })
        .collect();
    assert_eq!(missing, [8, 9]);
    assert_eq!(report.count(Category::NameMismatch), 0);
}

#[test]
fn missing_entries_are_not_repeated_across_length_checks() {
    let names = ["a", "b", "c"];
    let inputs = AuditInputs::new(reference(&names))
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_A", "Ham_B", "Ham_C"]))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["a"]));
    let report = align(&inputs, &Canonicalizer::default());
    assert_eq!(report.count(Category::LengthMismatch), 2);
    assert_eq!(report.count(Category::InvalidReference), 2);
    let missing: Vec<&str> = report
        .records(Category::InvalidReference)
        .iter()
        .filter_map(|record| match record {
            DiscrepancyRecord::InvalidReference { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(missing, ["Ham_B", "Ham_C"]);
}

#[test]
fn missing_entry_is_named_after_its_enumerator() {
    let inputs = AuditInputs::new(reference(&["spawn", "precache", "keyvalue"]))
        .with_declared(SymbolTable::from_names(
            Origin::DeclaredEnum,
            ["Ham_Spawn", "Ham_Precache", "Ham_Keyvalue"],
        ))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["spawn"]));
    let report = align(&inputs, &Canonicalizer::default());
    assert_eq!(
        report.records(Category::InvalidReference)[0],
        DiscrepancyRecord::InvalidReference {
            origin: Origin::FunctionTable,
            reason: InvalidReason::MissingEntry,
            ordinal: Some(1),
            name: "Ham_Precache".to_string(),
        }
    );
}

#[test]
fn function_table_keyname_without_enumerator_fails() {
    let inputs = AuditInputs::new(reference(&["spawn", "bogus"]))
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Spawn", "Ham_Think"]))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["spawn", "bogus"]));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(!report.passed);
    assert!(report
        .records(Category::InvalidReference)
        .contains(&DiscrepancyRecord::InvalidReference {
            origin: Origin::FunctionTable,
            reason: InvalidReason::UnknownEntry,
            ordinal: Some(1),
            name: "bogus".to_string(),
        }));
    assert!(report.provenance.check_order.iter().any(|c| c == "references"));
}

#[test]
fn surplus_local_entries_are_invalid_references() {
    let inputs = AuditInputs::new(reference(&["a"]))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["a", "b"]));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(!report.passed);
    assert!(matches!(
        report.records(Category::InvalidReference),
        [DiscrepancyRecord::InvalidReference {
            reason: InvalidReason::SurplusEntry,
            ordinal: Some(1),
            ..
        }]
    ));
}

#[test]
fn duplicate_case_names_both_handlers_and_fails() {
    let callbacks = "
        case Ham_Spawn:
        case Ham_Think:
            return reinterpret_cast<void*>(Hook_Void_Void);
        case Ham_Spawn:
            return reinterpret_cast<void*>(Hook_Int_Void);
    ";
    let cases = SwitchForm::default().extract(callbacks).unwrap();
    let inputs = AuditInputs::new(reference(&["spawn", "think"]))
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Spawn", "Ham_Think"]))
        .with_handlers(HandlerSource::Cases(cases));
    let report = align(&inputs, &Canonicalizer::default());

    assert!(!report.passed);
    assert_eq!(
        report.records(Category::DuplicateOrdinal),
        [DiscrepancyRecord::DuplicateOrdinal {
            origin: Origin::CaseMap,
            name: "Ham_Spawn".to_string(),
            first_ordinal: 0,
            second_ordinal: 2,
            first: Some("Hook_Void_Void".to_string()),
            second: Some("Hook_Int_Void".to_string()),
        }]
    );
    assert_eq!(report.summary.verified, 2);
}

#[test]
fn duplicate_declarations_are_reported() {
    let declared = SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_A", "Ham_B", "Ham_A"]);
    let report = align(
        &AuditInputs::new(reference(&["a", "b", "a"])).with_declared(declared),
        &Canonicalizer::default(),
    );
    assert!(matches!(
        report.records(Category::DuplicateOrdinal),
        [DiscrepancyRecord::DuplicateOrdinal {
            origin: Origin::DeclaredEnum,
            first_ordinal: 0,
            second_ordinal: 2,
            ..
        }]
    ));
    assert!(!report.passed);
}

#[test]
fn undeclared_case_label_is_invalid_reference() {
    let cases = SymbolTable::from_tagged(
        Origin::CaseMap,
        [("Ham_Spawn", "Hook_Void_Void"), ("Ham_Ghost", "Hook_Void_Void")],
    );
    let inputs = AuditInputs::new(reference(&["spawn"]))
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Spawn"]))
        .with_handlers(HandlerSource::Cases(cases));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(!report.passed);
    assert_eq!(
        report.records(Category::InvalidReference),
        [DiscrepancyRecord::InvalidReference {
            origin: Origin::CaseMap,
            reason: InvalidReason::UnknownCase,
            ordinal: Some(1),
            name: "Ham_Ghost".to_string(),
        }]
    );
}

#[test]
fn not_in_reference_is_informational() {
    let inputs = AuditInputs::new(reference(&["spawn", "extra"]))
        .with_declared(SymbolTable::from_names(
            Origin::DeclaredEnum,
            ["Ham_Spawn", "Ham_MyCustomHook"],
        ))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["spawn", "extra"]))
        .with_handlers(HandlerSource::Cases(SymbolTable::from_tagged(
            Origin::CaseMap,
            [("Ham_Spawn", "Hook_Void_Void")],
        )));

    let report = align(&inputs, &Canonicalizer::default());
    assert_eq!(
        report.records(Category::NotInReference),
        [DiscrepancyRecord::NotInReference {
            symbol: "Ham_MyCustomHook".to_string(),
            looked_for: "mycustomhook".to_string(),
            local_tag: None,
        }]
    );
    assert!(!Category::NotInReference.is_hard_fail());
    // The function table still names a keyname no enumerator declares.
    assert_eq!(report.hard_fail_count(), 1);
    assert!(matches!(
        report.records(Category::InvalidReference),
        [DiscrepancyRecord::InvalidReference {
            reason: InvalidReason::UnknownEntry,
            ordinal: Some(1),
            ..
        }]
    ));
}

#[test]
fn unmapped_symbols_carry_expected_type_and_group() {
    let reference = SymbolTable::from_tagged(
        Origin::HookList,
        [("spawn", "Hook_Void_Void"), ("cstrike_restart", "Hook_Void_Void")],
    );
    let inputs = AuditInputs::new(reference)
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Spawn", "Ham_CS_Restart"]))
        .with_handlers(HandlerSource::Cases(SymbolTable::from_tagged(
            Origin::CaseMap,
            [("Ham_Spawn", "Hook_Void_Void")],
        )));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(report.passed);
    assert_eq!(
        report.records(Category::Unmapped),
        [DiscrepancyRecord::Unmapped {
            symbol: "Ham_CS_Restart".to_string(),
            reference_name: "cstrike_restart".to_string(),
            reference_tag: Some("Hook_Void_Void".to_string()),
            group: "CS".to_string(),
        }]
    );
}

#[test]
fn handler_type_mismatch_fails_but_removed_spellings_agree() {
    let reference = SymbolTable::from_tagged(
        Origin::HookList,
        [("spawn", "Hook_Void_Void"), ("oldhook", "Hook_Removed")],
    );
    let inputs = AuditInputs::new(reference)
        .with_declared(SymbolTable::from_names(Origin::DeclaredEnum, ["Ham_Spawn", "Ham_OldHook"]))
        .with_handlers(HandlerSource::Cases(SymbolTable::from_tagged(
            Origin::CaseMap,
            [("Ham_Spawn", "Hook_Int_Void"), ("Ham_OldHook", "Hook_Deprecated")],
        )));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(!report.passed);
    assert_eq!(report.summary.verified, 1);
    assert_eq!(
        report.records(Category::NameMismatch),
        [DiscrepancyRecord::NameMismatch {
            field: MismatchField::HandlerType,
            ordinal: 0,
            symbol: Some("Ham_Spawn".to_string()),
            reference: "Hook_Void_Void".to_string(),
            local: "Hook_Int_Void".to_string(),
        }]
    );
}

#[test]
fn shifted_keyname_gets_ordinal_hint() {
    let inputs = AuditInputs::new(reference(&["spawn", "precache", "keyvalue"]))
        .with_entries(SymbolTable::from_names(
            Origin::FunctionTable,
            ["spawn", "keyvalue", "precache"],
        ));
    let report = align(&inputs, &Canonicalizer::default());
    assert!(!report.passed);
    assert_eq!(report.count(Category::NameMismatch), 2);
    assert_eq!(
        report.records(Category::OrdinalMismatch)[0],
        DiscrepancyRecord::OrdinalMismatch {
            name: "keyvalue".to_string(),
            local_ordinal: 1,
            reference_ordinal: 2,
        }
    );
    assert_eq!(report.summary.aligned, 1);
    assert!(!report.alignment[1].matches);
}

#[test]
fn keynames_compare_without_canonicalization() {
    // An override must not mask a wrong keyname in the function table.
    let inputs = AuditInputs::new(reference(&["dod_weapon_playeriswatersniping"]))
        .with_entries(SymbolTable::from_names(
            Origin::FunctionTable,
            ["dod_weapon_iswatersniping"],
        ));
    let report = align(&inputs, &Canonicalizer::default());
    assert_eq!(report.count(Category::NameMismatch), 1);

    let declared_only = AuditInputs::new(reference(&["dod_weapon_playeriswatersniping"]))
        .with_declared(SymbolTable::from_names(
            Origin::DeclaredEnum,
            ["Ham_DOD_Weapon_IsWaterSniping"],
        ));
    let report = align(&declared_only, &Canonicalizer::default());
    assert!(report.passed);
    assert_eq!(report.summary.aligned, 1);
}

#[test]
fn report_serializes_with_stable_category_keys() {
    let inputs = AuditInputs::new(reference(&["a", "b"]))
        .with_entries(SymbolTable::from_names(Origin::FunctionTable, ["a"]))
        .with_input_hash("hook list", "abc");
    let report = align(&inputs, &Canonicalizer::default());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"length-mismatch\":["));
    assert!(json.contains("\"category\":\"invalid-reference\""));
    assert!(json.contains("\"passed\":false"));
    assert_eq!(report.provenance.input_hashes["hook list"], "abc");
}
