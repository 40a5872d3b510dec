use hamcheck_core::serde::to_canonical_json_bytes;
use hamcheck_core::{text_digest, Origin, SymbolTable};
use proptest::prelude::*;

#[test]
fn push_assigns_positions_in_order() {
    let mut table = SymbolTable::new(Origin::DeclaredEnum);
    assert_eq!(table.push("Ham_Spawn", None), 0);
    assert_eq!(table.push("Ham_Precache", None), 1);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).map(|r| r.raw_name.as_str()), Some("Ham_Precache"));
    assert!(table.ordinals_contiguous());
}

#[test]
fn key_lookup_is_case_insensitive_and_first_wins() {
    let table = SymbolTable::from_tagged(
        Origin::HookList,
        [("Spawn", "Hook_Void_Void"), ("spawn", "Hook_Int_Void")],
    );
    let record = table.find_key("spawn").expect("present");
    assert_eq!(record.ordinal, 0);
    let index = table.key_index();
    assert_eq!(index.len(), 1);
    assert_eq!(index["spawn"].kind_tag.as_deref(), Some("Hook_Void_Void"));
}

#[test]
fn canonical_json_is_stable() {
    let table = SymbolTable::from_names(Origin::FunctionTable, ["spawn", "precache"]);
    let first = to_canonical_json_bytes(&table).unwrap();
    let second = to_canonical_json_bytes(&table.clone()).unwrap();
    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("\"origin\":\"function-table\""));
}

#[test]
fn digest_depends_only_on_text() {
    assert_eq!(text_digest("abc"), text_digest("abc"));
    assert_ne!(text_digest("abc"), text_digest("abd"));
    assert_eq!(text_digest("").len(), 64);
}

#[test]
fn keyname_sources() {
    assert!(Origin::FunctionTable.is_keyname_source());
    assert!(Origin::HookList.is_keyname_source());
    assert!(!Origin::DeclaredEnum.is_keyname_source());
    assert!(!Origin::CaseMap.is_keyname_source());
}

proptest! {
    #[test]
    fn ordinals_are_always_contiguous(names in proptest::collection::vec("[A-Za-z_]{1,12}", 0..40)) {
        let table = SymbolTable::from_names(Origin::DeclaredEnum, names.clone());
        prop_assert_eq!(table.len(), names.len());
        prop_assert!(table.ordinals_contiguous());
        for (idx, record) in table.iter().enumerate() {
            prop_assert_eq!(record.ordinal, idx);
        }
    }
}
