use hamcheck_names::{Canonicalizer, NameRules, CORE_CATEGORY};
use proptest::prelude::*;

#[test]
fn plain_names_pass_through_lowercased() {
    let canon = Canonicalizer::default();
    assert_eq!(canon.canonicalize("Ham_TakeDamage"), "takedamage");
    assert_eq!(canon.canonicalize("Ham_Item_PostFrame"), "item_postframe");
    assert_eq!(canon.canonicalize("NoPrefixAtAll"), "noprefixatall");
}

#[test]
fn category_prefixes_are_rewritten() {
    let canon = Canonicalizer::default();
    assert_eq!(canon.canonicalize("Ham_CS_Restart"), "cstrike_restart");
    assert_eq!(canon.canonicalize("Ham_OPF_MySpecialFunc"), "gearbox_myspecialfunc");
    assert_eq!(canon.canonicalize("Ham_TS_BreakableRespawn"), "ts_breakablerespawn");
}

#[test]
fn override_table_handles_irregular_names() {
    let canon = Canonicalizer::default();
    assert_eq!(
        canon.canonicalize("Ham_DOD_WeaponIsWaterSniping"),
        "dod_weapon_playeriswatersniping"
    );
    assert_eq!(
        canon.canonicalize("Ham_DOD_Weapon_IsWaterSniping"),
        "dod_weapon_playeriswatersniping"
    );
    assert_eq!(canon.canonicalize("Ham_SC_IsFacings"), "sc_isfacing");
    assert_eq!(canon.canonicalize("Ham_NS_GetNamedItem"), "ns_givenameditem");
}

#[test]
fn override_wins_over_plausible_rule_result() {
    let rules = NameRules::default().with_override("cstrike_restart", "cstrike_roundrestart");
    let canon = Canonicalizer::new(rules);
    let rewrite = canon.rewrite("Ham_CS_Restart");
    assert_eq!(rewrite.regular, "cstrike_restart");
    assert_eq!(rewrite.canonical, "cstrike_roundrestart");
    assert!(rewrite.overridden());
}

#[test]
fn longest_prefix_wins_then_declaration_order() {
    let rules = NameRules::plain("Ham_")
        .with_category("S_", "short_")
        .with_category("SC_", "sven_")
        .with_category("SC_", "ignored_")
        .with_category("SC_X_", "scx_");
    let canon = Canonicalizer::new(rules);
    assert_eq!(canon.canonicalize("Ham_SC_X_Thing"), "scx_thing");
    assert_eq!(canon.canonicalize("Ham_SC_Thing"), "sven_thing");
    assert_eq!(canon.canonicalize("Ham_S_Thing"), "short_thing");
    assert_eq!(canon.category_of("Ham_SC_Thing"), "SC");
}

#[test]
fn categories_group_by_rule_prefix() {
    let canon = Canonicalizer::default();
    assert_eq!(canon.category_of("Ham_CS_Restart"), "CS");
    assert_eq!(canon.category_of("Ham_OPF_Foo"), "OPF");
    assert_eq!(canon.category_of("Ham_Spawn"), CORE_CATEGORY);
    assert_eq!(canon.category_of("Ham_CSX_Foo"), CORE_CATEGORY);
}

#[test]
fn alternate_rule_sets_load_from_yaml() {
    let yaml = "
common_prefix: Fn_
categories:
  - prefix: A_
    replacement: alpha_
overrides:
  alpha_x: omega
";
    let rules: NameRules = serde_yaml::from_str(yaml).unwrap();
    let canon = Canonicalizer::new(rules);
    assert_eq!(canon.canonicalize("Fn_A_X"), "omega");
    assert_eq!(canon.canonicalize("Fn_A_Y"), "alpha_y");
    assert_eq!(canon.canonicalize("Ham_A_Y"), "ham_a_y");
}

#[test]
fn missing_yaml_fields_fall_back_to_defaults() {
    let rules: NameRules = serde_yaml::from_str("common_prefix: Ham_").unwrap();
    assert_eq!(rules, NameRules::default());
}

proptest! {
    #[test]
    fn canonicalization_is_total_and_pure(raw in "\\PC{0,40}") {
        let canon = Canonicalizer::default();
        let first = canon.canonicalize(&raw);
        let second = canon.canonicalize(&raw);
        prop_assert_eq!(&first, &second);
        let rewrite = canon.rewrite(&raw);
        if !rewrite.overridden() {
            prop_assert_eq!(first, rewrite.regular.clone());
        }
    }

    #[test]
    fn unmatched_names_are_lowercased(tail in "[A-Za-z][A-Za-z0-9]{0,20}") {
        let canon = Canonicalizer::new(NameRules::plain("Ham_"));
        prop_assert_eq!(canon.canonicalize(&format!("Ham_{tail}")), tail.to_lowercase());
    }
}
