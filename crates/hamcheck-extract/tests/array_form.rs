use hamcheck_extract::ArrayForm;

const MANAGER: &str = r#"
static const char* unrelated[] = {
    {"notme", HAM_RET_VOID},
};

HamFunctionInfo g_hamFunctions[] = {
    // CBaseEntity virtuals (0-54)
    {"spawn",      HAM_RET_VOID,   0, {}},                                  // 0
    {"precache",   HAM_RET_VOID,   0, {}},                                  // 1
    {"TakeDamage", HAM_RET_INT,    4, {HAM_PARAM_ENTVAR}},                  // 2
    {nullptr, HAM_RET_VOID, 0, {}}
};

HamFunctionInfo after[] = {
    {"ignored", HAM_RET_VOID, 0, {}},
};
"#;

#[test]
fn array_form_reads_between_marker_and_terminator() {
    let table = ArrayForm::default().extract(MANAGER).unwrap();
    let names: Vec<_> = table.iter().map(|r| r.raw_name.as_str()).collect();
    assert_eq!(names, ["spawn", "precache", "TakeDamage"]);
    assert_eq!(table.get(2).unwrap().key(), "takedamage");
    assert_eq!(table.get(0).unwrap().kind_tag.as_deref(), Some("HAM_RET_VOID"));
}

#[test]
fn missing_marker_yields_empty_table() {
    let table = ArrayForm::default()
        .extract(r#"{"spawn", HAM_RET_VOID}"#)
        .unwrap();
    assert!(table.is_empty());
}

#[test]
fn spaced_terminator_stops_accumulation() {
    let text = "HamFunctionInfo g_hamFunctions[] = {\n{\"a\", X},\n{ nullptr, X},\n{\"b\", X},\n";
    let table = ArrayForm::default().extract(text).unwrap();
    assert_eq!(table.len(), 1);
}
