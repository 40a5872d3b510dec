use hamcheck_extract::{extract, ArrayForm, CallForm, EnumForm, OffsetForm, Shape, SwitchForm};
use proptest::prelude::*;

fn shapes() -> Vec<Shape> {
    vec![
        Shape::Call(CallForm::default()),
        Shape::Enum(EnumForm::default()),
        Shape::ArrayLiteral(ArrayForm::default()),
        Shape::SwitchCase(SwitchForm::default()),
        Shape::OffsetBlock(OffsetForm::default()),
    ]
}

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        ("[a-z]{1,8}", any::<bool>()).prop_map(|(name, removed)| if removed {
            format!("{{ V_REMOVED(\"{name}\") }},")
        } else {
            format!("{{ V(\"{name}\", Void_Void) }},")
        }),
        "[A-Za-z]{1,8}".prop_map(|name| format!("    Ham_{name},")),
        "[A-Za-z]{1,8}".prop_map(|name| format!("case Ham_{name}:")),
        "[A-Za-z]{1,8}".prop_map(|name| format!("return reinterpret_cast<void*>(Hook_{name});")),
        "[a-z]{1,8}".prop_map(|name| format!("{{\"{name}\", HAM_RET_VOID, 0, {{}}}},")),
        "[a-z]{1,8}".prop_map(|name| format!("\"{name}\"")),
        (0i64..4096, any::<bool>()).prop_map(|(value, hex)| if hex {
            format!("\"windows\" \"0x{value:x}\"")
        } else {
            format!("\"linux\" \"{value}\"")
        }),
        Just("HamFunctionInfo g_hamFunctions[] = {".to_string()),
        Just("{nullptr, HAM_RET_VOID, 0, {}}".to_string()),
        "[ -~]{0,30}",
    ]
}

proptest! {
    #[test]
    fn extraction_is_deterministic_and_contiguous(lines in proptest::collection::vec(source_line(), 0..60)) {
        let text = lines.join("\n");
        for shape in shapes() {
            let first = extract(&text, &shape).unwrap();
            let second = extract(&text, &shape).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(first.ordinals_contiguous());
        }
    }
}
