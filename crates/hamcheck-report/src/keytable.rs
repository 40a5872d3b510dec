//! Keyname array and vtable index sample built from the upstream tables.

use hamcheck_core::SymbolTable;

/// Source-shaped keyname array indexed by enumerator value.
///
/// Each entry is annotated with the enumerator at the same ordinal, or an
/// `UNKNOWN_<n>` marker when the enum list is shorter than the hook list.
pub fn keyname_array(hooks: &SymbolTable, enums: &SymbolTable) -> String {
    let mut out = String::new();
    out.push_str("// keyname mapping array (index = Ham enum value)\n");
    out.push_str("static const char* ham_keynames[] = {\n");
    for hook in hooks {
        let symbol = enums
            .get(hook.ordinal)
            .map(|record| record.raw_name.clone())
            .unwrap_or_else(|| format!("UNKNOWN_{}", hook.ordinal));
        out.push_str(&format!("    \"{}\",  // {symbol}\n", hook.raw_name));
    }
    out.push_str("};\n");
    out
}

/// First `limit` hooks joined with their per-platform vtable indices.
///
/// Platforms missing from an offset block print as `?`.
pub fn offset_sample(
    hooks: &SymbolTable,
    enums: &SymbolTable,
    offsets: &SymbolTable,
    limit: usize,
) -> String {
    let index = offsets.key_index();
    let mut out = String::new();
    for hook in hooks.iter().take(limit) {
        let symbol = enums
            .get(hook.ordinal)
            .map(|record| record.raw_name.as_str())
            .unwrap_or("UNKNOWN");
        let values = index.get(&hook.key()).map(|record| &record.platform_values);
        let value = |platform: &str| {
            values
                .and_then(|values| values.get(platform))
                .map(i64::to_string)
                .unwrap_or_else(|| "?".to_string())
        };
        out.push_str(&format!(
            "{symbol:40} -> '{}' -> win:{} lin:{}\n",
            hook.raw_name,
            value("windows"),
            value("linux")
        ));
    }
    if hooks.len() > limit {
        out.push_str(&format!("... and {} more\n", hooks.len() - limit));
    }
    out
}
