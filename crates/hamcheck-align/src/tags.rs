/// Canonical tag shared by every removed or deprecated spelling.
pub const DEPRECATED_TAG: &str = "Hook_Deprecated";

/// Folds `Hook_Removed`, `Hook_Deprecated_*` and similar spellings into
/// [`DEPRECATED_TAG`]; other tags are returned unchanged.
pub fn normalize_tag(tag: &str) -> &str {
    if tag.contains("Deprecated") || tag.contains("Removed") {
        DEPRECATED_TAG
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_and_deprecated_fold_together() {
        assert_eq!(normalize_tag("Hook_Removed"), DEPRECATED_TAG);
        assert_eq!(normalize_tag("Hook_Deprecated_Void"), DEPRECATED_TAG);
        assert_eq!(normalize_tag("Hook_Void_Void"), "Hook_Void_Void");
    }
}
