//! Call-form records: `{ V("name", Type) }` and `{ V_REMOVED("name") }`.

use hamcheck_core::{HamError, Origin, SymbolTable};
use regex::escape;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile;

/// Configuration for the invocation-style hook list entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallForm {
    /// Name of the invocation macro.
    #[serde(default = "CallForm::default_macro_name")]
    pub macro_name: String,
    /// Suffix marking the one-argument "removed" variant.
    #[serde(default = "CallForm::default_removed_suffix")]
    pub removed_suffix: String,
    /// Prefix prepended to the bare type identifier to form the tag.
    #[serde(default = "CallForm::default_tag_prefix")]
    pub tag_prefix: String,
    /// Sentinel tag given to removed entries.
    #[serde(default = "CallForm::default_removed_tag")]
    pub removed_tag: String,
}

impl CallForm {
    fn default_macro_name() -> String {
        "V".to_string()
    }

    fn default_removed_suffix() -> String {
        "_REMOVED".to_string()
    }

    fn default_tag_prefix() -> String {
        "Hook_".to_string()
    }

    fn default_removed_tag() -> String {
        "Hook_Removed".to_string()
    }

    fn pattern(&self) -> String {
        format!(
            r#"\{{\s*{}({})?\(\s*"(\w+)"(?:\s*,\s*(\w+))?"#,
            escape(&self.macro_name),
            escape(&self.removed_suffix)
        )
    }

    /// Scans `text` in order and returns one record per invocation.
    pub fn extract(&self, text: &str) -> Result<SymbolTable, HamError> {
        let pattern = compile(&self.pattern())?;
        let mut table = SymbolTable::new(Origin::HookList);
        for caps in pattern.captures_iter(text) {
            let Some(name) = caps.get(2) else {
                continue;
            };
            let tag = if caps.get(1).is_some() {
                Some(self.removed_tag.clone())
            } else {
                caps.get(3)
                    .map(|ty| format!("{}{}", self.tag_prefix, ty.as_str()))
            };
            table.push(name.as_str(), tag);
        }
        debug!(records = table.len(), "extracted call-form records");
        Ok(table)
    }
}

impl Default for CallForm {
    fn default() -> Self {
        Self {
            macro_name: Self::default_macro_name(),
            removed_suffix: Self::default_removed_suffix(),
            tag_prefix: Self::default_tag_prefix(),
            removed_tag: Self::default_removed_tag(),
        }
    }
}
