//! Switch/case runs that map enumerators onto a shared handler.

use hamcheck_core::{HamError, Origin, SymbolTable};
use regex::escape;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile;

/// Configuration for `case X:` ... `return Handler` runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchForm {
    /// Prefix of case identifiers.
    #[serde(default = "SwitchForm::default_case_prefix")]
    pub case_prefix: String,
    /// Prefix of handler identifiers.
    #[serde(default = "SwitchForm::default_handler_prefix")]
    pub handler_prefix: String,
}

impl SwitchForm {
    fn default_case_prefix() -> String {
        "Ham_".to_string()
    }

    fn default_handler_prefix() -> String {
        "Hook_".to_string()
    }

    /// Emits one record per case label, tagged with the handler its run
    /// returns, in order of appearance.
    ///
    /// A label that appears in several runs yields several records; the
    /// table is the append-only log that duplicate detection runs over.
    /// Labels still pending when the text ends, or when their run returns
    /// something other than a handler, are dropped.
    pub fn extract(&self, text: &str) -> Result<SymbolTable, HamError> {
        let case = compile(&format!(r"case\s+({}\w+)\s*:", escape(&self.case_prefix)))?;
        let handler = compile(&format!(
            r"return\s+(?:reinterpret_cast\s*<[^>]*>\s*\(\s*)?({}\w+)",
            escape(&self.handler_prefix)
        ))?;
        let any_return = compile(r"\breturn\b")?;
        let mut table = SymbolTable::new(Origin::CaseMap);
        let mut pending: Vec<String> = Vec::new();
        for line in text.lines() {
            for caps in case.captures_iter(line) {
                pending.push(caps[1].to_string());
            }
            let Some(caps) = handler.captures(line) else {
                if any_return.is_match(line) && !pending.is_empty() {
                    debug!(labels = ?pending, "case run returns without a handler");
                    pending.clear();
                }
                continue;
            };
            if pending.is_empty() {
                continue;
            }
            let target = caps[1].to_string();
            for label in pending.drain(..) {
                table.push(label, Some(target.clone()));
            }
        }
        if !pending.is_empty() {
            debug!(dropped = pending.len(), "case labels without a handler");
        }
        debug!(records = table.len(), "extracted case labels");
        Ok(table)
    }
}

impl Default for SwitchForm {
    fn default() -> Self {
        Self {
            case_prefix: Self::default_case_prefix(),
            handler_prefix: Self::default_handler_prefix(),
        }
    }
}
