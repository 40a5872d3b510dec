//! Brace-delimited array entries whose first field is a quoted keyname.

use hamcheck_core::{HamError, Origin, SymbolTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::compile;

/// Configuration for the function table literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayForm {
    /// Substring of the declaration line that opens the array.
    #[serde(default = "ArrayForm::default_marker")]
    pub marker: String,
    /// Substrings that identify the terminating sentinel entry.
    #[serde(default = "ArrayForm::default_terminators")]
    pub terminators: Vec<String>,
}

impl ArrayForm {
    fn default_marker() -> String {
        "HamFunctionInfo g_hamFunctions[]".to_string()
    }

    fn default_terminators() -> Vec<String> {
        vec!["{nullptr".to_string(), "{ nullptr".to_string()]
    }

    /// Collects entries between the marker line and the terminator.
    ///
    /// The second field is kept as the record tag when it is a bare
    /// identifier. Text before the marker is ignored; a missing terminator
    /// runs to the end of the input.
    pub fn extract(&self, text: &str) -> Result<SymbolTable, HamError> {
        let entry = compile(r#"\{\s*"(\w+)"(?:\s*,\s*(\w+))?"#)?;
        let mut table = SymbolTable::new(Origin::FunctionTable);
        let mut in_array = false;
        let mut terminated = false;
        for line in text.lines() {
            if !in_array {
                in_array = line.contains(&self.marker);
                continue;
            }
            if let Some(caps) = entry.captures(line) {
                table.push(&caps[1], caps.get(2).map(|tag| tag.as_str().to_string()));
            }
            if self.terminators.iter().any(|term| line.contains(term.as_str())) {
                terminated = true;
                break;
            }
        }
        if !in_array {
            warn!(marker = %self.marker, "array declaration marker not found");
        } else if !terminated {
            debug!("array terminator not found, scanned to end of input");
        }
        debug!(records = table.len(), "extracted array entries");
        Ok(table)
    }
}

impl Default for ArrayForm {
    fn default() -> Self {
        Self {
            marker: Self::default_marker(),
            terminators: Self::default_terminators(),
        }
    }
}
