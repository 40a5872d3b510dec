//! Gamedata offset blocks: a quoted name line followed by
//! `"<platform>" "<value>"` lines.

use std::collections::BTreeMap;

use hamcheck_core::{HamError, Origin, SymbolTable};
use indexmap::IndexMap;
use regex::escape;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile;

/// Configuration for offset blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetForm {
    /// Recognised platform identifiers.
    #[serde(default = "OffsetForm::default_platforms")]
    pub platforms: Vec<String>,
}

impl OffsetForm {
    fn default_platforms() -> Vec<String> {
        vec!["windows".to_string(), "linux".to_string(), "mac".to_string()]
    }

    /// Collects per-platform values for every named block.
    ///
    /// Blocks without any platform value (section headers) are dropped.
    /// Repeated names merge into the record of their first appearance.
    pub fn extract(&self, text: &str) -> Result<SymbolTable, HamError> {
        let name_line = compile(r#"^\s*"(\w+)"\s*$"#)?;
        let platforms = self
            .platforms
            .iter()
            .map(|platform| escape(platform))
            .collect::<Vec<_>>()
            .join("|");
        let value_line = compile(&format!(
            r#"^\s*"({platforms})"\s+"(-?\d+|0x[0-9a-fA-F]+)""#
        ))?;

        let mut blocks: IndexMap<String, (String, BTreeMap<String, i64>)> = IndexMap::new();
        let mut current: Option<String> = None;
        for line in text.lines() {
            if let Some(caps) = name_line.captures(line) {
                current = Some(caps[1].to_string());
                continue;
            }
            let Some(name) = current.as_ref() else {
                continue;
            };
            let Some(caps) = value_line.captures(line) else {
                continue;
            };
            let Some(value) = parse_value(&caps[2]) else {
                debug!(line, "offset value out of range");
                continue;
            };
            blocks
                .entry(name.to_lowercase())
                .or_insert_with(|| (name.clone(), BTreeMap::new()))
                .1
                .insert(caps[1].to_string(), value);
        }

        let mut table = SymbolTable::new(Origin::Offsets);
        for (_, (raw_name, values)) in blocks {
            table.push_with_values(raw_name, None, values);
        }
        debug!(records = table.len(), "extracted offset blocks");
        Ok(table)
    }
}

impl Default for OffsetForm {
    fn default() -> Self {
        Self {
            platforms: Self::default_platforms(),
        }
    }
}

/// Parses a decimal (optionally negative) or `0x`-prefixed hexadecimal value.
pub fn parse_value(text: &str) -> Option<i64> {
    match text.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}
