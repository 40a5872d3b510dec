//! Enumerator declarations such as `    Ham_Spawn = 0,`.

use hamcheck_core::{HamError, Origin, SymbolTable};
use regex::escape;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile;

/// Configuration for enumerator-list lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumForm {
    /// Identifier prefix every enumerator starts with.
    #[serde(default = "EnumForm::default_prefix")]
    pub prefix: String,
    /// End-of-list markers excluded from the result.
    #[serde(default = "EnumForm::default_sentinels")]
    pub sentinels: Vec<String>,
    /// Which side the enumerators belong to.
    #[serde(default = "EnumForm::default_origin")]
    pub origin: Origin,
}

impl EnumForm {
    fn default_prefix() -> String {
        "Ham_".to_string()
    }

    fn default_sentinels() -> Vec<String> {
        vec![
            "Ham_EndMarker".to_string(),
            "HAM_LAST_ENTRY_DONT_USE_ME_LOL".to_string(),
        ]
    }

    fn default_origin() -> Origin {
        Origin::DeclaredEnum
    }

    /// Enumerator list from the upstream headers.
    pub fn upstream() -> Self {
        Self {
            origin: Origin::ReferenceEnum,
            ..Self::default()
        }
    }

    /// Returns a copy of the form with replaced sentinels.
    pub fn with_sentinels(mut self, sentinels: Vec<String>) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Collects enumerators in line order, skipping sentinels.
    pub fn extract(&self, text: &str) -> Result<SymbolTable, HamError> {
        let pattern = compile(&format!(r"^\s*({}\w+)\s*[,=]", escape(&self.prefix)))?;
        let mut table = SymbolTable::new(self.origin);
        for line in text.lines() {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let name = &caps[1];
            if self.sentinels.iter().any(|sentinel| sentinel == name) {
                debug!(name, "skipping end-of-list sentinel");
                continue;
            }
            table.push(name, None);
        }
        debug!(records = table.len(), origin = %self.origin, "extracted enumerators");
        Ok(table)
    }
}

impl Default for EnumForm {
    fn default() -> Self {
        Self {
            prefix: Self::default_prefix(),
            sentinels: Self::default_sentinels(),
            origin: Self::default_origin(),
        }
    }
}
