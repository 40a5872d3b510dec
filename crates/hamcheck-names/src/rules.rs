use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rewrites a category prefix into the reference spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    /// Prefix as spelled in local enumerators, e.g. `CS_`.
    pub prefix: String,
    /// Replacement used by the reference, e.g. `cstrike_`.
    pub replacement: String,
}

impl PrefixRule {
    /// Creates a rule.
    pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            replacement: replacement.into(),
        }
    }

    /// Category label derived from the prefix (`CS_` gives `CS`).
    pub fn category(&self) -> &str {
        self.prefix.trim_end_matches('_')
    }
}

/// Immutable rule set handed to [`crate::Canonicalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRules {
    /// Prefix shared by every local enumerator.
    #[serde(default = "NameRules::default_common_prefix")]
    pub common_prefix: String,
    /// Ordered category rules. The longest matching prefix wins, ties go to
    /// the earlier rule.
    #[serde(default = "NameRules::default_categories")]
    pub categories: Vec<PrefixRule>,
    /// Regularized name to expected reference name. Always takes precedence.
    #[serde(default = "NameRules::default_overrides")]
    pub overrides: BTreeMap<String, String>,
}

impl NameRules {
    fn default_common_prefix() -> String {
        "Ham_".to_string()
    }

    fn default_categories() -> Vec<PrefixRule> {
        vec![
            PrefixRule::new("CS_", "cstrike_"),
            PrefixRule::new("DOD_", "dod_"),
            PrefixRule::new("TFC_", "tfc_"),
            PrefixRule::new("NS_", "ns_"),
            PrefixRule::new("ESF_", "esf_"),
            PrefixRule::new("SC_", "sc_"),
            PrefixRule::new("TS_", "ts_"),
            PrefixRule::new("OPF_", "gearbox_"),
        ]
    }

    fn default_overrides() -> BTreeMap<String, String> {
        [
            ("dod_weapon_iswatersniping", "dod_weapon_playeriswatersniping"),
            ("dod_weaponiswatersniping", "dod_weapon_playeriswatersniping"),
            ("tfc_db_getitemname", "tfc_dbgetitemname"),
            ("esf_sendclientscustommodel", "esf_sendclientcustommodel"),
            ("ns_getnameditem", "ns_givenameditem"),
            ("ns_weapon_getweapprimetime", "ns_weapon_getweaponprimetime"),
            ("sc_isfacings", "sc_isfacing"),
            ("sc_checkapplygenericattacks", "sc_checkandapplygenericattacks"),
            ("sc_sub_usetargets", "sc_subusetargets"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
    }

    /// Rule set with no category rules and no overrides.
    pub fn plain(common_prefix: impl Into<String>) -> Self {
        Self {
            common_prefix: common_prefix.into(),
            categories: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// Appends a category rule.
    pub fn with_category(mut self, prefix: &str, replacement: &str) -> Self {
        self.categories.push(PrefixRule::new(prefix, replacement));
        self
    }

    /// Adds or replaces an override entry.
    pub fn with_override(mut self, from: &str, to: &str) -> Self {
        self.overrides.insert(from.to_lowercase(), to.to_string());
        self
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            common_prefix: Self::default_common_prefix(),
            categories: Self::default_categories(),
            overrides: Self::default_overrides(),
        }
    }
}
