use std::collections::BTreeMap;

use tracing::debug;

use crate::rules::{NameRules, PrefixRule};

/// Category reported for names matching no category rule.
pub const CORE_CATEGORY: &str = "Core";

/// Step-by-step result of canonicalizing one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    /// Input with the common prefix removed.
    pub stripped: String,
    /// Category rule that fired, if any.
    pub rule: Option<&'a PrefixRule>,
    /// Lower-cased result of the prefix rewrite.
    pub regular: String,
    /// Final name after the override lookup.
    pub canonical: String,
}

impl Rewrite<'_> {
    /// True when the override table replaced the rule-based result.
    pub fn overridden(&self) -> bool {
        self.regular != self.canonical
    }
}

/// Converts local enumerator names into reference keynames.
///
/// Pure and total: every input yields a name, names matching no rule are
/// lower-cased and passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalizer {
    rules: NameRules,
}

impl Canonicalizer {
    /// Builds a canonicalizer; override keys are normalized to lower case.
    pub fn new(mut rules: NameRules) -> Self {
        rules.overrides = rules
            .overrides
            .into_iter()
            .map(|(from, to)| (from.to_lowercase(), to))
            .collect::<BTreeMap<_, _>>();
        Self { rules }
    }

    /// Rule set in use.
    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    fn matching_rule(&self, stripped: &str) -> Option<&PrefixRule> {
        let mut best: Option<&PrefixRule> = None;
        for rule in &self.rules.categories {
            if rule.prefix.is_empty() || !stripped.starts_with(&rule.prefix) {
                continue;
            }
            if best.map_or(true, |current| rule.prefix.len() > current.prefix.len()) {
                best = Some(rule);
            }
        }
        best
    }

    /// Runs every step and keeps the intermediate results.
    pub fn rewrite<'a>(&'a self, raw: &str) -> Rewrite<'a> {
        let stripped = raw
            .strip_prefix(self.rules.common_prefix.as_str())
            .unwrap_or(raw)
            .to_string();
        let rule = self.matching_rule(&stripped);
        let rewritten = match rule {
            Some(rule) => format!("{}{}", rule.replacement, &stripped[rule.prefix.len()..]),
            None => stripped.clone(),
        };
        let regular = rewritten.to_lowercase();
        let canonical = match self.rules.overrides.get(&regular) {
            Some(target) => {
                debug!(raw, from = %regular, to = %target, "override applied");
                target.clone()
            }
            None => regular.clone(),
        };
        Rewrite {
            stripped,
            rule,
            regular,
            canonical,
        }
    }

    /// Canonical reference keyname for `raw`.
    pub fn canonicalize(&self, raw: &str) -> String {
        self.rewrite(raw).canonical
    }

    /// Category label of `raw` (rule prefix without the underscore), or
    /// [`CORE_CATEGORY`].
    pub fn category_of(&self, raw: &str) -> &str {
        let stripped = raw
            .strip_prefix(self.rules.common_prefix.as_str())
            .unwrap_or(raw);
        self.matching_rule(stripped)
            .map(PrefixRule::category)
            .unwrap_or(CORE_CATEGORY)
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(NameRules::default())
    }
}
