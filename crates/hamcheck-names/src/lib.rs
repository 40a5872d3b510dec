#![deny(missing_docs)]
#![doc = "Maps local enumerator names onto the upstream keyname convention."]

/// Canonicalizer applying a rule set.
pub mod canon;
/// Prefix rules and the override table.
pub mod rules;

pub use canon::{Canonicalizer, Rewrite, CORE_CATEGORY};
pub use rules::{NameRules, PrefixRule};
