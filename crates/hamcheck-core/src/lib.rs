#![deny(missing_docs)]
#![doc = "Core symbol table types, structured errors, and canonical serialization helpers for hamcheck."]

pub mod errors;
/// Stable hashing helpers.
pub mod hash;
/// Canonical JSON and YAML helpers.
pub mod serde;
pub mod symbols;

pub use errors::{ErrorInfo, HamError};
pub use hash::text_digest;
pub use symbols::{Origin, SymbolRecord, SymbolTable};
