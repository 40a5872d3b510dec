//! Shape selector dispatching to the individual extractors.

use hamcheck_core::{HamError, SymbolTable};
use serde::{Deserialize, Serialize};

use crate::{ArrayForm, CallForm, EnumForm, OffsetForm, SwitchForm};

/// Record shape to recognise in a source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Shape {
    /// Invocation-style entries with a quoted name and optional type tag.
    Call(CallForm),
    /// Enumerator declarations.
    Enum(EnumForm),
    /// Entries inside a designated array literal.
    ArrayLiteral(ArrayForm),
    /// Case labels grouped under a returned handler.
    SwitchCase(SwitchForm),
    /// Named blocks of per-platform values.
    OffsetBlock(OffsetForm),
}

/// Extracts an ordered symbol table from `text`.
///
/// Extraction is purely textual and deterministic; malformed lines are
/// skipped. The only failure is a form whose configured identifiers build
/// an invalid pattern.
pub fn extract(text: &str, shape: &Shape) -> Result<SymbolTable, HamError> {
    match shape {
        Shape::Call(form) => form.extract(text),
        Shape::Enum(form) => form.extract(text),
        Shape::ArrayLiteral(form) => form.extract(text),
        Shape::SwitchCase(form) => form.extract(text),
        Shape::OffsetBlock(form) => form.extract(text),
    }
}
