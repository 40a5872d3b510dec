#![doc = "Pattern extractors that scan loosely structured source text into ordered symbol tables."]

pub mod array;
pub mod call;
pub mod enums;
pub mod offsets;
pub mod shape;
pub mod switch;

pub use array::ArrayForm;
pub use call::CallForm;
pub use enums::EnumForm;
pub use offsets::OffsetForm;
pub use shape::{extract, Shape};
pub use switch::SwitchForm;

use hamcheck_core::{ErrorInfo, HamError};
use regex::Regex;

pub(crate) fn compile(pattern: &str) -> Result<Regex, HamError> {
    Regex::new(pattern).map_err(|err| {
        HamError::Extract(
            ErrorInfo::new("invalid-pattern", err.to_string()).with_context("pattern", pattern),
        )
    })
}
