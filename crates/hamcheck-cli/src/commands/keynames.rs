use std::error::Error;

use hamcheck_align::{align, AuditInputs};
use hamcheck_report::Outcome;
use tracing::info;

use super::{ContextArgs, Session};

pub const TITLE: &str = "HAM KEYNAME MAPPING VALIDATION";

/// Function table keynames against the hook list, position by position.
pub fn run(context: &ContextArgs) -> Result<Outcome, Box<dyn Error>> {
    let mut session = Session::open(context)?;
    let hooks = session.reference_hooks()?;
    let declared = session.declared_enum()?;
    let entries = session.function_table()?;
    info!(
        hooks = hooks.len(),
        enums = declared.len(),
        entries = entries.len(),
        "extracted keyname tables"
    );

    let inputs = session.with_hashes(
        AuditInputs::new(hooks)
            .with_declared(declared)
            .with_entries(entries),
    );
    let report = align(&inputs, &session.config.canonicalizer());
    session.emit(&report, TITLE)
}
