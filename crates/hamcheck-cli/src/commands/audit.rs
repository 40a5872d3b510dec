use std::error::Error;

use clap::Args;
use hamcheck_align::{align, AuditInputs, HandlerSource};
use hamcheck_report::Outcome;

use super::mappings::print_generated;
use super::{ContextArgs, Session};

pub const TITLE: &str = "HAM AUDIT (keynames and handler mappings)";

#[derive(Args, Debug, Clone, Default)]
pub struct AuditArgs {
    /// Print proposed case blocks for unmapped functions.
    #[arg(long)]
    pub generate: bool,
}

/// Keyname and handler checks over every local table at once.
pub fn run(context: &ContextArgs, args: &AuditArgs) -> Result<Outcome, Box<dyn Error>> {
    let mut session = Session::open(context)?;
    let hooks = session.reference_hooks()?;
    let declared = session.declared_enum()?;
    let entries = session.function_table()?;
    let cases = session.case_map()?;

    let inputs = session.with_hashes(
        AuditInputs::new(hooks)
            .with_declared(declared)
            .with_entries(entries)
            .with_handlers(HandlerSource::Cases(cases)),
    );
    let report = align(&inputs, &session.config.canonicalizer());
    let outcome = session.emit(&report, TITLE)?;
    if args.generate {
        print_generated(&session, &report);
    }
    Ok(outcome)
}
