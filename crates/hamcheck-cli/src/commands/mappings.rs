use std::error::Error;

use clap::Args;
use hamcheck_align::{align, AuditInputs, HandlerSource};
use hamcheck_report::{proposed_cases, Outcome, RULE};
use tracing::{info, warn};

use super::{ContextArgs, Session};

pub const TITLE: &str = "HAM FUNCTIONS VALIDATION (Against AMX Mod X Implementation)";

#[derive(Args, Debug, Clone, Default)]
pub struct MappingsArgs {
    /// Print proposed case blocks for unmapped functions.
    #[arg(long)]
    pub generate: bool,
}

/// Handler types in the callback switch against the hook list types.
pub fn run(context: &ContextArgs, args: &MappingsArgs) -> Result<Outcome, Box<dyn Error>> {
    let mut session = Session::open(context)?;
    let hooks = session.reference_hooks()?;
    let declared = session.declared_enum()?;
    let cases = session.case_map()?;
    info!(
        hooks = hooks.len(),
        enums = declared.len(),
        cases = cases.len(),
        "extracted mapping tables"
    );

    let inputs = session.with_hashes(
        AuditInputs::new(hooks)
            .with_declared(declared)
            .with_handlers(HandlerSource::Cases(cases)),
    );
    let report = align(&inputs, &session.config.canonicalizer());
    let outcome = session.emit(&report, TITLE)?;
    if args.generate {
        print_generated(&session, &report);
    }
    Ok(outcome)
}

/// Appends proposed case blocks to the text report.
pub(crate) fn print_generated(session: &Session, report: &hamcheck_align::DiscrepancyReport) {
    if session.json() {
        warn!("--generate is ignored together with --json");
        return;
    }
    let code = proposed_cases(report);
    if code.is_empty() {
        return;
    }
    println!("\n{RULE}\nGENERATED CODE FOR MISSING MAPPINGS\n{RULE}");
    print!("{code}");
}
