use std::error::Error;

use clap::Args;
use hamcheck_core::serde::to_canonical_json_bytes;
use hamcheck_core::SymbolTable;
use hamcheck_report::{keyname_array, offset_sample, Outcome, RULE};
use serde::Serialize;
use tracing::warn;

use super::{ContextArgs, Session};

#[derive(Args, Debug, Clone)]
pub struct KeytableArgs {
    /// Hooks listed in the vtable index sample.
    #[arg(long, default_value_t = 20)]
    pub sample: usize,
}

#[derive(Debug, Serialize)]
struct KeyTable<'a> {
    hooks: &'a SymbolTable,
    enums: &'a SymbolTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    offsets: Option<&'a SymbolTable>,
}

/// Upstream enum to keyname mapping. Informational only, always passes.
pub fn run(context: &ContextArgs, args: &KeytableArgs) -> Result<Outcome, Box<dyn Error>> {
    let mut session = Session::open(context)?;
    let hooks = session.reference_hooks()?;
    let enums = session.reference_enum()?;
    let offsets = session.valve_offsets()?;
    if hooks.len() != enums.len() {
        warn!(
            hooks = hooks.len(),
            enums = enums.len(),
            "upstream enum and hook list differ in length"
        );
    }

    if session.json() {
        let table = KeyTable {
            hooks: &hooks,
            enums: &enums,
            offsets: offsets.as_ref(),
        };
        let json = to_canonical_json_bytes(&table)?;
        println!("{}", String::from_utf8(json)?);
        return Ok(Outcome::Passed);
    }

    println!("{RULE}\nHAM ENUM TO KEYNAME MAPPING\n{RULE}");
    println!("\nTotal enums: {}", enums.len());
    println!("Total keynames: {}", hooks.len());
    if hooks.len() != enums.len() {
        println!("\nWARNING: Mismatch in count!");
    }
    println!();
    print!("{}", keyname_array(&hooks, &enums));
    if let Some(offsets) = &offsets {
        println!("\n{RULE}\nSAMPLE VTABLE INDICES (valve/offsets-common.txt)\n{RULE}");
        print!("{}", offset_sample(&hooks, &enums, offsets, args.sample));
    }
    Ok(Outcome::Passed)
}
