use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    audit::{self, AuditArgs},
    keynames, keytable::{self, KeytableArgs},
    mappings::{self, MappingsArgs},
    ContextArgs,
};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "hamcheck",
    about = "Cross-validate local hamsandwich tables against the AMX Mod X hook list"
)]
struct Cli {
    #[command(flatten)]
    context: ContextArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check function table keynames against the hook list by ordinal.
    Keynames,
    /// Check handler types assigned by the callback switch.
    Mappings(MappingsArgs),
    /// Print the upstream keyname array and a sample of vtable indices.
    Keytable(KeytableArgs),
    /// Run every check into one report.
    Audit(AuditArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.context.verbose);

    let result = match &cli.command {
        Command::Keynames => keynames::run(&cli.context),
        Command::Mappings(args) => mappings::run(&cli.context, args),
        Command::Keytable(args) => keytable::run(&cli.context, args),
        Command::Audit(args) => audit::run(&cli.context, args),
    };
    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::from(1)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
