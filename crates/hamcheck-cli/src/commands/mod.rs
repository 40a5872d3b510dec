pub mod audit;
pub mod keynames;
pub mod keytable;
pub mod mappings;
pub mod paths;

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Args};
use hamcheck_align::{AuditInputs, DiscrepancyReport};
use hamcheck_core::serde::to_canonical_json_bytes;
use hamcheck_core::{HamError, SymbolTable};
use hamcheck_extract::{ArrayForm, CallForm, EnumForm, OffsetForm, SwitchForm};
use hamcheck_report::{render, Outcome};
use tracing::info;

use crate::config::Config;
use paths::{SourcePaths, Sources};

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Root of the AMX Mod X source checkout.
    #[arg(
        long,
        env = "AMXMODX_PATH",
        default_value = paths::DEFAULT_AMXMODX_PATH,
        global = true
    )]
    pub amxmodx_path: PathBuf,
    /// Root of the local project.
    #[arg(long, default_value = ".", global = true)]
    pub project_root: PathBuf,
    /// YAML configuration overriding naming rules, preview limits and sentinels.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Emit the report as canonical JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
    /// Raise the log level (`-v` info, `-vv` debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Configuration plus every source read during one run.
pub struct Session {
    pub config: Config,
    paths: SourcePaths,
    sources: Sources,
    json: bool,
}

impl Session {
    pub fn open(context: &ContextArgs) -> Result<Self, HamError> {
        let config = Config::load(context.config.as_deref())?;
        Ok(Self {
            config,
            paths: SourcePaths::new(&context.amxmodx_path, &context.project_root),
            sources: Sources::default(),
            json: context.json,
        })
    }

    pub fn reference_hooks(&mut self) -> Result<SymbolTable, HamError> {
        let path = self.paths.hook_native();
        let text = self.sources.read_reference("hook list", &path)?;
        CallForm::default().extract(text)
    }

    pub fn reference_enum(&mut self) -> Result<SymbolTable, HamError> {
        let path = self.paths.reference_const();
        let text = self.sources.read_reference("reference enum", &path)?;
        EnumForm::upstream().extract(text)
    }

    /// Valve offsets, when the gamedata file is present.
    pub fn valve_offsets(&mut self) -> Result<Option<SymbolTable>, HamError> {
        let path = self.paths.valve_offsets();
        if !path.is_file() {
            info!(path = %path.display(), "offsets file absent, skipping vtable sample");
            return Ok(None);
        }
        let text = self.sources.read_reference("offsets", &path)?;
        OffsetForm::default().extract(text).map(Some)
    }

    pub fn declared_enum(&mut self) -> Result<SymbolTable, HamError> {
        let path = self.paths.local_const();
        let form = self.config.declared_form();
        let text = self.sources.read_local("declared enum", &path)?;
        form.extract(text)
    }

    pub fn function_table(&mut self) -> Result<SymbolTable, HamError> {
        let path = self.paths.local_manager();
        let text = self.sources.read_local("function table", &path)?;
        ArrayForm::default().extract(text)
    }

    pub fn case_map(&mut self) -> Result<SymbolTable, HamError> {
        let path = self.paths.local_callbacks();
        let text = self.sources.read_local("case map", &path)?;
        SwitchForm::default().extract(text)
    }

    /// Attaches the digest of every source read so far.
    pub fn with_hashes(&self, mut inputs: AuditInputs) -> AuditInputs {
        inputs.input_hashes = self.sources.digests();
        inputs
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Prints the report in the selected format and derives the outcome.
    pub fn emit(&self, report: &DiscrepancyReport, title: &str) -> Result<Outcome, Box<dyn Error>> {
        if self.json {
            let json = to_canonical_json_bytes(report)?;
            println!("{}", String::from_utf8(json)?);
        } else {
            print!("{}", render(report, &self.config.preview, title));
        }
        let outcome = Outcome::of(report);
        info!(?outcome, hard_fail = report.hard_fail_count(), "check finished");
        Ok(outcome)
    }
}
