use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use hamcheck_core::{text_digest, ErrorInfo, HamError};
use tracing::debug;

pub const DEFAULT_AMXMODX_PATH: &str = "/tmp/amxmodx-master";

const HOOK_NATIVE: &str = "modules/hamsandwich/hook_native.cpp";
const REFERENCE_CONST: &str = "modules/hamsandwich/ham_const.h";
const VALVE_OFFSETS: &str = "gamedata/common.games/virtual.games/valve/offsets-common.txt";
const LOCAL_CONST: &str = "src/ham/ham_const.h";
const LOCAL_MANAGER: &str = "src/ham/ham_manager.cpp";
const LOCAL_CALLBACKS: &str = "src/ham/hook_callbacks.cpp";

/// Fixed sub-paths below the two source roots.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    amxmodx: PathBuf,
    project: PathBuf,
}

impl SourcePaths {
    pub fn new(amxmodx: &Path, project: &Path) -> Self {
        Self {
            amxmodx: amxmodx.to_path_buf(),
            project: project.to_path_buf(),
        }
    }

    pub fn hook_native(&self) -> PathBuf {
        self.amxmodx.join(HOOK_NATIVE)
    }

    pub fn reference_const(&self) -> PathBuf {
        self.amxmodx.join(REFERENCE_CONST)
    }

    pub fn valve_offsets(&self) -> PathBuf {
        self.amxmodx.join(VALVE_OFFSETS)
    }

    pub fn local_const(&self) -> PathBuf {
        self.project.join(LOCAL_CONST)
    }

    pub fn local_manager(&self) -> PathBuf {
        self.project.join(LOCAL_MANAGER)
    }

    pub fn local_callbacks(&self) -> PathBuf {
        self.project.join(LOCAL_CALLBACKS)
    }
}

/// Texts read so far, keyed by source label. Each file is read once.
#[derive(Debug, Default)]
pub struct Sources {
    texts: BTreeMap<String, String>,
}

impl Sources {
    /// Reads an upstream file; a missing file hints at `AMXMODX_PATH`.
    pub fn read_reference(&mut self, label: &str, path: &Path) -> Result<&str, HamError> {
        self.read(
            label,
            path,
            Some("clone AMX Mod X to /tmp/amxmodx-master or set AMXMODX_PATH"),
        )
    }

    pub fn read_local(&mut self, label: &str, path: &Path) -> Result<&str, HamError> {
        self.read(label, path, Some("pass the project checkout with --project-root"))
    }

    fn read(&mut self, label: &str, path: &Path, hint: Option<&str>) -> Result<&str, HamError> {
        if !self.texts.contains_key(label) {
            let text = read_text(label, path, hint)?;
            debug!(label, path = %path.display(), bytes = text.len(), "read source");
            self.texts.insert(label.to_string(), text);
        }
        Ok(self.texts.get(label).map(String::as_str).unwrap_or_default())
    }

    /// SHA256 of every text read, keyed by label.
    pub fn digests(&self) -> BTreeMap<String, String> {
        self.texts
            .iter()
            .map(|(label, text)| (label.clone(), text_digest(text)))
            .collect()
    }
}

fn read_text(label: &str, path: &Path, hint: Option<&str>) -> Result<String, HamError> {
    if !path.is_file() {
        let err = HamError::input_not_found(label, path);
        return Err(match (err, hint) {
            (HamError::Input(info), Some(hint)) => HamError::Input(info.with_hint(hint)),
            (err, _) => err,
        });
    }
    fs::read_to_string(path).map_err(|err| {
        HamError::Input(
            ErrorInfo::new("input-unreadable", err.to_string())
                .with_context("source", label)
                .with_context("path", path.display().to_string()),
        )
    })
}
