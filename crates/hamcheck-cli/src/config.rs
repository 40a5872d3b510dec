use std::fs;
use std::path::Path;

use hamcheck_core::serde::from_yaml_slice;
use hamcheck_core::{ErrorInfo, HamError};
use hamcheck_extract::EnumForm;
use hamcheck_names::{Canonicalizer, NameRules};
use hamcheck_report::PreviewLimits;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Optional YAML configuration; every section falls back to the built-in
/// hamsandwich conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub names: NameRules,
    #[serde(default)]
    pub preview: PreviewLimits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinels: Option<Vec<String>>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, HamError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let bytes = fs::read(path).map_err(|err| {
            HamError::Config(
                config_info("config-unreadable", err.to_string(), path)
                    .with_hint("pass an existing YAML file to --config or omit the option"),
            )
        })?;
        let config: Config = from_yaml_slice(&bytes).map_err(|err| {
            HamError::Config(config_info(
                "config-invalid",
                err.info().message.clone(),
                path,
            ))
        })?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn canonicalizer(&self) -> Canonicalizer {
        Canonicalizer::new(self.names.clone())
    }

    /// Form for the local enum, honouring configured sentinels.
    pub fn declared_form(&self) -> EnumForm {
        match &self.sentinels {
            Some(sentinels) => EnumForm::default().with_sentinels(sentinels.clone()),
            None => EnumForm::default(),
        }
    }
}

fn config_info(code: &str, message: String, path: &Path) -> ErrorInfo {
    ErrorInfo::new(code, message).with_context("path", path.display().to_string())
}
