use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlogenError};
use crate::models::SloInput;

mod env;
mod validate;


pub use env::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, resolve_config_path};
pub use validate::validate_config;

/// Top-level config document: destination path to the SLOs rendered into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SloConfig {
    #[serde(default)]
    pub slo_files: BTreeMap<String, Vec<SloInput>>,
}

impl SloConfig {
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.slo_files.len()
    }

    #[must_use]
    pub fn slo_count(&self) -> usize {
        self.slo_files.values().map(Vec::len).sum()
    }
}

pub fn parse_config(raw: &str) -> Result<SloConfig> {
    serde_norway::from_str::<SloConfig>(raw).map_err(SlogenError::ConfigParse)
}

pub fn load_config(path: &Path) -> Result<SloConfig> {
    let raw = fs::read_to_string(path).map_err(|source| SlogenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&raw)?;
    tracing::debug!(
        path = %path.display(),
        destinations = config.destination_count(),
        slos = config.slo_count(),
        "loaded slo config"
    );
    Ok(config)
}
