use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "xmaxtrx.json";
pub const DEFAULT_CONTRACT: &str = "xmax";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrxConfig {
    /// Account that owns the native messages (`transfer`, `newaccount`, ...).
    pub contract: String,
    pub output_dir: PathBuf,
}

impl Default for TrxConfig {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Loads the config from `path`, or from `xmaxtrx.json` when no path is
/// given. Only an explicitly requested file has to exist.
pub fn load_config(path: Option<&Path>) -> Result<TrxConfig> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    if !explicit && !path.exists() {
        debug!("no {CONFIG_FILE} found, using defaults");
        return Ok(TrxConfig::default());
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("failed to read config {path:?}"))?;
    let config: TrxConfig =
        serde_json::from_str(&data).with_context(|| format!("invalid JSON in {path:?}"))?;
    info!(contract = %config.contract, "loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{TrxConfig, load_config};
    use std::{fs, path::PathBuf};

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"contract": "xmaxsys"}"#).expect("write");
        let config = load_config(Some(path.as_path())).expect("config");
        assert_eq!(config.contract, "xmaxsys");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(Some(dir.path().join("nope.json").as_path())).is_err());
    }

    #[test]
    fn defaults_match_native_contract() {
        let config = TrxConfig::default();
        assert_eq!(config.contract, "xmax");
    }
}
