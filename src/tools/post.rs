use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};

use crate::tools::emit_json;
use crate::trx_format::{Transaction, json_trx::format_post_json};

pub const POST_FILE_NAME: &str = "post.json";

pub fn load_keys_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read keys file {:?}", path.as_ref()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("keys file {:?} must be a JSON array of strings", path.as_ref()))
}

/// Reads a formatted transaction, keeping its text as written.
pub fn load_trx_body(path: impl AsRef<Path>) -> Result<String> {
    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read transaction {:?}", path.as_ref()))?;
    let trx: Transaction = serde_json::from_str(&data)
        .with_context(|| format!("{:?} is not a formatted transaction", path.as_ref()))?;
    if !trx.is_unsigned() {
        return Err(anyhow!(
            "{:?} does not carry the unsigned transaction header",
            path.as_ref()
        ));
    }
    debug!(
        scopes = trx.scope.len(),
        messages = trx.messages.len(),
        "loaded {}",
        path.as_ref().display()
    );
    Ok(data.trim().to_string())
}

pub fn build_post_json(keys: &[String], trx_paths: &[impl AsRef<Path>]) -> Result<String> {
    if trx_paths.is_empty() {
        return Err(anyhow!("At least one transaction file is required"));
    }
    if keys.is_empty() {
        warn!("no signing keys given, post body will carry an empty sign_keys list");
    }

    let mut trxs = Vec::with_capacity(trx_paths.len());
    for path in trx_paths {
        trxs.push(load_trx_body(path)?);
    }
    info!(
        keys = keys.len(),
        transactions = trxs.len(),
        "bundling post body"
    );
    Ok(format_post_json(keys, &trxs)?)
}

pub fn create_post_json(
    keys: &[String],
    trx_paths: &[impl AsRef<Path>],
    to_path: Option<&Path>,
) -> Result<()> {
    let json = build_post_json(keys, trx_paths)?;
    emit_json(&json, to_path, POST_FILE_NAME)
}
