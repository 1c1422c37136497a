use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::TrxConfig;
use crate::tools::emit_json;
use crate::trx_format::json_trx::{format_trx_json, load_trx_request};

/// Output file name for a request: `transfer.json` becomes `transfer.trx.json`.
pub fn trx_file_name(request_path: &Path) -> String {
    let stem = request_path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("trx");
    format!("{stem}.trx.json")
}

pub fn build_trx_json(
    request_path: impl AsRef<Path>,
    params: &[String],
    config: &TrxConfig,
) -> Result<String> {
    let request = load_trx_request(&request_path, params, &config.contract)?;
    info!(
        messages = request.messages.len(),
        scopes = request.scope.len(),
        "formatting transaction from {}",
        request_path.as_ref().display()
    );
    format_trx_json(&request.messages, &request.scope)
        .with_context(|| format!("failed to format {:?}", request_path.as_ref()))
}

pub fn create_trx_json(
    request_path: impl AsRef<Path>,
    params: &[String],
    config: &TrxConfig,
    to_path: Option<&Path>,
) -> Result<()> {
    let json = build_trx_json(&request_path, params, config)?;
    emit_json(&json, to_path, &trx_file_name(request_path.as_ref()))
}
