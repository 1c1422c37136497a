use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::trx_format::{
    RawMessage, TrxRequest, error,
    name::validate_name,
    params::resolve_params,
    raw_msg::{deleteauth_msg, newaccount_msg, transfer_msg},
    template::{
        TRX_BODY_KEY, TRX_JSON, TRX_MSG_KEY, TRX_POST_JSON, TRX_SCOPE_KEY, TRX_SIGN_KEY,
        render_template,
    },
};
use crate::utils::{json_array, json_raw_array, json_val_array};

/// Unsigned transaction body with `scope` and `messages` filled in.
pub fn format_trx_json<M: Serialize, S: Serialize>(
    messages: &[M],
    scopes: &[S],
) -> error::Result<String> {
    let msg_buff = json_array(messages)?;
    let scope_buff = json_val_array(scopes)?;

    let values = HashMap::from([(TRX_SCOPE_KEY, scope_buff), (TRX_MSG_KEY, msg_buff)]);
    render_template(TRX_JSON, &values)
}

/// Post body pairing the signing keys with already formatted transactions.
pub fn format_post_json<K: Serialize, T: AsRef<str>>(
    private_keys: &[K],
    transactions: &[T],
) -> error::Result<String> {
    let trx_buff = json_raw_array(transactions);
    let key_buff = json_val_array(private_keys)?;

    let values = HashMap::from([(TRX_BODY_KEY, trx_buff), (TRX_SIGN_KEY, key_buff)]);
    render_template(TRX_POST_JSON, &values)
}

fn extra_str<'a>(msg: &'a RawMessage, field: &str) -> Result<&'a str> {
    msg.extra
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("Missing {field} for {}", msg.code))
}

fn extra_name<'a>(msg: &'a RawMessage, field: &str) -> Result<&'a str> {
    let name = extra_str(msg, field)?;
    validate_name(name).with_context(|| format!("Invalid {field} for {}", msg.code))?;
    Ok(name)
}

fn extra_value<'a>(msg: &'a RawMessage, field: &str) -> Result<&'a Value> {
    msg.extra
        .get(field)
        .ok_or_else(|| anyhow!("Missing {field} for {}", msg.code))
}

/// Rewrites native shorthands into full messages addressed to `contract`.
///
/// Shorthands derive their own authorization, so an explicit one is refused.
/// Other messages pass through with unknown top-level keys dropped.
pub fn expand_message(msg: &RawMessage, contract: &str) -> Result<RawMessage> {
    let shorthand = matches!(msg.code.as_str(), "transfer" | "newaccount" | "deleteauth");
    if shorthand && !msg.authorization.is_empty() {
        return Err(anyhow!(
            "{} shorthand derives its authorization, remove the explicit one",
            msg.code
        ));
    }

    match msg.code.as_str() {
        "transfer" => {
            let memo = msg
                .extra
                .get("memo")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(transfer_msg(
                contract,
                extra_name(msg, "from")?,
                extra_name(msg, "to")?,
                extra_value(msg, "amount")?,
                memo,
            ))
        }
        "newaccount" => {
            let deposit = msg.extra.get("deposit").cloned().unwrap_or(Value::from(0));
            Ok(newaccount_msg(
                contract,
                extra_name(msg, "creator")?,
                extra_name(msg, "name")?,
                extra_str(msg, "owner_key")?,
                extra_str(msg, "active_key")?,
                &deposit,
            ))
        }
        "deleteauth" => Ok(deleteauth_msg(
            contract,
            extra_name(msg, "account")?,
            extra_str(msg, "permission")?,
        )?),
        _ => {
            let mut passthrough = msg.clone();
            if !passthrough.extra.is_empty() {
                let keys: Vec<&String> = msg.extra.keys().collect();
                warn!(code = %msg.code, ?keys, "dropping unknown message fields");
                passthrough.extra.clear();
            }
            Ok(passthrough)
        }
    }
}

pub fn parse_trx_request(raw: &Value, params: &[String], contract: &str) -> Result<TrxRequest> {
    let resolved = resolve_params(raw, params);
    let request: TrxRequest =
        serde_json::from_value(resolved).context("Invalid transaction request")?;

    for scope in &request.scope {
        let name = scope
            .as_str()
            .ok_or_else(|| anyhow!("Scope entries must be account names, got {scope}"))?;
        validate_name(name)?;
    }

    let mut messages = Vec::with_capacity(request.messages.len());
    for msg in &request.messages {
        let expanded = expand_message(msg, contract)?;
        debug!(code = %expanded.code, kind = %expanded.kind, "message ready");
        messages.push(expanded);
    }

    Ok(TrxRequest {
        scope: request.scope,
        messages,
    })
}

pub fn load_trx_request(
    path: impl AsRef<Path>,
    params: &[String],
    contract: &str,
) -> Result<TrxRequest> {
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Error reading file {:?}", path.as_ref()))?;
    let raw: Value = serde_json::from_str(&data)
        .with_context(|| format!("Invalid JSON in {:?}", path.as_ref()))?;
    parse_trx_request(&raw, params, contract)
}
