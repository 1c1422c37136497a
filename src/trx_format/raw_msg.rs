use serde_json::{Value, json};

use crate::trx_format::{
    AccountPermission, RawMessage,
    error::{FormatError, Result},
};

pub const ACTIVE_PERMISSION: &str = "active";
pub const OWNER_PERMISSION: &str = "owner";

fn active_auth(account: &str) -> Vec<AccountPermission> {
    vec![AccountPermission {
        account: account.to_string(),
        permission: ACTIVE_PERMISSION.to_string(),
    }]
}

fn key_authority(key: &str) -> Value {
    json!({
        "threshold": 1,
        "keys": [{"key": key, "weight": 1}],
        "accounts": []
    })
}

pub fn transfer_msg(code: &str, from: &str, to: &str, amount: &Value, memo: &str) -> RawMessage {
    RawMessage {
        code: code.to_string(),
        kind: "transfer".to_string(),
        authorization: active_auth(from),
        data: json!({
            "from": from,
            "to": to,
            "amount": amount,
            "memo": memo
        }),
        extra: serde_json::Map::new(),
    }
}

pub fn newaccount_msg(
    code: &str,
    creator: &str,
    name: &str,
    owner_key: &str,
    active_key: &str,
    deposit: &Value,
) -> RawMessage {
    RawMessage {
        code: code.to_string(),
        kind: "newaccount".to_string(),
        authorization: active_auth(creator),
        data: json!({
            "creator": creator,
            "name": name,
            "owner": key_authority(owner_key),
            "active": key_authority(active_key),
            "recovery": key_authority(owner_key),
            "deposit": deposit
        }),
        extra: serde_json::Map::new(),
    }
}

pub fn deleteauth_msg(code: &str, account: &str, permission: &str) -> Result<RawMessage> {
    if permission == ACTIVE_PERMISSION || permission == OWNER_PERMISSION {
        return Err(FormatError::ReservedPermission(permission.to_string()));
    }
    Ok(RawMessage {
        code: code.to_string(),
        kind: "deleteauth".to_string(),
        authorization: active_auth(account),
        data: json!({
            "account": account,
            "permission": permission
        }),
        extra: serde_json::Map::new(),
    })
}
