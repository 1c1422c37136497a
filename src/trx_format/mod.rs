use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;
pub mod json_trx;
pub mod name;
pub mod params;
pub mod raw_msg;
pub mod template;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountPermission {
    pub account: String,
    pub permission: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawMessage {
    pub code: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub authorization: Vec<AccountPermission>,
    #[serde(default)]
    pub data: Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrxRequest {
    #[serde(default)]
    pub scope: Vec<Value>,
    pub messages: Vec<RawMessage>,
}

/// Shape of a formatted, still unsigned transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    pub ref_block_num: String,
    pub ref_block_prefix: String,
    pub expiration: String,
    pub scope: Vec<Value>,
    pub read_scope: Vec<Value>,
    pub messages: Vec<Value>,
    pub signatures: Vec<Value>,
}

impl Transaction {
    /// Whether the header fields still hold the values an unsigned
    /// transaction is formatted with.
    pub fn is_unsigned(&self) -> bool {
        self.ref_block_num == "0"
            && self.ref_block_prefix == "0"
            && self.expiration == "0"
            && self.read_scope.is_empty()
            && self.signatures.is_empty()
    }
}
