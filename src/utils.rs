use serde::Serialize;
use serde_json::Value;

use crate::trx_format::error::{FormatError, Result};

/// Comma-joined JSON of every item, without the enclosing brackets.
pub fn json_array<T: Serialize>(items: &[T]) -> Result<String> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        parts.push(serde_json::to_string(item)?);
    }
    Ok(parts.join(","))
}

/// Like [`json_array`], but every item has to be a JSON scalar.
pub fn json_val_array<T: Serialize>(items: &[T]) -> Result<String> {
    let mut parts = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let value = serde_json::to_value(item)?;
        if matches!(value, Value::Array(_) | Value::Object(_)) {
            return Err(FormatError::NotScalar { index });
        }
        parts.push(serde_json::to_string(&value)?);
    }
    Ok(parts.join(","))
}

pub fn json_raw_array<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
