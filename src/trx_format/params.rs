use serde_json::Value;

/// Zero-based position of a `$N` reference, `N` counting from one.
fn param_ref(value: &str) -> Option<usize> {
    let index: usize = value.strip_prefix('$')?.parse().ok()?;
    index.checked_sub(1)
}

/// Resolves `$N` references anywhere inside `value`. References past the
/// end of `params` stay as written.
pub fn resolve_params(value: &Value, params: &[String]) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_params(item, params))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), resolve_params(item, params)))
                .collect(),
        ),
        Value::String(s) => match param_ref(s).and_then(|index| params.get(index)) {
            Some(param) => Value::String(param.clone()),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{param_ref, resolve_params};
    use serde_json::json;

    #[test]
    fn param_ref_is_one_based() {
        assert_eq!(param_ref("$1"), Some(0));
        assert_eq!(param_ref("$12"), Some(11));
        assert_eq!(param_ref("$0"), None);
        assert_eq!(param_ref("$x"), None);
        assert_eq!(param_ref("alice"), None);
    }

    #[test]
    fn resolve_params_walks_nested_values() {
        let params = vec!["alice".to_string(), "10".to_string()];
        let value = json!({
            "scope": ["$1", "bob"],
            "data": {"from": "$1", "amount": "$2", "memo": "$3"}
        });
        assert_eq!(
            resolve_params(&value, &params),
            json!({
                "scope": ["alice", "bob"],
                "data": {"from": "alice", "amount": "10", "memo": "$3"}
            })
        );
    }
}
