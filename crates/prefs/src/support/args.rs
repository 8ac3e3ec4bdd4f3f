#![forbid(unsafe_code)]

use super::ai::ai_error;
use cw_core::ColumnWidths;
use cw_core::ids::ViewKey;
use serde_json::{Map, Value};

/// Accepts either named arguments or the positional form `[view_key, widths]`.
pub(crate) fn call_args(args: &Value, positional: &[&str]) -> Result<Map<String, Value>, Value> {
    match args {
        Value::Object(map) => Ok(map.clone()),
        Value::Array(items) => {
            if items.len() > positional.len() {
                return Err(ai_error(
                    "INVALID_INPUT",
                    &format!("expected at most {} positional arguments", positional.len()),
                ));
            }
            Ok(positional
                .iter()
                .zip(items)
                .map(|(key, value)| ((*key).to_string(), value.clone()))
                .collect())
        }
        Value::Null => Ok(Map::new()),
        _ => Err(ai_error(
            "INVALID_INPUT",
            "arguments must be an object or an array",
        )),
    }
}

pub(crate) fn require_view_key(args: &Map<String, Value>) -> Result<ViewKey, Value> {
    let Some(raw) = args.get("view_key").and_then(|v| v.as_str()) else {
        return Err(ai_error("INVALID_INPUT", "view_key is required"));
    };
    ViewKey::try_new(raw)
        .map_err(|err| ai_error("INVALID_INPUT", &format!("view_key {}", err.message())))
}

pub(crate) fn require_widths(args: &Map<String, Value>) -> Result<ColumnWidths, Value> {
    let Some(value) = args.get("widths") else {
        return Err(ai_error("INVALID_INPUT", "widths is required"));
    };
    ColumnWidths::from_json(value).map_err(|err| ai_error("INVALID_INPUT", &err.message()))
}

pub(crate) fn optional_usize(args: &Map<String, Value>, key: &str) -> Result<Option<usize>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_u64().map(|v| v as usize).map(Some).ok_or_else(|| {
            ai_error(
                "INVALID_INPUT",
                &format!("{key} must be a positive integer"),
            )
        }),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a positive integer"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positional_args_are_named_in_order() {
        let args = call_args(&json!(["sale.order,list,42", {"name": 90}]), &["view_key", "widths"])
            .unwrap();
        assert_eq!(args.get("view_key"), Some(&json!("sale.order,list,42")));
        assert_eq!(args.get("widths"), Some(&json!({"name": 90})));
    }

    #[test]
    fn too_many_positional_args_are_rejected() {
        let err = call_args(&json!(["a", {}, 3]), &["view_key", "widths"]).unwrap_err();
        assert_eq!(err["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn scalar_args_are_rejected() {
        let err = call_args(&json!("sale.order,list,42"), &["view_key"]).unwrap_err();
        assert_eq!(err["success"], false);
    }

    #[test]
    fn view_key_must_be_a_non_empty_string() {
        let missing = require_view_key(&Map::new()).unwrap_err();
        assert_eq!(missing["error"]["message"], "view_key is required");

        let mut args = Map::new();
        args.insert("view_key".to_string(), json!("   "));
        let blank = require_view_key(&args).unwrap_err();
        assert_eq!(blank["error"]["message"], "view_key must not be empty");
    }
}
