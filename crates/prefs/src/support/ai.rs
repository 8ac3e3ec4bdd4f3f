#![forbid(unsafe_code)]

use cw_storage::StoreError;
use serde_json::{Value, json};
use tracing::warn;

pub(crate) fn format_store_error(err: StoreError) -> String {
    match err {
        StoreError::Io(e) => format!("IO: {e}"),
        StoreError::Sql(e) => format!("SQL: {e}"),
        StoreError::InvalidInput(msg) => format!("Invalid input: {msg}"),
        StoreError::Conflict { owner, view_key } => {
            format!("Write conflict: owner={owner} view_key={view_key}")
        }
    }
}

pub(crate) fn store_error(err: StoreError) -> Value {
    match err {
        StoreError::Conflict { .. } => {
            let message = format_store_error(err);
            warn!(error = %message, "column widths write conflict");
            ai_error_with(
                "CONFLICT",
                &message,
                Some("Retry the call; the row was written concurrently."),
            )
        }
        StoreError::InvalidInput(_) => ai_error("INVALID_INPUT", &format_store_error(err)),
        _ => {
            let message = format_store_error(err);
            warn!(error = %message, "column widths store failure");
            ai_error("STORE_ERROR", &message)
        }
    }
}

pub(crate) fn ai_ok(intent: &str, result: Value) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": [],
        "error": null
    })
}

pub(crate) fn ai_error_with(code: &str, message: &str, recovery: Option<&str>) -> Value {
    let mut error_obj = serde_json::Map::new();
    error_obj.insert("code".to_string(), Value::String(code.to_string()));
    error_obj.insert(
        "message".to_string(),
        Value::String(message.trim().to_string()),
    );
    if let Some(recovery) = recovery {
        error_obj.insert(
            "recovery".to_string(),
            Value::String(recovery.trim().to_string()),
        );
    }

    json!({
        "success": false,
        "intent": "error",
        "result": {},
        "warnings": [],
        "error": Value::Object(error_obj)
    })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    ai_error_with(code, message, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn conflict_maps_to_conflict_envelope() {
        let resp = store_error(StoreError::Conflict {
            owner: "alice".to_string(),
            view_key: "sale.order,list,42".to_string(),
        });
        assert_eq!(resp["success"], false);
        assert_eq!(resp["error"]["code"], "CONFLICT");
        assert_eq!(
            resp["error"]["message"],
            "Write conflict: owner=alice view_key=sale.order,list,42"
        );
        assert!(resp["error"]["recovery"].as_str().is_some());
    }

    #[test]
    fn store_errors_map_to_their_codes() {
        let resp = store_error(StoreError::InvalidInput("numeric overflow"));
        assert_eq!(resp["error"]["code"], "INVALID_INPUT");

        let io = std::io::Error::other("disk full");
        let resp = store_error(StoreError::Io(io));
        assert_eq!(resp["error"]["code"], "STORE_ERROR");
        assert_eq!(resp["error"]["message"], "IO: disk full");
    }

    #[test]
    fn ok_and_error_envelopes_share_one_shape() {
        let ok = ai_ok("column_widths_get", json!({}));
        let err = ai_error("INVALID_INPUT", "view_key is required");
        assert_eq!(keys(&ok), keys(&err));
    }
}
