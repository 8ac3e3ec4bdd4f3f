#![forbid(unsafe_code)]

use crate::support::*;
use crate::{PrefsService, Session};
use cw_core::ids::OwnerId;
use serde_json::{Value, json};

impl PrefsService {
    pub fn get_column_widths(&self, session: &Session, args: &Value) -> Value {
        let owner = match require_owner(session) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let args = match call_args(args, &["view_key"]) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let view_key = match require_view_key(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.column_widths_get(owner, &view_key) {
            Ok(widths) => ai_ok("column_widths_get", widths.to_json()),
            Err(err) => store_error(err),
        }
    }

    pub fn set_column_widths(&mut self, session: &Session, args: &Value) -> Value {
        let owner = match require_owner(session) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let args = match call_args(args, &["view_key", "widths"]) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let view_key = match require_view_key(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let widths = match require_widths(&args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };

        match self.store.column_widths_set(owner, &view_key, &widths) {
            Ok(()) => ai_ok("column_widths_set", Value::Bool(true)),
            Err(err) => store_error(err),
        }
    }

    /// The caller's own saved views, ordered by view key.
    pub fn list_column_widths(&self, session: &Session, args: &Value) -> Value {
        let owner = match require_owner(session) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let args = match call_args(args, &["limit", "offset"]) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let limit = match optional_usize(&args, "limit") {
            Ok(v) => v.unwrap_or(50).clamp(1, 500),
            Err(resp) => return resp,
        };
        let offset = match optional_usize(&args, "offset") {
            Ok(v) => v.unwrap_or(0),
            Err(resp) => return resp,
        };

        // Fetch one extra row to report truncation.
        let mut rows = match self
            .store
            .column_widths_list(owner, limit.saturating_add(1), offset)
        {
            Ok(v) => v,
            Err(err) => return store_error(err),
        };
        let truncated = rows.len() > limit;
        rows.truncate(limit);

        let views = rows
            .into_iter()
            .map(|row| {
                let widths = row.widths().unwrap_or_default();
                json!({
                    "view_key": row.view_key,
                    "widths": widths.to_json(),
                    "created_at": ts_ms_to_rfc3339(row.created_at_ms),
                    "updated_at": ts_ms_to_rfc3339(row.updated_at_ms)
                })
            })
            .collect::<Vec<_>>();

        ai_ok(
            "column_widths_list",
            json!({
                "views": views,
                "count": views.len(),
                "limit": limit,
                "offset": offset,
                "truncated": truncated
            }),
        )
    }
}

fn require_owner(session: &Session) -> Result<&OwnerId, Value> {
    session.owner().ok_or_else(|| {
        ai_error_with(
            "UNAUTHENTICATED",
            "no user in session",
            Some("Pass --user or set CW_PREFS_USER."),
        )
    })
}
