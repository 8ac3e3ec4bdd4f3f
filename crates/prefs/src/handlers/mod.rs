#![forbid(unsafe_code)]

mod column_widths;

use crate::support::ai_error;
use crate::{PrefsService, Session};
use serde_json::Value;

pub const METHOD_NAMES: &[&str] = &[
    "get_column_widths",
    "set_column_widths",
    "list_column_widths",
];

impl PrefsService {
    /// Routes a method call the way the list view issues it: a method name plus an
    /// argument object or positional array.
    pub fn call(&mut self, session: &Session, method: &str, args: &Value) -> Value {
        match method.trim() {
            "get_column_widths" => self.get_column_widths(session, args),
            "set_column_widths" => self.set_column_widths(session, args),
            "list_column_widths" => self.list_column_widths(session, args),
            other => ai_error("UNKNOWN_METHOD", &format!("unknown method: {other}")),
        }
    }
}
