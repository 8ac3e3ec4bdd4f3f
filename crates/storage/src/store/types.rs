#![forbid(unsafe_code)]

use cw_core::{ColumnWidths, DecodeError};

/// One persisted preference row, payload left undecoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnWidthRow {
    pub owner: String,
    pub view_key: String,
    pub widths_json: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl ColumnWidthRow {
    pub fn widths(&self) -> Result<ColumnWidths, DecodeError> {
        match self.widths_json.as_deref() {
            Some(raw) => ColumnWidths::decode(raw),
            None => Ok(ColumnWidths::new()),
        }
    }
}
