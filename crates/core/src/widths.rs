#![forbid(unsafe_code)]

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Column name to width in pixels for one view. Widths are kept exactly as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths(BTreeMap<String, Number>);

impl ColumnWidths {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.0.get(column).and_then(Number::as_f64)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map = self
            .0
            .iter()
            .map(|(column, width)| (column.clone(), Value::Number(width.clone())))
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }

    pub fn encode(&self) -> String {
        self.to_json().to_string()
    }

    /// Parses a stored payload. Blank text and JSON `null` are the empty mapping.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }
        let value: Value =
            serde_json::from_str(raw).map_err(|err| DecodeError::Syntax(err.to_string()))?;
        let map = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            _ => return Err(DecodeError::NotAnObject),
        };

        let mut out = Self::new();
        for (column, width) in map {
            let Value::Number(width) = width else {
                return Err(DecodeError::InvalidWidth { column });
            };
            out.0.insert(column, width);
        }
        Ok(out)
    }

    /// Strict conversion for widths supplied by a caller: every width must be a positive number.
    pub fn from_json(value: &Value) -> Result<Self, WidthsError> {
        let Some(map) = value.as_object() else {
            return Err(WidthsError::NotAnObject);
        };

        let mut out = Self::new();
        for (column, width) in map {
            if column.trim().is_empty() {
                return Err(WidthsError::EmptyColumn);
            }
            let positive = width
                .as_f64()
                .is_some_and(|px| px.is_finite() && px > 0.0);
            let (Value::Number(width), true) = (width, positive) else {
                return Err(WidthsError::InvalidWidth {
                    column: column.clone(),
                });
            };
            out.0.insert(column.clone(), width.clone());
        }
        Ok(out)
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for ColumnWidths {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(column, width)| (column.into(), Number::from(width)))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    Syntax(String),
    NotAnObject,
    InvalidWidth { column: String },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "payload is not valid json: {err}"),
            Self::NotAnObject => write!(f, "payload is not a json object"),
            Self::InvalidWidth { column } => write!(f, "invalid width for column {column}"),
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidthsError {
    NotAnObject,
    EmptyColumn,
    InvalidWidth { column: String },
}

impl WidthsError {
    pub fn message(&self) -> String {
        match self {
            Self::NotAnObject => "widths must be an object of column name to width".to_string(),
            Self::EmptyColumn => "widths: column name must not be empty".to_string(),
            Self::InvalidWidth { column } => {
                format!("widths.{column} must be a positive number of pixels")
            }
        }
    }
}
