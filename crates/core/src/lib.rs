#![forbid(unsafe_code)]

pub mod ids;
pub mod widths;

pub use widths::{ColumnWidths, DecodeError, WidthsError};
