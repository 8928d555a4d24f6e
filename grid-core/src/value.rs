//! Dynamic cell values.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by a single grid cell.
///
/// Values are what `get_cell_value` returns for a `(row, column)` pair and what
/// data-type formatters receive. Deserialization is untagged so plain JSON
/// scalars map onto the matching variant.
///
/// # Example
///
/// ```
/// use grid_core::CellValue;
///
/// let name = CellValue::from("Contoso");
/// let units = CellValue::from(12i64);
/// let empty = CellValue::Null;
/// assert_eq!(units.to_string(), "12");
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Text value.
    String(String),
    /// Fallback for structured values the grid does not interpret.
    Json(serde_json::Value),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::DateTime(_) => "datetime",
            CellValue::String(_) => "string",
            CellValue::Json(_) => "json",
        }
    }

    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            CellValue::String(v) => f.write_str(v),
            CellValue::Json(v) => write!(f, "{v}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}
