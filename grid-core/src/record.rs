//! Map-backed raw rows.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::table::RowId;
use crate::value::CellValue;

/// Default row accessors used when the application supplies none.
///
/// The grid only needs two things from a raw row: an identity and the value
/// under a column. Row types that implement this trait can be handed to the
/// grid without custom `get_row_id`/`get_cell_value` closures.
pub trait GridRow: Clone + Send + Sync + 'static {
    /// Identity of the row, or `None` to fall back to the row's position.
    fn row_id(&self) -> Option<RowId> {
        None
    }

    /// Value displayed under `column`.
    fn cell_value(&self, column: &Column) -> CellValue;
}

/// A dynamic record: a bag of named cell values with an optional identity.
///
/// # Example
///
/// ```
/// use grid_core::{CellValue, Record};
///
/// let record = Record::with_id("7")
///     .set("name", "Contoso")
///     .set("units", 12i64);
///
/// assert_eq!(record.get("name"), Some(&CellValue::from("Contoso")));
/// assert_eq!(record.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The unique identifier of the record.
    #[serde(default)]
    pub id: Option<String>,

    /// The field values.
    #[serde(default)]
    pub fields: HashMap<String, CellValue>,
}

impl Record {
    /// Creates a new empty record without an identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty record with the given identity.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    /// Sets a field value, returning the record for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }
}

impl GridRow for Record {
    fn row_id(&self) -> Option<RowId> {
        self.id.as_deref().map(RowId::from)
    }

    fn cell_value(&self, column: &Column) -> CellValue {
        self.get(&column.name).cloned().unwrap_or_default()
    }
}
