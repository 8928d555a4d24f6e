//! Raw column definitions owned by the application.

use serde::Deserialize;
use serde::Serialize;

/// A raw column as the application defines it.
///
/// The grid never mutates columns; it wraps them into
/// [`TableColumn`](crate::TableColumn)s. `data_type` selects a value
/// formatter when one is registered for that type name.
///
/// # Examples
///
/// ```
/// use grid_core::Column;
///
/// let columns = vec![
///     Column::new("name").title("Name"),
///     Column::new("amount").data_type("currency").width(12),
/// ];
/// assert_eq!(columns[1].data_type.as_deref(), Some("currency"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Unique column name, also the key cell values are looked up by.
    pub name: String,
    /// Header text; the name is shown when absent.
    #[serde(default)]
    pub title: Option<String>,
    /// Name of the data type used for formatter lookup.
    #[serde(default, rename = "dataType")]
    pub data_type: Option<String>,
    /// Preferred width in terminal columns.
    #[serde(default)]
    pub width: Option<u16>,
}

impl Column {
    /// Create a new column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            data_type: None,
            width: None,
        }
    }

    /// Set the header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the data type name.
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Header text to display.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
