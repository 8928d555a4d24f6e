//! Tagged row/column model of the table view.
//!
//! Raw rows and columns belong to the application. The table view works on
//! [`TableRow`]s and [`TableColumn`]s instead: display-oriented wrappers that
//! carry a tag ([`RowKind`] / [`ColumnKind`]) saying what the row or column
//! *is*. Data-backed entries wrap a raw row/column; structural entries (the
//! no-data row, the heading row, the reordering marker) do not.
//!
//! Code outside this module classifies rows and cells through the functions in
//! [`predicates`], never by matching on tags directly.

pub mod predicates;

use std::fmt;

use crate::column::Column;

/// Identity of a row.
///
/// When any row of a grid lacks an application-supplied identity, every row
/// is identified by its position, so data row keys stay unique. Added rows are identified by their position among the added
/// rows, so an `Index` id of an added row may equal the id of a data row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Positional identity.
    Index(usize),
    /// Application-defined identity.
    Key(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Index(i) => write!(f, "{i}"),
            RowId::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for RowId {
    fn from(v: usize) -> Self {
        RowId::Index(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Key(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Key(v)
    }
}

/// Tag of a [`TableRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Row backed by a raw data row.
    Data,
    /// Placeholder shown when there are no data rows.
    NoData,
    /// Header row carrying column titles.
    Heading,
    /// Row synthesized for a new, uncommitted record.
    Added,
    /// Data row currently being edited.
    Edit,
    /// Zero-height header marker owned by column reordering.
    Reordering,
    /// Tag introduced by a third-party plugin.
    Custom(&'static str),
}

impl RowKind {
    /// String form used in row keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Data => "data",
            RowKind::NoData => "nodata",
            RowKind::Heading => "heading",
            RowKind::Added => "added",
            RowKind::Edit => "edit",
            RowKind::Reordering => "reordering",
            RowKind::Custom(name) => *name,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of a [`TableColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Column backed by a raw column.
    Data,
    /// Structural column introduced by a plugin (selection, detail toggle, ...).
    Custom(&'static str),
}

impl ColumnKind {
    /// String form used in column keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Data => "data",
            ColumnKind::Custom(name) => *name,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A displayable row of the table view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<R> {
    /// Key unique within the sequence the row belongs to.
    pub key: String,
    /// What kind of row this is.
    pub kind: RowKind,
    /// Height in terminal rows; `None` leaves it to the layout.
    pub height: Option<u16>,
    /// Identity of the backing row. Always set for data, edit and added rows.
    pub row_id: Option<RowId>,
    /// The backing raw row, if any.
    pub row: Option<R>,
}

impl<R> TableRow<R> {
    /// A data row wrapping `row`.
    pub fn data(row_id: RowId, row: R) -> Self {
        Self {
            key: format!("{}_{}", RowKind::Data, row_id),
            kind: RowKind::Data,
            height: None,
            row_id: Some(row_id),
            row: Some(row),
        }
    }

    /// A synthesized row for the `index`-th added record.
    pub fn added(index: usize, row: R, height: Option<u16>) -> Self {
        Self {
            key: format!("{}_{}", RowKind::Added, index),
            kind: RowKind::Added,
            height,
            row_id: Some(RowId::Index(index)),
            row: Some(row),
        }
    }

    /// A structural row with no backing data, keyed by its tag.
    pub fn structural(kind: RowKind) -> Self {
        Self {
            key: kind.as_str().to_string(),
            kind,
            height: None,
            row_id: None,
            row: None,
        }
    }

    /// The placeholder row shown for an empty grid.
    pub fn no_data() -> Self {
        Self::structural(RowKind::NoData)
    }

    /// The header row carrying column titles.
    pub fn heading() -> Self {
        Self::structural(RowKind::Heading)
    }

    /// The zero-height reordering marker.
    pub fn reordering() -> Self {
        Self::structural(RowKind::Reordering).height(0)
    }

    /// Set the row height.
    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }
}

/// A displayable column of the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Key unique within the column sequence.
    pub key: String,
    /// What kind of column this is.
    pub kind: ColumnKind,
    /// Width in terminal columns; `None` leaves it to the layout.
    pub width: Option<u16>,
    /// The backing raw column. Always set for data columns.
    pub column: Option<Column>,
}

impl TableColumn {
    /// A data column wrapping `column`.
    pub fn data(column: Column) -> Self {
        Self {
            key: format!("{}_{}", ColumnKind::Data, column.name),
            kind: ColumnKind::Data,
            width: column.width,
            column: Some(column),
        }
    }

    /// A structural column keyed by its tag.
    pub fn structural(kind: ColumnKind, width: Option<u16>) -> Self {
        Self {
            key: kind.as_str().to_string(),
            kind,
            width,
            column: None,
        }
    }

    /// Name of the backing column, if this is a data column.
    pub fn name(&self) -> Option<&str> {
        match (self.kind, &self.column) {
            (ColumnKind::Data, Some(column)) => Some(&column.name),
            _ => None,
        }
    }
}
