//! Named getters resolved by the plugin chain.

use std::fmt;
use std::sync::Arc;

use grid_core::{CellValue, Column, RowId, TableColumn, TableRow};

use crate::error::GetterError;

/// Identity accessor. `None` falls back to the row's position.
pub type RowIdGetter<R> = Arc<dyn Fn(&R) -> Option<RowId> + Send + Sync>;

/// Value accessor for a `(row, column)` pair.
pub type CellValueGetter<R> = Arc<dyn Fn(&R, &Column) -> CellValue + Send + Sync>;

/// Names of the getters plugins exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetterName {
    Rows,
    Columns,
    GetRowId,
    GetCellValue,
    TableColumns,
    TableBodyRows,
    TableHeaderRows,
}

impl GetterName {
    /// Name of the getter as plugins refer to it.
    pub fn as_str(&self) -> &'static str {
        match self {
            GetterName::Rows => "rows",
            GetterName::Columns => "columns",
            GetterName::GetRowId => "getRowId",
            GetterName::GetCellValue => "getCellValue",
            GetterName::TableColumns => "tableColumns",
            GetterName::TableBodyRows => "tableBodyRows",
            GetterName::TableHeaderRows => "tableHeaderRows",
        }
    }
}

impl fmt::Display for GetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Getter values as resolved so far along the plugin chain.
///
/// A slot is empty until some plugin provides it. Plugins read the value left
/// by the plugins before them and overwrite it with their derivation; reading
/// an empty slot is a wiring error.
pub struct Getters<R> {
    rows: Option<Arc<[R]>>,
    columns: Option<Arc<[Column]>>,
    get_row_id: Option<RowIdGetter<R>>,
    get_cell_value: Option<CellValueGetter<R>>,
    table_columns: Option<Vec<TableColumn>>,
    table_body_rows: Option<Vec<TableRow<R>>>,
    table_header_rows: Option<Vec<TableRow<R>>>,
}

impl<R> Default for Getters<R> {
    fn default() -> Self {
        Self {
            rows: None,
            columns: None,
            get_row_id: None,
            get_cell_value: None,
            table_columns: None,
            table_body_rows: None,
            table_header_rows: None,
        }
    }
}

fn resolved<T>(slot: Option<T>, name: GetterName) -> Result<T, GetterError> {
    slot.ok_or(GetterError::Unresolved(name))
}

impl<R> Getters<R> {
    /// Create an empty set of getters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw rows.
    pub fn rows(&self) -> Result<&Arc<[R]>, GetterError> {
        resolved(self.rows.as_ref(), GetterName::Rows)
    }

    /// The raw columns.
    pub fn columns(&self) -> Result<&Arc<[Column]>, GetterError> {
        resolved(self.columns.as_ref(), GetterName::Columns)
    }

    /// The row identity accessor.
    pub fn get_row_id(&self) -> Result<&RowIdGetter<R>, GetterError> {
        resolved(self.get_row_id.as_ref(), GetterName::GetRowId)
    }

    /// The cell value accessor.
    pub fn get_cell_value(&self) -> Result<&CellValueGetter<R>, GetterError> {
        resolved(self.get_cell_value.as_ref(), GetterName::GetCellValue)
    }

    /// Columns of the table view, in display order.
    pub fn table_columns(&self) -> Result<&[TableColumn], GetterError> {
        resolved(self.table_columns.as_deref(), GetterName::TableColumns)
    }

    /// Body rows of the table view, in display order.
    pub fn table_body_rows(&self) -> Result<&[TableRow<R>], GetterError> {
        resolved(self.table_body_rows.as_deref(), GetterName::TableBodyRows)
    }

    /// Header rows of the table view, top to bottom.
    pub fn table_header_rows(&self) -> Result<&[TableRow<R>], GetterError> {
        resolved(self.table_header_rows.as_deref(), GetterName::TableHeaderRows)
    }

    /// Whether a plugin has provided `name` yet.
    pub fn is_resolved(&self, name: GetterName) -> bool {
        match name {
            GetterName::Rows => self.rows.is_some(),
            GetterName::Columns => self.columns.is_some(),
            GetterName::GetRowId => self.get_row_id.is_some(),
            GetterName::GetCellValue => self.get_cell_value.is_some(),
            GetterName::TableColumns => self.table_columns.is_some(),
            GetterName::TableBodyRows => self.table_body_rows.is_some(),
            GetterName::TableHeaderRows => self.table_header_rows.is_some(),
        }
    }

    /// Provide the raw rows.
    pub fn set_rows(&mut self, rows: Arc<[R]>) {
        self.rows = Some(rows);
    }

    /// Provide the raw columns.
    pub fn set_columns(&mut self, columns: Arc<[Column]>) {
        self.columns = Some(columns);
    }

    /// Provide the row identity accessor.
    pub fn set_get_row_id(&mut self, get_row_id: RowIdGetter<R>) {
        self.get_row_id = Some(get_row_id);
    }

    /// Provide the cell value accessor.
    pub fn set_get_cell_value(&mut self, get_cell_value: CellValueGetter<R>) {
        self.get_cell_value = Some(get_cell_value);
    }

    /// Replace the table columns.
    pub fn set_table_columns(&mut self, table_columns: Vec<TableColumn>) {
        self.table_columns = Some(table_columns);
    }

    /// Replace the body rows.
    pub fn set_table_body_rows(&mut self, table_body_rows: Vec<TableRow<R>>) {
        self.table_body_rows = Some(table_body_rows);
    }

    /// Replace the header rows.
    pub fn set_table_header_rows(&mut self, table_header_rows: Vec<TableRow<R>>) {
        self.table_header_rows = Some(table_header_rows);
    }
}

impl<R: fmt::Debug> fmt::Debug for Getters<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getters")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("get_row_id", &self.get_row_id.as_ref().map(|_| ".."))
            .field("get_cell_value", &self.get_cell_value.as_ref().map(|_| ".."))
            .field("table_columns", &self.table_columns)
            .field("table_body_rows", &self.table_body_rows)
            .field("table_header_rows", &self.table_header_rows)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_is_unresolved() {
        let getters = Getters::<u8>::new();
        assert_eq!(
            getters.table_columns().unwrap_err(),
            GetterError::Unresolved(GetterName::TableColumns)
        );
        assert!(!getters.is_resolved(GetterName::Rows));
    }

    #[test]
    fn test_set_then_read() {
        let mut getters = Getters::<u8>::new();
        getters.set_rows(Arc::from(vec![1u8, 2]));
        getters.set_table_header_rows(Vec::new());

        assert_eq!(getters.rows().unwrap().len(), 2);
        assert!(getters.table_header_rows().unwrap().is_empty());
        assert!(getters.is_resolved(GetterName::TableHeaderRows));
    }

    #[test]
    fn test_getter_names() {
        assert_eq!(GetterName::TableBodyRows.to_string(), "tableBodyRows");
        assert_eq!(GetterName::GetCellValue.as_str(), "getCellValue");
    }
}
