//! Source of the raw data getters.

use std::sync::Arc;

use grid_core::{CellValue, Column, GridRow, RowId};

use crate::error::GetterError;
use crate::getters::{CellValueGetter, Getters, RowIdGetter};
use crate::plugin::Plugin;

/// Provides `rows`, `columns`, `getRowId` and `getCellValue`.
///
/// Always the first plugin of a grid.
pub struct GridCore<R> {
    rows: Arc<[R]>,
    columns: Arc<[Column]>,
    get_row_id: RowIdGetter<R>,
    get_cell_value: CellValueGetter<R>,
}

impl<R: GridRow> GridCore<R> {
    /// Grid over rows that know their identity and cell values.
    pub fn new(rows: Vec<R>, columns: Vec<Column>) -> Self {
        Self {
            rows: rows.into(),
            columns: columns.into(),
            get_row_id: Arc::new(|row: &R| row.row_id()),
            get_cell_value: Arc::new(|row: &R, column: &Column| row.cell_value(column)),
        }
    }
}

impl<R: 'static> GridCore<R> {
    /// Grid over arbitrary rows with an explicit value accessor.
    ///
    /// Rows are identified by position until [`row_id`](Self::row_id) is set.
    pub fn with_accessor(
        rows: Vec<R>,
        columns: Vec<Column>,
        get_cell_value: impl Fn(&R, &Column) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            rows: rows.into(),
            columns: columns.into(),
            get_row_id: Arc::new(|_: &R| None),
            get_cell_value: Arc::new(get_cell_value),
        }
    }

    /// Set the row identity accessor.
    pub fn row_id(mut self, get_row_id: impl Fn(&R) -> RowId + Send + Sync + 'static) -> Self {
        self.get_row_id = Arc::new(move |row: &R| Some(get_row_id(row)));
        self
    }

    /// Replace the rows.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows.into();
    }

    /// Replace the columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns.into();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

impl<R, N> Plugin<R, N> for GridCore<R>
where
    R: Send + Sync + 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "Grid"
    }

    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        getters.set_rows(Arc::clone(&self.rows));
        getters.set_columns(Arc::clone(&self.columns));
        getters.set_get_row_id(Arc::clone(&self.get_row_id));
        getters.set_get_cell_value(Arc::clone(&self.get_cell_value));
        Ok(())
    }
}
