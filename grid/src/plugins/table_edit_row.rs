//! Inline editing of existing rows and rows being added.

use std::sync::Arc;

use grid_core::{RowId, is_edit_table_row, is_editing_table_cell, table_rows_with_editing};
use log::debug;

use crate::config::GridConfig;
use crate::error::GetterError;
use crate::getters::Getters;
use crate::plugin::Plugin;
use crate::template::{CellArgs, CellRenderer, RowArgs, RowRenderer, TemplateContext, Templates};

/// Turns edited data rows into edit rows and shows added rows on top.
///
/// Added rows are identified by their index among the added rows, which may
/// coincide with the id of a data row.
pub struct TableEditRow<R, N> {
    editing_row_ids: Vec<RowId>,
    added_rows: Vec<R>,
    row_height: u16,
    cell: CellRenderer<R, N>,
    row: RowRenderer<R, N>,
}

impl<R, N> TableEditRow<R, N> {
    /// `cell` renders editor cells (with `row`, `column` and `value`), `row`
    /// renders edit and added rows (with `row`).
    pub fn new(
        cell: impl Fn(CellArgs<'_, R, N>) -> N + Send + Sync + 'static,
        row: impl Fn(RowArgs<'_, R, N>) -> N + Send + Sync + 'static,
    ) -> Self {
        Self {
            editing_row_ids: Vec::new(),
            added_rows: Vec::new(),
            row_height: GridConfig::default().edit_row_height,
            cell: Arc::new(cell),
            row: Arc::new(row),
        }
    }

    /// Apply the edit row height of `config`.
    pub fn with_config(self, config: &GridConfig) -> Self {
        self.row_height(config.edit_row_height)
    }

    /// Height of edit and added rows.
    pub fn row_height(mut self, row_height: u16) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn editing_row_ids(&self) -> &[RowId] {
        &self.editing_row_ids
    }

    pub fn added_rows(&self) -> &[R] {
        &self.added_rows
    }

    /// Put a row in edit mode. Returns false if it already was.
    pub fn start_editing(&mut self, row_id: RowId) -> bool {
        if self.editing_row_ids.contains(&row_id) {
            return false;
        }
        debug!("Editing row {}", row_id);
        self.editing_row_ids.push(row_id);
        true
    }

    /// Leave edit mode for a row. Returns false if it was not being edited.
    pub fn stop_editing(&mut self, row_id: &RowId) -> bool {
        let before = self.editing_row_ids.len();
        self.editing_row_ids.retain(|id| id != row_id);
        before != self.editing_row_ids.len()
    }

    /// Start adding a new row. Returns its index among the added rows.
    pub fn add_row(&mut self, row: R) -> usize {
        self.added_rows.push(row);
        self.added_rows.len() - 1
    }

    /// Replace the draft of an added row.
    pub fn change_added_row(&mut self, index: usize, row: R) -> bool {
        match self.added_rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Discard an added row. Later added rows shift down by one index.
    pub fn cancel_added_row(&mut self, index: usize) -> Option<R> {
        (index < self.added_rows.len()).then(|| self.added_rows.remove(index))
    }

    /// Take all added rows for the application to persist.
    pub fn commit_added_rows(&mut self) -> Vec<R> {
        debug!("Committing {} added rows", self.added_rows.len());
        std::mem::take(&mut self.added_rows)
    }
}

impl<R, N> Plugin<R, N> for TableEditRow<R, N>
where
    R: Clone + Send + Sync + 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "TableEditRow"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["TableView"]
    }

    fn register(&self, templates: &mut Templates<R, N>) {
        let cell = Arc::clone(&self.cell);
        templates.cell_when(
            Arc::new(is_editing_table_cell::<R>),
            Arc::new(move |args: CellArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| {
                let row = args.table_row.row.as_ref();
                let column = args.table_column.column.as_ref();
                cell(CellArgs { row, column, ..args })
            }),
        );

        let row = Arc::clone(&self.row);
        templates.row_when(
            Arc::new(is_edit_table_row::<R>),
            Arc::new(move |args: RowArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| {
                let raw = args.table_row.row.as_ref();
                row(RowArgs { row: raw, ..args })
            }),
        );
    }

    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        let table_body_rows = table_rows_with_editing(
            getters.table_body_rows()?,
            &self.editing_row_ids,
            &self.added_rows,
            self.row_height,
        );
        getters.set_table_body_rows(table_body_rows);
        Ok(())
    }
}
