//! Column titles above the body.

use std::sync::Arc;

use grid_core::{is_heading_table_cell, is_heading_table_row, table_header_rows_with_heading};

use crate::error::GetterError;
use crate::getters::Getters;
use crate::plugin::Plugin;
use crate::template::{CellArgs, CellRenderer, RowArgs, RowRenderer, TemplateContext, Templates};

/// Appends the heading row to `tableHeaderRows` and renders its title cells.
///
/// The title cell receives the raw `column` in its arguments. Heading cells
/// over structural columns fall through to the table view's header stub.
pub struct TableHeaderRow<R, N> {
    cell: CellRenderer<R, N>,
    row: Option<RowRenderer<R, N>>,
}

impl<R, N> TableHeaderRow<R, N> {
    pub fn new(cell: impl Fn(CellArgs<'_, R, N>) -> N + Send + Sync + 'static) -> Self {
        Self {
            cell: Arc::new(cell),
            row: None,
        }
    }

    /// Render the heading row itself with a dedicated template.
    pub fn row_template(mut self, row: impl Fn(RowArgs<'_, R, N>) -> N + Send + Sync + 'static) -> Self {
        self.row = Some(Arc::new(row));
        self
    }
}

impl<R, N> Plugin<R, N> for TableHeaderRow<R, N>
where
    R: Clone + Send + Sync + 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "TableHeaderRow"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["TableView"]
    }

    fn register(&self, templates: &mut Templates<R, N>) {
        let cell = Arc::clone(&self.cell);
        templates.cell_when(
            Arc::new(is_heading_table_cell::<R>),
            Arc::new(move |args: CellArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| {
                let column = args.table_column.column.as_ref();
                cell(CellArgs { column, ..args })
            }),
        );

        if let Some(row) = &self.row {
            let row = Arc::clone(row);
            templates.row_when(
                Arc::new(is_heading_table_row::<R>),
                Arc::new(move |args: RowArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| row(args)),
            );
        }
    }

    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        let table_header_rows = table_header_rows_with_heading(getters.table_header_rows()?);
        getters.set_table_header_rows(table_header_rows);
        Ok(())
    }
}
