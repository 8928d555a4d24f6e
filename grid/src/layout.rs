//! Walking the resolved table into render instructions.

use grid_core::{CellValue, TableColumn, TableRow, is_no_data_table_row};

use crate::error::GetterError;
use crate::template::{CellArgs, RowArgs, Style, TemplateContext};

/// What a layout receives: the resolved table sequences plus dispatchers that
/// route each row and cell to its template.
pub struct LayoutArgs<'a, R, N> {
    pub header_rows: &'a [TableRow<R>],
    pub body_rows: &'a [TableRow<R>],
    pub columns: &'a [TableColumn],
    cx: TemplateContext<'a, R, N>,
}

impl<'a, R, N> LayoutArgs<'a, R, N> {
    pub(crate) fn new(cx: TemplateContext<'a, R, N>) -> Result<Self, GetterError> {
        let getters = cx.getters;
        Ok(Self {
            header_rows: getters.table_header_rows()?,
            body_rows: getters.table_body_rows()?,
            columns: getters.table_columns()?,
            cx,
        })
    }

    /// Value of the cell at `table_row` × `table_column`, when both are backed
    /// by raw data.
    pub fn cell_value(&self, table_row: &TableRow<R>, table_column: &TableColumn) -> Option<CellValue> {
        let get_cell_value = self.cx.getters.get_cell_value().ok()?;
        match (&table_row.row, &table_column.column) {
            (Some(row), Some(column)) => Some(get_cell_value(row, column)),
            _ => None,
        }
    }

    /// Dispatch a cell to its template.
    pub fn render_cell(&self, args: CellArgs<'_, R, N>) -> Option<N> {
        self.cx.templates.render_cell(args, &self.cx)
    }

    /// Dispatch a row to its template.
    pub fn render_row(&self, args: RowArgs<'_, R, N>) -> Option<N> {
        self.cx.templates.render_row(args, &self.cx)
    }
}

/// Default layout: header rows then body rows, one instruction per row.
///
/// Every row renders one cell per column, except the no-data row which
/// renders a single cell spanning all columns.
pub fn table_layout<R, N>(args: &LayoutArgs<'_, R, N>) -> Vec<N> {
    args.header_rows
        .iter()
        .chain(args.body_rows)
        .filter_map(|table_row| layout_row(args, table_row))
        .collect()
}

fn layout_row<R, N>(args: &LayoutArgs<'_, R, N>, table_row: &TableRow<R>) -> Option<N> {
    let cells: Vec<N> = if is_no_data_table_row(table_row) {
        args.columns
            .first()
            .and_then(|table_column| {
                let style = Style::new().height(table_row.height);
                args.render_cell(
                    CellArgs::new(table_row, table_column)
                        .style(style)
                        .col_span(args.columns.len()),
                )
            })
            .into_iter()
            .collect()
    } else {
        args.columns
            .iter()
            .filter_map(|table_column| {
                let style = Style::new()
                    .width(table_column.width)
                    .height(table_row.height);
                args.render_cell(
                    CellArgs::new(table_row, table_column)
                        .style(style)
                        .value(args.cell_value(table_row, table_column)),
                )
            })
            .collect()
    };

    let style = Style::new().height(table_row.height);
    args.render_row(RowArgs::new(table_row, cells).style(style))
}
