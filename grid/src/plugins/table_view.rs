//! The base table: data rows and columns plus the fallback templates.

use std::sync::Arc;

use grid_core::{
    Messages, RowId, TableColumn, TableRow, get_messages_formatter, is_data_table_cell,
    is_data_table_row, is_header_stub_table_cell, is_no_data_table_row, row_ids_or_positions,
    table_columns_with_data_rows, table_rows_with_data_rows,
};
use log::warn;

use crate::config::GridConfig;
use crate::error::GetterError;
use crate::getters::Getters;
use crate::plugin::Plugin;
use crate::template::{
    CellArgs, CellRenderer, FormatterArgs, NoDataCellArgs, NoDataCellRenderer, RowArgs,
    RowRenderer, TemplateContext, Templates,
};

/// Terminal renderers the table view dispatches to.
pub struct TableViewTemplates<R, N> {
    /// Data row × data column. Receives `row`, `column` and, when a formatter
    /// is registered for the column's data type, the formatted `children`.
    pub cell: CellRenderer<R, N>,
    /// Any other cell.
    pub stub_cell: CellRenderer<R, N>,
    /// Cells of header rows that no more specific template claims.
    pub stub_header_cell: CellRenderer<R, N>,
    /// The single cell of the no-data row.
    pub no_data_cell: NoDataCellRenderer<R, N>,
    /// Data rows (with `row` filled) and any row no other template claims.
    pub row: RowRenderer<R, N>,
    /// The no-data row.
    pub no_data_row: RowRenderer<R, N>,
}

impl<R, N> Clone for TableViewTemplates<R, N> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
            stub_cell: Arc::clone(&self.stub_cell),
            stub_header_cell: Arc::clone(&self.stub_header_cell),
            no_data_cell: Arc::clone(&self.no_data_cell),
            row: Arc::clone(&self.row),
            no_data_row: Arc::clone(&self.no_data_row),
        }
    }
}

/// The predicates deciding which renderer a row or cell goes to.
///
/// Checked in a fixed order: no-data, header stub, data cell, then the stub
/// fallback for cells; no-data, data row, then the fallback for rows.
pub struct TableViewPredicates<R> {
    pub is_no_data_row: fn(&TableRow<R>) -> bool,
    pub is_header_stub_cell: fn(&TableRow<R>, &[TableRow<R>]) -> bool,
    pub is_data_cell: fn(&TableRow<R>, &TableColumn) -> bool,
    pub is_data_row: fn(&TableRow<R>) -> bool,
}

impl<R> Default for TableViewPredicates<R> {
    fn default() -> Self {
        Self {
            is_no_data_row: is_no_data_table_row::<R>,
            is_header_stub_cell: is_header_stub_table_cell::<R>,
            is_data_cell: is_data_table_cell::<R>,
            is_data_row: is_data_table_row::<R>,
        }
    }
}

impl<R> Clone for TableViewPredicates<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TableViewPredicates<R> {}

/// Provides `tableColumns`, `tableBodyRows` and an empty `tableHeaderRows`,
/// and registers the fallback cell and row templates.
pub struct TableView<R, N> {
    templates: TableViewTemplates<R, N>,
    predicates: TableViewPredicates<R>,
    messages: Arc<Messages>,
}

impl<R, N> TableView<R, N> {
    pub fn new(templates: TableViewTemplates<R, N>) -> Self {
        Self {
            templates,
            predicates: TableViewPredicates::default(),
            messages: Arc::new(Messages::default()),
        }
    }

    /// Apply the message table of `config`.
    pub fn with_config(self, config: &GridConfig) -> Self {
        self.messages(config.messages.clone())
    }

    /// Set the messages offered to the no-data cell.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Replace the dispatch predicates.
    pub fn predicates(mut self, predicates: TableViewPredicates<R>) -> Self {
        self.predicates = predicates;
        self
    }
}

fn render_cell<R, N>(
    templates: &TableViewTemplates<R, N>,
    predicates: &TableViewPredicates<R>,
    messages: &Messages,
    args: CellArgs<'_, R, N>,
    cx: &TemplateContext<'_, R, N>,
) -> N {
    if (predicates.is_no_data_row)(args.table_row) {
        let get_message = get_messages_formatter(messages);
        return (templates.no_data_cell)(NoDataCellArgs {
            table_row: args.table_row,
            table_column: args.table_column,
            style: args.style,
            col_span: args.col_span.unwrap_or_else(|| cx.column_count()),
            get_message: &get_message,
        });
    }

    if (predicates.is_header_stub_cell)(args.table_row, cx.header_rows()) {
        return (templates.stub_header_cell)(args);
    }

    if (predicates.is_data_cell)(args.table_row, args.table_column) {
        let row = args.table_row.row.as_ref();
        let column = args.table_column.column.as_ref();
        let formatted = column.and_then(|column| {
            let formatter = cx.formatter(column.data_type.as_deref()?)?;
            Some(formatter(FormatterArgs {
                column,
                row,
                value: args.value.as_ref(),
            }))
        });
        return (templates.cell)(CellArgs {
            row,
            column,
            children: formatted.or(args.children),
            ..args
        });
    }

    (templates.stub_cell)(args)
}

fn render_row<R, N>(
    templates: &TableViewTemplates<R, N>,
    predicates: &TableViewPredicates<R>,
    args: RowArgs<'_, R, N>,
) -> N {
    if (predicates.is_no_data_row)(args.table_row) {
        return (templates.no_data_row)(args);
    }

    if (predicates.is_data_row)(args.table_row) {
        let row = args.table_row.row.as_ref();
        return (templates.row)(RowArgs { row, ..args });
    }

    (templates.row)(args)
}

impl<R, N> Plugin<R, N> for TableView<R, N>
where
    R: Clone + Send + Sync + 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "TableView"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["Grid"]
    }

    fn register(&self, templates: &mut Templates<R, N>) {
        let cell_templates = self.templates.clone();
        let predicates = self.predicates;
        let messages = Arc::clone(&self.messages);
        templates.cell(Arc::new(
            move |args: CellArgs<'_, R, N>, cx: &TemplateContext<'_, R, N>| {
                render_cell(&cell_templates, &predicates, &messages, args, cx)
            },
        ));

        let row_templates = self.templates.clone();
        let predicates = self.predicates;
        templates.row(Arc::new(
            move |args: RowArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| {
                render_row(&row_templates, &predicates, args)
            },
        ));
    }

    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        let table_columns = table_columns_with_data_rows(getters.columns()?);
        let get_row_id = getters.get_row_id()?;
        let rows = getters.rows()?;
        let has_id = |row: &R| get_row_id(row).is_some();
        if rows.iter().any(has_id) && !rows.iter().all(has_id) {
            warn!("Some rows have no id; identifying all {} rows by position", rows.len());
        }
        let row_ids = row_ids_or_positions(rows, |row| get_row_id(row));
        let table_body_rows = table_rows_with_data_rows(rows, |index, _| {
            row_ids.get(index).cloned().unwrap_or(RowId::Index(index))
        });

        getters.set_table_columns(table_columns);
        getters.set_table_body_rows(table_body_rows);
        getters.set_table_header_rows(Vec::new());
        Ok(())
    }
}
