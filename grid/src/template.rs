//! Templates, their arguments, and predicate dispatch.
//!
//! Two template slots exist: one for cells and one for rows. Each slot holds
//! an ordered list of entries, optionally guarded by a predicate. Dispatch
//! walks the list from the most recently registered entry backwards and the
//! first entry whose predicate matches (or that has none) renders.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use grid_core::{CellValue, Column, TableColumn, TableRow};

use crate::getters::Getters;

/// Size hints handed to templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Style {
    /// No size hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width hint.
    pub fn width(mut self, width: Option<u16>) -> Self {
        self.width = width;
        self
    }

    /// Set the height hint.
    pub fn height(mut self, height: Option<u16>) -> Self {
        self.height = height;
        self
    }
}

/// Arguments of a cell template.
///
/// The layout fills `table_row`, `table_column`, `style`, and `value` (and
/// `col_span` when a cell spans columns). `row`, `column` and `children` are
/// filled by templates before handing off to a data-cell renderer.
pub struct CellArgs<'a, R, N> {
    pub table_row: &'a TableRow<R>,
    pub table_column: &'a TableColumn,
    pub style: Style,
    pub value: Option<CellValue>,
    pub col_span: Option<usize>,
    pub row: Option<&'a R>,
    pub column: Option<&'a Column>,
    pub children: Option<N>,
}

impl<'a, R, N> CellArgs<'a, R, N> {
    /// Arguments for the cell at `table_row` × `table_column`.
    pub fn new(table_row: &'a TableRow<R>, table_column: &'a TableColumn) -> Self {
        Self {
            table_row,
            table_column,
            style: Style::default(),
            value: None,
            col_span: None,
            row: None,
            column: None,
            children: None,
        }
    }

    /// Set the size hints.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the raw value of the cell.
    pub fn value(mut self, value: Option<CellValue>) -> Self {
        self.value = value;
        self
    }

    /// Make the cell span `col_span` columns.
    pub fn col_span(mut self, col_span: usize) -> Self {
        self.col_span = Some(col_span);
        self
    }
}

impl<R: fmt::Debug, N: fmt::Debug> fmt::Debug for CellArgs<'_, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellArgs")
            .field("table_row", &self.table_row.key)
            .field("table_column", &self.table_column.key)
            .field("style", &self.style)
            .field("value", &self.value)
            .field("col_span", &self.col_span)
            .field("row", &self.row)
            .field("column", &self.column)
            .field("children", &self.children)
            .finish()
    }
}

/// Arguments of the no-data cell renderer.
pub struct NoDataCellArgs<'a, R> {
    pub table_row: &'a TableRow<R>,
    pub table_column: &'a TableColumn,
    pub style: Style,
    /// Number of columns the cell spans: all of them.
    pub col_span: usize,
    /// Resolves a message key to display text.
    pub get_message: &'a dyn Fn(&str) -> String,
}

/// Arguments of a row template.
pub struct RowArgs<'a, R, N> {
    pub table_row: &'a TableRow<R>,
    pub style: Style,
    /// Rendered cells of the row.
    pub children: Vec<N>,
    /// Backing raw row, filled before handing off to a data-row renderer.
    pub row: Option<&'a R>,
}

impl<'a, R, N> RowArgs<'a, R, N> {
    /// Arguments for `table_row` with its rendered cells.
    pub fn new(table_row: &'a TableRow<R>, children: Vec<N>) -> Self {
        Self {
            table_row,
            style: Style::default(),
            children,
            row: None,
        }
    }

    /// Set the size hints.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Arguments of a value formatter.
pub struct FormatterArgs<'a, R> {
    pub column: &'a Column,
    pub row: Option<&'a R>,
    pub value: Option<&'a CellValue>,
}

/// Terminal renderer for cells.
pub type CellRenderer<R, N> = Arc<dyn Fn(CellArgs<'_, R, N>) -> N + Send + Sync>;

/// Terminal renderer for the no-data cell.
pub type NoDataCellRenderer<R, N> = Arc<dyn Fn(NoDataCellArgs<'_, R>) -> N + Send + Sync>;

/// Terminal renderer for rows.
pub type RowRenderer<R, N> = Arc<dyn Fn(RowArgs<'_, R, N>) -> N + Send + Sync>;

/// Formatter for values of one data type.
pub type Formatter<R, N> = Arc<dyn Fn(FormatterArgs<'_, R>) -> N + Send + Sync>;

/// A cell template registered in the cell slot.
pub type CellTemplate<R, N> =
    Arc<dyn Fn(CellArgs<'_, R, N>, &TemplateContext<'_, R, N>) -> N + Send + Sync>;

/// A row template registered in the row slot.
pub type RowTemplate<R, N> =
    Arc<dyn Fn(RowArgs<'_, R, N>, &TemplateContext<'_, R, N>) -> N + Send + Sync>;

/// Guard of a cell template.
pub type CellPredicate<R> = Arc<dyn Fn(&TableRow<R>, &TableColumn) -> bool + Send + Sync>;

/// Guard of a row template.
pub type RowPredicate<R> = Arc<dyn Fn(&TableRow<R>) -> bool + Send + Sync>;

struct Entry<P, T> {
    predicate: Option<P>,
    template: T,
}

/// Everything templates can consult while rendering.
pub struct TemplateContext<'a, R, N> {
    pub getters: &'a Getters<R>,
    pub templates: &'a Templates<R, N>,
}

impl<R, N> TemplateContext<'_, R, N> {
    /// Header rows, or none if no plugin provides them.
    pub fn header_rows(&self) -> &[TableRow<R>] {
        self.getters.table_header_rows().unwrap_or_default()
    }

    /// Number of table columns, or zero if no plugin provides them.
    pub fn column_count(&self) -> usize {
        self.getters.table_columns().map_or(0, <[TableColumn]>::len)
    }

    /// Formatter registered for `data_type`.
    pub fn formatter(&self, data_type: &str) -> Option<&Formatter<R, N>> {
        self.templates.formatter(data_type)
    }
}

/// Registered templates and formatters.
pub struct Templates<R, N> {
    cells: Vec<Entry<CellPredicate<R>, CellTemplate<R, N>>>,
    rows: Vec<Entry<RowPredicate<R>, RowTemplate<R, N>>>,
    formatters: HashMap<String, Formatter<R, N>>,
}

impl<R, N> Default for Templates<R, N> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            rows: Vec::new(),
            formatters: HashMap::new(),
        }
    }
}

impl<R, N> Templates<R, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cell template that applies to every cell.
    pub fn cell(&mut self, template: CellTemplate<R, N>) {
        self.cells.push(Entry {
            predicate: None,
            template,
        });
    }

    /// Register a cell template guarded by `predicate`.
    pub fn cell_when(&mut self, predicate: CellPredicate<R>, template: CellTemplate<R, N>) {
        self.cells.push(Entry {
            predicate: Some(predicate),
            template,
        });
    }

    /// Register a row template that applies to every row.
    pub fn row(&mut self, template: RowTemplate<R, N>) {
        self.rows.push(Entry {
            predicate: None,
            template,
        });
    }

    /// Register a row template guarded by `predicate`.
    pub fn row_when(&mut self, predicate: RowPredicate<R>, template: RowTemplate<R, N>) {
        self.rows.push(Entry {
            predicate: Some(predicate),
            template,
        });
    }

    /// Register the formatter for values of `data_type`, replacing any earlier one.
    pub fn formatter_for(&mut self, data_type: impl Into<String>, formatter: Formatter<R, N>) {
        self.formatters.insert(data_type.into(), formatter);
    }

    /// Formatter registered for `data_type`.
    pub fn formatter(&self, data_type: &str) -> Option<&Formatter<R, N>> {
        self.formatters.get(data_type)
    }

    /// The most recently registered row template without a predicate.
    ///
    /// Guarded templates use it to delegate rendering of rows they only
    /// reshape.
    pub fn fallback_row(&self) -> Option<RowTemplate<R, N>> {
        self.rows
            .iter()
            .rev()
            .find(|entry| entry.predicate.is_none())
            .map(|entry| Arc::clone(&entry.template))
    }

    /// Number of registered cell templates.
    pub fn cell_template_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of registered row templates.
    pub fn row_template_count(&self) -> usize {
        self.rows.len()
    }

    /// Render a cell with the most recently registered matching template.
    ///
    /// Returns `None` only when no template matches at all.
    pub fn render_cell(&self, args: CellArgs<'_, R, N>, cx: &TemplateContext<'_, R, N>) -> Option<N> {
        let entry = self.cells.iter().rev().find(|entry| {
            entry
                .predicate
                .as_ref()
                .is_none_or(|predicate| predicate(args.table_row, args.table_column))
        })?;
        Some((entry.template)(args, cx))
    }

    /// Render a row with the most recently registered matching template.
    pub fn render_row(&self, args: RowArgs<'_, R, N>, cx: &TemplateContext<'_, R, N>) -> Option<N> {
        let entry = self.rows.iter().rev().find(|entry| {
            entry
                .predicate
                .as_ref()
                .is_none_or(|predicate| predicate(args.table_row))
        })?;
        Some((entry.template)(args, cx))
    }
}
