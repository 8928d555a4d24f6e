//! Plugin-composable data grid.
//!
//! A [`PluginHost`] threads the named getters (`rows`, `columns`,
//! `tableColumns`, `tableBodyRows`, `tableHeaderRows`, ...) through an ordered
//! list of plugins. Each plugin sees the value the previous plugins produced
//! and replaces it with its own derivation. At render time the resolved
//! sequences are walked by a layout, and every row and cell is dispatched to
//! exactly one template through predicates.
//!
//! # Example
//!
//! ```ignore
//! use grid::prelude::*;
//!
//! let mut host = PluginHost::new()
//!     .with(GridCore::new(records, columns))?
//!     .with(TableView::new(renderers))?
//!     .with(TableHeaderRow::new(heading_cell))?
//!     .with(TableColumnReordering::new(order))?
//!     .with(TableEditRow::new(edit_cell, edit_row))?;
//!
//! let lines: Vec<String> = host.render(table_layout)?;
//! ```

pub mod config;
pub mod error;
pub mod getters;
pub mod host;
pub mod layout;
pub mod plugin;
pub mod plugins;
pub mod template;

pub use config::GridConfig;
pub use error::{GetterError, PluginError};
pub use getters::{CellValueGetter, GetterName, Getters, RowIdGetter};
pub use host::PluginHost;
pub use layout::{LayoutArgs, table_layout};
pub use plugin::Plugin;
pub use template::{
    CellArgs, CellPredicate, CellRenderer, CellTemplate, Formatter, FormatterArgs, NoDataCellArgs,
    NoDataCellRenderer, RowArgs, RowPredicate, RowRenderer, RowTemplate, Style, TemplateContext,
    Templates,
};

pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::error::{GetterError, PluginError};
    pub use crate::getters::Getters;
    pub use crate::host::PluginHost;
    pub use crate::layout::{LayoutArgs, table_layout};
    pub use crate::plugin::Plugin;
    pub use crate::plugins::{
        DataTypeProvider, GridCore, TableColumnReordering, TableEditRow, TableHeaderRow,
        TableView, TableViewPredicates, TableViewTemplates,
    };
    pub use crate::template::{
        CellArgs, FormatterArgs, NoDataCellArgs, RowArgs, Style, TemplateContext, Templates,
    };

    pub use grid_core::{CellValue, Column, GridRow, Messages, Record, RowId, TableColumn, TableRow};
}
