//! Built-in plugins.

mod data_type_provider;
mod grid_core;
mod table_column_reordering;
mod table_edit_row;
mod table_header_row;
mod table_view;

pub use data_type_provider::DataTypeProvider;
pub use grid_core::GridCore;
pub use table_column_reordering::TableColumnReordering;
pub use table_edit_row::TableEditRow;
pub use table_header_row::TableHeaderRow;
pub use table_view::{TableView, TableViewPredicates, TableViewTemplates};
