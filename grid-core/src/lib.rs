//! Pure building blocks of the data grid.
//!
//! Everything in this crate is a total function over plain data: the tagged
//! row/column model, the predicates that classify rows and cells, and the
//! computeds that plugins chain together to derive the table view model.
//! The plugin host and template dispatch live in the `grid` crate.

pub mod column;
pub mod computeds;
pub mod messages;
pub mod record;
pub mod table;
pub mod value;

pub use column::Column;
pub use computeds::{
    draft_order, ordered_columns, row_ids_or_positions, table_columns_with_data_rows,
    table_header_rows_with_heading, table_header_rows_with_reordering, table_rows_with_data_rows,
    table_rows_with_editing,
};
pub use messages::{Messages, get_messages_formatter};
pub use record::{GridRow, Record};
pub use table::predicates::*;
pub use table::{ColumnKind, RowId, RowKind, TableColumn, TableRow};
pub use value::CellValue;
