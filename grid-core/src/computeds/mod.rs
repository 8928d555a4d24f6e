//! Computeds: the pure derivations plugins chain together.
//!
//! Each function maps the previous value of a getter (plus plugin-local state)
//! to a fresh sequence. None of them mutate their input or fail.

mod column_reordering;
mod edit_row;
mod header_row;
mod table_view;

pub use column_reordering::{draft_order, ordered_columns, table_header_rows_with_reordering};
pub use edit_row::table_rows_with_editing;
pub use header_row::table_header_rows_with_heading;
pub use table_view::{row_ids_or_positions, table_columns_with_data_rows, table_rows_with_data_rows};
