use crate::table::TableRow;

/// Append the heading row to the header rows.
pub fn table_header_rows_with_heading<R: Clone>(header_rows: &[TableRow<R>]) -> Vec<TableRow<R>> {
    let mut result = header_rows.to_vec();
    result.push(TableRow::heading());
    result
}
