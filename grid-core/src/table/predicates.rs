//! Row and cell classification.
//!
//! Every predicate is total: a tag it does not own simply yields `false`, so
//! plugins can introduce new tags without breaking existing checks.

use super::{ColumnKind, RowKind, TableColumn, TableRow};

/// Row backed by a raw data row.
pub fn is_data_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.kind == RowKind::Data
}

/// Placeholder row signalling an empty grid.
pub fn is_no_data_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.kind == RowKind::NoData
}

/// Intersection of a data row and a data column.
pub fn is_data_table_cell<R>(table_row: &TableRow<R>, table_column: &TableColumn) -> bool {
    table_row.kind == RowKind::Data && table_column.kind == ColumnKind::Data
}

/// Any cell of a header row.
///
/// Membership is decided by key, since header rows are recomputed on every
/// resolution and never shared by reference.
pub fn is_header_stub_table_cell<R>(table_row: &TableRow<R>, header_rows: &[TableRow<R>]) -> bool {
    header_rows.iter().any(|header| header.key == table_row.key)
}

/// Header row carrying column titles.
pub fn is_heading_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.kind == RowKind::Heading
}

/// Title cell: heading row over a data column.
pub fn is_heading_table_cell<R>(table_row: &TableRow<R>, table_column: &TableColumn) -> bool {
    table_row.kind == RowKind::Heading && table_column.kind == ColumnKind::Data
}

/// Row synthesized for an uncommitted new record.
pub fn is_added_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.kind == RowKind::Added
}

/// Row rendered with editors: an edited data row or an added row.
pub fn is_edit_table_row<R>(table_row: &TableRow<R>) -> bool {
    matches!(table_row.kind, RowKind::Edit | RowKind::Added)
}

/// Editor cell: edit or added row over a data column.
pub fn is_editing_table_cell<R>(table_row: &TableRow<R>, table_column: &TableColumn) -> bool {
    is_edit_table_row(table_row) && table_column.kind == ColumnKind::Data
}

/// Zero-height marker row owned by column reordering.
pub fn is_reordering_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.kind == RowKind::Reordering
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Column;
    use crate::table::RowId;

    fn data_row() -> TableRow<u32> {
        TableRow::data(RowId::Index(1), 10)
    }

    fn data_column() -> TableColumn {
        TableColumn::data(Column::new("a"))
    }

    fn stub_column() -> TableColumn {
        TableColumn::structural(ColumnKind::Custom("select"), Some(3))
    }

    #[test]
    fn test_data_cell_needs_data_row_and_column() {
        assert!(is_data_table_cell(&data_row(), &data_column()));
        assert!(!is_data_table_cell(&data_row(), &stub_column()));
        assert!(!is_data_table_cell(&TableRow::<u32>::heading(), &data_column()));
    }

    #[test]
    fn test_no_data_row() {
        assert!(is_no_data_table_row(&TableRow::<u32>::no_data()));
        assert!(!is_no_data_table_row(&data_row()));
        assert!(!is_data_table_row(&TableRow::<u32>::no_data()));
    }

    #[test]
    fn test_header_stub_matches_by_key() {
        let header_rows = vec![TableRow::<u32>::reordering(), TableRow::heading()];
        assert!(is_header_stub_table_cell(&TableRow::heading(), &header_rows));
        assert!(!is_header_stub_table_cell(&data_row(), &header_rows));
        assert!(!is_header_stub_table_cell(&TableRow::<u32>::heading(), &[]));
    }

    #[test]
    fn test_edit_predicates_cover_added_rows() {
        let added = TableRow::added(0, 5u32, Some(2));
        let mut edit = data_row();
        edit.kind = RowKind::Edit;

        assert!(is_edit_table_row(&added));
        assert!(is_edit_table_row(&edit));
        assert!(is_added_table_row(&added));
        assert!(!is_added_table_row(&edit));
        assert!(is_editing_table_cell(&edit, &data_column()));
        assert!(!is_editing_table_cell(&edit, &stub_column()));
    }

    #[test]
    fn test_unknown_tags_match_nothing() {
        let row = TableRow::<u32>::structural(RowKind::Custom("group"));
        assert!(!is_data_table_row(&row));
        assert!(!is_no_data_table_row(&row));
        assert!(!is_heading_table_row(&row));
        assert!(!is_edit_table_row(&row));
        assert!(!is_reordering_table_row(&row));
        assert!(!is_data_table_cell(&row, &data_column()));
    }
}
