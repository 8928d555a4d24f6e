use crate::column::Column;
use crate::table::{RowId, TableColumn, TableRow};

/// One data column per raw column, in the raw order.
pub fn table_columns_with_data_rows(columns: &[Column]) -> Vec<TableColumn> {
    columns.iter().cloned().map(TableColumn::data).collect()
}

/// One data row per raw row, or a single no-data row when there are none.
///
/// `get_row_id` receives the row's position alongside the row so callers can
/// fall back to positional identity.
pub fn table_rows_with_data_rows<R, F>(rows: &[R], get_row_id: F) -> Vec<TableRow<R>>
where
    R: Clone,
    F: Fn(usize, &R) -> RowId,
{
    if rows.is_empty() {
        return vec![TableRow::no_data()];
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| TableRow::data(get_row_id(index, row), row.clone()))
        .collect()
}

/// Identity of every row: the application ids when every row has one, else
/// every row's position.
///
/// Falling back per row would let a positional id and an application id with
/// the same string form produce the same row key.
pub fn row_ids_or_positions<R, F>(rows: &[R], get_row_id: F) -> Vec<RowId>
where
    F: Fn(&R) -> Option<RowId>,
{
    rows.iter()
        .map(get_row_id)
        .collect::<Option<Vec<_>>>()
        .unwrap_or_else(|| (0..rows.len()).map(RowId::Index).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnKind, RowKind};

    #[test]
    fn test_columns_wrap_in_order() {
        let columns = vec![Column::new("a").width(4), Column::new("b")];
        let table_columns = table_columns_with_data_rows(&columns);

        assert_eq!(table_columns.len(), 2);
        assert_eq!(table_columns[0].key, "data_a");
        assert_eq!(table_columns[0].kind, ColumnKind::Data);
        assert_eq!(table_columns[0].width, Some(4));
        assert_eq!(table_columns[1].column.as_ref(), Some(&columns[1]));
    }

    #[test]
    fn test_rows_carry_ids() {
        let rows = vec!["x", "y"];
        let table_rows = table_rows_with_data_rows(&rows, |_, row| RowId::from(*row));

        assert_eq!(table_rows.len(), 2);
        assert_eq!(table_rows[0].key, "data_x");
        assert_eq!(table_rows[1].row_id, Some(RowId::from("y")));
        assert_eq!(table_rows[1].row, Some("y"));
    }

    #[test]
    fn test_positional_ids() {
        let rows = vec![7u8, 9];
        let table_rows = table_rows_with_data_rows(&rows, |index, _| index.into());
        assert_eq!(table_rows[1].row_id, Some(RowId::Index(1)));
        assert_eq!(table_rows[1].key, "data_1");
    }

    #[test]
    fn test_ids_fall_back_to_positions_for_the_whole_set() {
        let all_keyed = row_ids_or_positions(&["a", "b"], |row| Some(RowId::from(*row)));
        assert_eq!(all_keyed, vec![RowId::from("a"), RowId::from("b")]);

        let mixed = row_ids_or_positions(&[Some("1"), None], |row| row.map(RowId::from));
        assert_eq!(mixed, vec![RowId::Index(0), RowId::Index(1)]);

        let ids = mixed;
        let table_rows = table_rows_with_data_rows(&[7u8, 9], |index, _| ids[index].clone());
        assert_ne!(table_rows[0].key, table_rows[1].key);
    }

    #[test]
    fn test_empty_rows_yield_no_data_row() {
        let table_rows = table_rows_with_data_rows::<u8, _>(&[], |index, _| index.into());

        assert_eq!(table_rows.len(), 1);
        assert_eq!(table_rows[0].kind, RowKind::NoData);
        assert_eq!(table_rows[0].row_id, None);
    }
}
