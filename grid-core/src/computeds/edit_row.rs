use std::collections::HashSet;

use crate::table::{RowId, RowKind, TableRow};

/// Promote edited rows and prepend rows for added records.
///
/// Data rows whose id is in `editing_row_ids` become edit rows of
/// `row_height`; every other row is passed through as is. One added row per
/// entry of `added_rows` is synthesized (id = position in `added_rows`) and
/// the added rows are prepended newest first.
pub fn table_rows_with_editing<R: Clone>(
    table_rows: &[TableRow<R>],
    editing_row_ids: &[RowId],
    added_rows: &[R],
    row_height: u16,
) -> Vec<TableRow<R>> {
    let editing: HashSet<&RowId> = editing_row_ids.iter().collect();

    let added = added_rows
        .iter()
        .enumerate()
        .rev()
        .map(|(index, row)| TableRow::added(index, row.clone(), Some(row_height)));

    let edited = table_rows.iter().map(|table_row| {
        let is_editing = table_row.kind == RowKind::Data
            && table_row.row_id.as_ref().is_some_and(|id| editing.contains(id));
        if is_editing {
            TableRow {
                kind: RowKind::Edit,
                height: Some(row_height),
                ..table_row.clone()
            }
        } else {
            table_row.clone()
        }
    });

    let mut result = Vec::with_capacity(table_rows.len() + added_rows.len());
    result.extend(added);
    result.extend(edited);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<TableRow<&'static str>> {
        vec![
            TableRow::data(RowId::Index(0), "r0"),
            TableRow::data(RowId::Index(1), "r1"),
            TableRow::data(RowId::Index(2), "r2"),
        ]
    }

    #[test]
    fn test_row_count_grows_by_added() {
        let result = table_rows_with_editing(&rows(), &[], &["n0", "n1"], 2);
        assert_eq!(result.len(), 5);

        let result = table_rows_with_editing(&[], &[RowId::Index(0)], &["n0"], 2);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_editing_rows_are_promoted() {
        let input = rows();
        let result = table_rows_with_editing(&input, &[RowId::Index(1)], &[], 3);

        assert_eq!(result[1].kind, RowKind::Edit);
        assert_eq!(result[1].height, Some(3));
        assert_eq!(result[1].row_id, input[1].row_id);
        assert_eq!(result[1].row, input[1].row);
        assert_eq!(result[1].key, input[1].key);

        assert_eq!(result[0], input[0]);
        assert_eq!(result[2], input[2]);
    }

    #[test]
    fn test_only_data_rows_are_promoted() {
        let input = vec![TableRow::<&str>::no_data()];
        let result = table_rows_with_editing(&input, &[RowId::Index(0)], &[], 3);
        assert_eq!(result, input);
    }

    #[test]
    fn test_added_rows_newest_first() {
        let result = table_rows_with_editing(&rows(), &[], &["x0", "x1"], 2);

        assert_eq!(result[0].key, "added_1");
        assert_eq!(result[0].row, Some("x1"));
        assert_eq!(result[0].row_id, Some(RowId::Index(1)));
        assert_eq!(result[1].key, "added_0");
        assert_eq!(result[1].row, Some("x0"));
        assert_eq!(result[1].kind, RowKind::Added);
        assert_eq!(result[1].height, Some(2));
        assert_eq!(result[2].key, "data_0");
    }

    #[test]
    fn test_added_ids_may_collide_with_data_ids() {
        let result = table_rows_with_editing(&rows(), &[], &["x0"], 2);
        assert_eq!(result[0].row_id, result[1].row_id);
        assert_ne!(result[0].kind, result[1].kind);
    }
}
