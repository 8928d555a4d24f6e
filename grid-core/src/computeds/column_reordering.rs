use std::borrow::Cow;

use crate::table::{ColumnKind, TableColumn, TableRow};

/// Order data columns by their position in `order`.
///
/// Structural columns stay where they are. Data columns are stably sorted
/// among the slots data columns occupy; names missing from `order` sort
/// before every ordered name and keep their relative order. Duplicate names
/// in `order` resolve to their first occurrence.
pub fn ordered_columns<S: AsRef<str>>(table_columns: &[TableColumn], order: &[S]) -> Vec<TableColumn> {
    let position = |name: &str| order.iter().position(|entry| entry.as_ref() == name);

    let mut data_columns: Vec<&TableColumn> = table_columns
        .iter()
        .filter(|column| column.kind == ColumnKind::Data)
        .collect();
    // Stable: equal keys keep input order. `None` sorts before any `Some`.
    data_columns.sort_by_key(|column| column.name().and_then(position));

    let mut data_columns = data_columns.into_iter();
    table_columns
        .iter()
        .map(|column| match column.kind {
            ColumnKind::Data => data_columns.next().unwrap_or(column).clone(),
            ColumnKind::Custom(_) => column.clone(),
        })
        .collect()
}

/// Prepend the zero-height reordering marker to the header rows.
///
/// The marker is added on every call; callers add it at most once per chain.
pub fn table_header_rows_with_reordering<R: Clone>(header_rows: &[TableRow<R>]) -> Vec<TableRow<R>> {
    let mut result = Vec::with_capacity(header_rows.len() + 1);
    result.push(TableRow::reordering());
    result.extend_from_slice(header_rows);
    result
}

/// The order after moving the entry at `source` to `target`.
///
/// `None` marks an index that could not be resolved. A missing index, an
/// out-of-range source or `source == target` leaves the order untouched and
/// borrows it back. The source entry is removed before it is re-inserted, so
/// for `target > source` the entry lands at `target` of the shortened list.
pub fn draft_order<T: Clone>(order: &[T], source: Option<usize>, target: Option<usize>) -> Cow<'_, [T]> {
    let (Some(source), Some(target)) = (source, target) else {
        return Cow::Borrowed(order);
    };
    if source == target || source >= order.len() {
        return Cow::Borrowed(order);
    }

    let mut result = order.to_vec();
    let entry = result.remove(source);
    let target = target.min(result.len());
    result.insert(target, entry);

    Cow::Owned(result)
}
