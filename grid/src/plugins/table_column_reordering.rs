//! User-defined column order with drag-and-drop drafts.

use std::borrow::Cow;
use std::sync::Arc;

use grid_core::{
    draft_order, is_reordering_table_row, ordered_columns, table_header_rows_with_reordering,
};
use log::{debug, warn};

use crate::error::GetterError;
use crate::getters::Getters;
use crate::plugin::Plugin;
use crate::template::{RowArgs, RowRenderer, RowTemplate, TemplateContext, Templates};

/// Orders data columns by column name and tracks an in-progress reorder.
///
/// While a drag is in progress the draft order is displayed instead of the
/// committed one. The plugin also prepends a zero-height marker row to the
/// header rows. The marker never carries cells: by default it goes to the
/// table view's row renderer with no children, and a dedicated template can
/// be set with [`marker_template`](Self::marker_template).
pub struct TableColumnReordering<R, N> {
    order: Vec<String>,
    draft: Option<Vec<String>>,
    marker: Option<RowRenderer<R, N>>,
}

impl<R, N> TableColumnReordering<R, N> {
    pub fn new<S: Into<String>>(order: impl IntoIterator<Item = S>) -> Self {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            draft: None,
            marker: None,
        }
    }

    /// Render the reordering marker row with a dedicated template.
    pub fn marker_template(
        mut self,
        marker: impl Fn(RowArgs<'_, R, N>) -> N + Send + Sync + 'static,
    ) -> Self {
        self.marker = Some(Arc::new(marker));
        self
    }

    /// The committed order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The draft order, while a reorder is in progress.
    pub fn draft(&self) -> Option<&[String]> {
        self.draft.as_deref()
    }

    /// The order currently displayed: the draft if any, else the committed one.
    pub fn effective_order(&self) -> &[String] {
        self.draft.as_deref().unwrap_or(&self.order)
    }

    /// Replace the committed order and drop any draft.
    pub fn set_order<S: Into<String>>(&mut self, order: impl IntoIterator<Item = S>) {
        self.order = order.into_iter().map(Into::into).collect();
        self.draft = None;
    }

    /// Draft moving the column `source` to where `target` currently is.
    ///
    /// Names not present in the displayed order leave the draft unchanged.
    /// Returns whether the draft changed.
    pub fn draft_move(&mut self, source: &str, target: &str) -> bool {
        let current = self.effective_order();
        let position = |name: &str| current.iter().position(|entry| entry == name);
        let (source_index, target_index) = (position(source), position(target));

        if source_index.is_none() || target_index.is_none() {
            warn!("Ignoring column move '{}' -> '{}': column not in order", source, target);
        }

        match draft_order(current, source_index, target_index) {
            Cow::Borrowed(_) => false,
            Cow::Owned(draft) => {
                debug!("Drafted column order {:?}", draft);
                self.draft = Some(draft);
                true
            }
        }
    }

    /// Make the draft the committed order. Returns whether there was a draft.
    pub fn commit_draft(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.order = draft;
                true
            }
            None => false,
        }
    }

    /// Drop the draft, keeping the committed order.
    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }
}

impl<R, N> Plugin<R, N> for TableColumnReordering<R, N>
where
    R: Clone + Send + Sync + 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "TableColumnReordering"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["TableView"]
    }

    fn register(&self, templates: &mut Templates<R, N>) {
        let marker: RowTemplate<R, N> = match (&self.marker, templates.fallback_row()) {
            (Some(marker), _) => {
                let marker = Arc::clone(marker);
                Arc::new(move |args: RowArgs<'_, R, N>, _: &TemplateContext<'_, R, N>| {
                    marker(RowArgs {
                        children: Vec::new(),
                        ..args
                    })
                })
            }
            (None, Some(fallback)) => Arc::new(move |args: RowArgs<'_, R, N>, cx: &TemplateContext<'_, R, N>| {
                fallback(
                    RowArgs {
                        children: Vec::new(),
                        ..args
                    },
                    cx,
                )
            }),
            (None, None) => return,
        };
        templates.row_when(Arc::new(is_reordering_table_row::<R>), marker);
    }

    fn compute(&self, getters: &mut Getters<R>) -> Result<(), GetterError> {
        let table_columns = ordered_columns(getters.table_columns()?, self.effective_order());
        let table_header_rows = table_header_rows_with_reordering(getters.table_header_rows()?);

        getters.set_table_columns(table_columns);
        getters.set_table_header_rows(table_header_rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin(order: &[&str]) -> TableColumnReordering<(), ()> {
        TableColumnReordering::new(order.iter().copied())
    }

    #[test]
    fn test_draft_is_displayed_until_committed() {
        let mut reordering = plugin(&["a", "b", "c"]);

        assert!(reordering.draft_move("a", "c"));
        assert_eq!(reordering.order(), ["a", "b", "c"]);
        assert_eq!(reordering.effective_order(), ["b", "c", "a"]);

        assert!(reordering.commit_draft());
        assert_eq!(reordering.order(), ["b", "c", "a"]);
        assert_eq!(reordering.draft(), None);
        assert!(!reordering.commit_draft());
    }

    #[test]
    fn test_draft_builds_on_draft() {
        let mut reordering = plugin(&["a", "b", "c", "d"]);
        reordering.draft_move("d", "a");
        reordering.draft_move("c", "d");
        assert_eq!(reordering.effective_order(), ["c", "d", "a", "b"]);
    }

    #[test]
    fn test_invalid_moves_keep_state() {
        let mut reordering = plugin(&["a", "b"]);
        assert!(!reordering.draft_move("a", "a"));
        assert!(!reordering.draft_move("x", "a"));
        assert!(!reordering.draft_move("a", "y"));
        assert_eq!(reordering.draft(), None);
    }

    #[test]
    fn test_cancel_draft() {
        let mut reordering = plugin(&["a", "b"]);
        reordering.draft_move("b", "a");
        reordering.cancel_draft();
        assert_eq!(reordering.effective_order(), ["a", "b"]);
    }

    #[test]
    fn test_set_order_drops_draft() {
        let mut reordering = plugin(&["a", "b", "c"]);
        reordering.draft_move("c", "a");
        reordering.set_order(["c", "b", "a"]);

        assert_eq!(reordering.draft(), None);
        assert_eq!(reordering.effective_order(), ["c", "b", "a"]);
    }
}
