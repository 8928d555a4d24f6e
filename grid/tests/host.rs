mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{columns, host_with, init_logging, records, templates};
use grid::prelude::*;
use grid::{GetterError, GetterName};
use grid_core::{ColumnKind, TableColumn};

/// Appends a structural column, recording how often it computed.
struct Marker {
    name: &'static str,
    computed: Arc<AtomicUsize>,
}

impl Plugin<Record, String> for Marker {
    fn name(&self) -> &'static str {
        self.name
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["TableView"]
    }

    fn singleton(&self) -> bool {
        false
    }

    fn compute(&self, getters: &mut Getters<Record>) -> Result<(), GetterError> {
        self.computed.fetch_add(1, Ordering::SeqCst);
        let mut table_columns = getters.table_columns()?.to_vec();
        table_columns.push(TableColumn::structural(ColumnKind::Custom(self.name), Some(1)));
        getters.set_table_columns(table_columns);
        Ok(())
    }
}

fn marker(name: &'static str) -> (Marker, Arc<AtomicUsize>) {
    let computed = Arc::new(AtomicUsize::new(0));
    (
        Marker {
            name,
            computed: Arc::clone(&computed),
        },
        computed,
    )
}

/// Reads a getter nobody provides.
struct NeedsRows;

impl Plugin<Record, String> for NeedsRows {
    fn name(&self) -> &'static str {
        "NeedsRows"
    }

    fn compute(&self, getters: &mut Getters<Record>) -> Result<(), GetterError> {
        getters.rows()?;
        Ok(())
    }
}

fn column_keys(host: &mut PluginHost<Record, String>) -> Vec<String> {
    host.resolve()
        .unwrap()
        .table_columns()
        .unwrap()
        .iter()
        .map(|column| column.key.clone())
        .collect()
}

#[test]
fn test_plugins_see_previous_output_in_registration_order() {
    init_logging();
    let (first, _) = marker("first");
    let (second, _) = marker("second");
    let mut host = host_with(records());
    host.add(first).unwrap();
    host.add(second).unwrap();

    assert_eq!(
        column_keys(&mut host),
        vec!["data_name", "data_city", "data_amount", "first", "second"]
    );
    assert_eq!(
        host.plugin_names(),
        vec!["Grid", "TableView", "first", "second"]
    );
}

#[test]
fn test_missing_dependency_is_rejected() {
    let result = PluginHost::<Record, String>::new()
        .with(GridCore::new(records(), columns()))
        .unwrap()
        .with(TableColumnReordering::new(["name"]));

    let Err(error) = result else {
        panic!("reordering without table view must fail");
    };
    assert_eq!(
        error,
        PluginError::MissingDependency {
            plugin: "TableColumnReordering",
            dependency: "TableView",
        }
    );
    assert_eq!(
        error.to_string(),
        "the TableColumnReordering plugin requires 'TableView' to be defined before it"
    );
}

#[test]
fn test_duplicate_singleton_is_rejected() {
    let mut host = host_with(records());
    let result = host.add(TableView::new(templates()));

    assert_eq!(result, Err(PluginError::Duplicate("TableView")));
    assert_eq!(host.plugin_names(), vec!["Grid", "TableView"]);
}

#[test]
fn test_multiple_data_type_providers() {
    let mut host = host_with(records());
    host.add(DataTypeProvider::new("currency", |_: FormatterArgs<'_, Record>| "$".to_string()))
        .unwrap();
    host.add(DataTypeProvider::new("date", |_: FormatterArgs<'_, Record>| "d".to_string()))
        .unwrap();

    assert!(host.templates().formatter("currency").is_some());
    assert!(host.templates().formatter("date").is_some());
}

#[test]
fn test_unresolved_getter_reports_plugin() {
    let mut host = PluginHost::<Record, String>::new().with(NeedsRows).unwrap();
    let error = host.resolve().unwrap_err();

    assert_eq!(
        error,
        PluginError::Compute {
            plugin: "NeedsRows",
            source: GetterError::Unresolved(GetterName::Rows),
        }
    );
}

#[test]
fn test_render_requires_table_getters() {
    let mut host = PluginHost::<Record, String>::new()
        .with(GridCore::new(records(), columns()))
        .unwrap();

    assert!(host.render(table_layout).is_err());
}

#[test]
fn test_resolution_is_cached_until_state_changes() {
    let (counting, computed) = marker("counting");
    let mut host = host_with(records());
    host.add(counting).unwrap();

    let first = host.resolve().unwrap();
    let second = host.resolve().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(computed.load(Ordering::SeqCst), 1);

    host.plugin_mut::<GridCore<Record>>()
        .unwrap()
        .set_rows(Vec::new());
    let third = host.resolve().unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(computed.load(Ordering::SeqCst), 2);
    assert_eq!(third.table_body_rows().unwrap().len(), 1);
}

#[test]
fn test_recomputation_is_structurally_identical() {
    let mut host = host_with(records());
    let first = host.resolve().unwrap();
    host.invalidate();
    let second = host.resolve().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.table_body_rows().unwrap(), second.table_body_rows().unwrap());
    assert_eq!(first.table_columns().unwrap(), second.table_columns().unwrap());
}

#[test]
fn test_typed_plugin_lookup() {
    let host = host_with(records());

    assert_eq!(host.plugin::<GridCore<Record>>().unwrap().rows().len(), 2);
    assert!(host.plugin::<TableEditRow<Record, String>>().is_none());
}

#[test]
fn test_accessor_based_rows() {
    let mut host = PluginHost::<(u32, &'static str), String>::new()
        .with(
            GridCore::with_accessor(
                vec![(10, "a"), (20, "b")],
                vec![Column::new("label")],
                |row: &(u32, &'static str), _: &Column| CellValue::from(row.1),
            )
            .row_id(|row| RowId::Index(row.0 as usize)),
        )
        .unwrap()
        .with(TableView::new(TableViewTemplates {
            cell: Arc::new(|args: CellArgs<'_, (u32, &'static str), String>| {
                args.value.map(|value| value.to_string()).unwrap_or_default()
            }),
            stub_cell: Arc::new(|_: CellArgs<'_, (u32, &'static str), String>| String::new()),
            stub_header_cell: Arc::new(|_: CellArgs<'_, (u32, &'static str), String>| String::new()),
            no_data_cell: Arc::new(|_: NoDataCellArgs<'_, (u32, &'static str)>| String::new()),
            row: Arc::new(|args: RowArgs<'_, (u32, &'static str), String>| {
                format!("{}:{}", args.table_row.key, args.children.concat())
            }),
            no_data_row: Arc::new(|_: RowArgs<'_, (u32, &'static str), String>| String::new()),
        }))
        .unwrap();

    let lines = host.render(table_layout).unwrap();
    assert_eq!(lines, vec!["data_10:a", "data_20:b"]);
}
