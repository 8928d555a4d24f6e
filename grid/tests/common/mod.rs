#![allow(dead_code)]

use std::sync::Arc;

use grid::prelude::*;
use grid::{CellRenderer, NoDataCellArgs, RowRenderer};
use grid_core::messages::NO_DATA;

pub fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name").title("Name"),
        Column::new("city"),
        Column::new("amount").data_type("currency").width(10),
    ]
}

pub fn records() -> Vec<Record> {
    vec![
        Record::with_id("r1")
            .set("name", "Ada")
            .set("city", "London")
            .set("amount", 12i64),
        Record::with_id("r2")
            .set("name", "Linus")
            .set("city", "Helsinki")
            .set("amount", 7i64),
    ]
}

fn describe_cell(tag: &str, args: &CellArgs<'_, Record, String>) -> String {
    let column = args.column.map(|column| column.name.as_str()).unwrap_or("-");
    let row = args
        .row
        .and_then(|row| row.id.as_deref())
        .unwrap_or("-");
    let value = args.value.as_ref().map(ToString::to_string).unwrap_or_default();
    let children = args.children.as_deref().unwrap_or("-");
    format!("{tag}({}|{}|{row}|{column}|{value}|{children})", args.table_row.key, args.table_column.key)
}

pub fn cell_renderer(tag: &'static str) -> CellRenderer<Record, String> {
    Arc::new(move |args: CellArgs<'_, Record, String>| describe_cell(tag, &args))
}

pub fn row_renderer(tag: &'static str) -> RowRenderer<Record, String> {
    Arc::new(move |args: RowArgs<'_, Record, String>| {
        let row = args.row.and_then(|row| row.id.as_deref()).unwrap_or("-");
        format!("{tag}({}|{row})[{}]", args.table_row.key, args.children.join(" "))
    })
}

pub fn templates() -> TableViewTemplates<Record, String> {
    TableViewTemplates {
        cell: cell_renderer("cell"),
        stub_cell: cell_renderer("stub"),
        stub_header_cell: cell_renderer("stub_header"),
        no_data_cell: Arc::new(|args: NoDataCellArgs<'_, Record>| {
            format!("no_data({}|{})", (args.get_message)(NO_DATA), args.col_span)
        }),
        row: row_renderer("row"),
        no_data_row: row_renderer("no_data_row"),
    }
}

pub fn host_with(records: Vec<Record>) -> PluginHost<Record, String> {
    PluginHost::new()
        .with(GridCore::new(records, columns()))
        .and_then(|host| host.with(TableView::new(templates())))
        .expect("grid and table view register")
}
