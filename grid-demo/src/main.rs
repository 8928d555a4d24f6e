//! Renders a small grid to plain text lines.
//!
//! Usage: `grid-demo [config.json]`. The config is a [`GridConfig`] document,
//! e.g. `{"messages": {"noData": "Nothing here"}, "edit_row_height": 2}`.

use std::error::Error;
use std::fs::{self, File};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use grid::prelude::*;
use grid_core::messages::NO_DATA;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

fn pad(text: &str, style: Style) -> String {
    let width = usize::from(style.width.unwrap_or(12));
    format!("{text:<width$.width$}")
}

fn text_cell(args: CellArgs<'_, Record, String>) -> String {
    let text = args
        .children
        .or_else(|| args.value.map(|value| value.to_string()))
        .unwrap_or_default();
    pad(&text, args.style)
}

fn templates() -> TableViewTemplates<Record, String> {
    TableViewTemplates {
        cell: Arc::new(text_cell),
        stub_cell: Arc::new(|args: CellArgs<'_, Record, String>| pad("", args.style)),
        stub_header_cell: Arc::new(|args: CellArgs<'_, Record, String>| pad("", args.style)),
        no_data_cell: Arc::new(|args: NoDataCellArgs<'_, Record>| (args.get_message)(NO_DATA)),
        row: Arc::new(|args: RowArgs<'_, Record, String>| args.children.join(" | ")),
        no_data_row: Arc::new(|args: RowArgs<'_, Record, String>| args.children.concat()),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("product").title("Product").width(14),
        Column::new("region").title("Region").width(8),
        Column::new("amount").title("Amount").data_type("currency").width(10),
        Column::new("shipped").title("Shipped").data_type("date").width(10),
    ]
}

fn records() -> Vec<Record> {
    let shipped_on = |day| Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).single();
    vec![
        Record::with_id("1")
            .set("product", "Keyboard")
            .set("region", "EU")
            .set("amount", 49.5)
            .set("shipped", shipped_on(4)),
        Record::with_id("2")
            .set("product", "Monitor")
            .set("region", "US")
            .set("amount", 219.0)
            .set("shipped", shipped_on(11)),
        Record::with_id("3")
            .set("product", "Cable")
            .set("region", "APAC")
            .set("amount", 7i64),
    ]
}

fn currency(args: FormatterArgs<'_, Record>) -> String {
    match args.value {
        Some(CellValue::Float(amount)) => format!("${amount:.2}"),
        Some(CellValue::Int(amount)) => format!("${amount}.00"),
        _ => String::new(),
    }
}

fn date(args: FormatterArgs<'_, Record>) -> String {
    match args.value {
        Some(CellValue::DateTime(at)) => at.format("%Y-%m-%d").to_string(),
        _ => "-".to_string(),
    }
}

fn build_host(config: &GridConfig) -> Result<PluginHost<Record, String>, PluginError> {
    PluginHost::new()
        .with(GridCore::new(records(), columns()))?
        .with(TableView::new(templates()).with_config(config))?
        .with(DataTypeProvider::new("currency", currency))?
        .with(DataTypeProvider::new("date", date))?
        .with(TableHeaderRow::new(|args: CellArgs<'_, Record, String>| {
            let title = args.column.map(Column::display_title).unwrap_or_default();
            pad(title, args.style)
        }))?
        .with(TableColumnReordering::new(["product", "amount", "region", "shipped"]))?
        .with(
            TableEditRow::new(
                |args: CellArgs<'_, Record, String>| {
                    let text = args.value.map(|value| value.to_string()).unwrap_or_default();
                    let inner = args.style.width.unwrap_or(12).saturating_sub(2);
                    format!("[{}]", pad(&text, Style::new().width(Some(inner))))
                },
                |args: RowArgs<'_, Record, String>| format!("{} *", args.children.join(" | ")),
            )
            .with_config(config),
        )
}

fn print(title: &str, host: &mut PluginHost<Record, String>) -> Result<(), PluginError> {
    println!("== {title}");
    // The reordering marker renders as an empty line.
    for line in host.render(table_layout)?.iter().filter(|line| !line.is_empty()) {
        println!("{line}");
    }
    println!();
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading grid config from {}", path);
            GridConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => GridConfig::default(),
    };

    let mut host = build_host(&config)?;
    info!("Plugins: {:?}", host.plugin_names());
    print("Initial", &mut host)?;

    if let Some(reordering) = host.plugin_mut::<TableColumnReordering<Record, String>>() {
        reordering.draft_move("shipped", "product");
        reordering.commit_draft();
    }
    if let Some(editing) = host.plugin_mut::<TableEditRow<Record, String>>() {
        editing.start_editing(RowId::from("2"));
        editing.add_row(Record::new().set("product", "Mouse"));
    }
    print("Reordered, editing", &mut host)?;

    if let Some(core) = host.plugin_mut::<GridCore<Record>>() {
        core.set_rows(Vec::new());
    }
    print("Empty", &mut host)?;

    Ok(())
}

fn main() {
    match File::create("grid-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
