use serde::Serialize;
use serde_json::{Map, Value};
use std::io::IsTerminal;

use crate::cli::OutputFormat;

pub mod report;
pub mod table;

/// A command response that can be shown in every output format.
pub trait Rendered: Serialize {
    /// Human-readable form. `quiet` drops everything but violations.
    fn text(&self, quiet: bool) -> String;

    /// One JSON object per table row.
    fn table_rows(&self) -> Vec<Value>;
}

/// Render a response to a string in the requested format.
pub fn render<T: Rendered>(value: &T, format: OutputFormat, quiet: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.text(quiet)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_array_table(&value.table_rows(), table_options())),
    }
}

/// Print a response in the requested format.
pub fn output<T: Rendered>(value: &T, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    let rendered = render(value, format, quiet)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end_matches('\n'));
    }
    Ok(())
}

fn table_options() -> table::TableOptions {
    let terminal = std::io::stdout().is_terminal();
    table::TableOptions {
        max_width: terminal
            .then(|| std::env::var("COLUMNS").ok()?.parse().ok())
            .flatten(),
        color: terminal,
    }
}

/// Lay out JSON objects as table rows; columns follow first-seen key order.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    let objects: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();
    if objects.is_empty() {
        return String::from("(no rows)");
    }

    let mut columns: Vec<&str> = Vec::new();
    for key in objects.iter().flat_map(|object| object.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }

    let rows: Vec<Vec<String>> = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|column| object.get(*column).map_or_else(|| "-".to_string(), cell))
                .collect()
        })
        .collect();

    table::render_table(&columns, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
