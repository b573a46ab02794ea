use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::shape::{self, Grid, ResultShape};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match ResultShape::of(value) {
        ResultShape::Flags(flags) => print_grid(&shape::flag_grid(flags)),
        ResultShape::Chart(rows) => print_grid(&shape::chart_grid(rows)),
        ResultShape::Rows(items) => print_grid(&shape::object_grid(items)),
        ResultShape::Board { record, .. } | ResultShape::Record(record) => print_record(record),
        ResultShape::Scalar(v) => println!("{}", shape::cell(v)),
    }

    if let Some(envelope) = value.as_object() {
        print_notes(envelope);
    }
}

/// Scalar fields first, then each list as its own table.
fn print_record(map: &Map<String, Value>) {
    print_grid(&shape::record_grid(map, true));
    for (key, grid) in shape::nested_lists(map) {
        println!("\n{}:", key);
        print_grid(&grid);
    }
}

fn print_grid(grid: &Grid) {
    if grid.is_empty() {
        println!("(empty)");
        return;
    }
    let mut builder = Builder::default();
    if !grid.header.is_empty() {
        builder.push_record(grid.header.clone());
    }
    for row in &grid.rows {
        builder.push_record(row.clone());
    }
    println!("{}", Table::from(builder));
}

fn print_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
