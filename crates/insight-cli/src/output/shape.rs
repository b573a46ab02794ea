//! Result shapes and their tabular layout.
//!
//! Every command returns JSON; the table and CSV writers both classify the
//! payload here and render the same [`Grid`].

use serde_json::{Map, Value};

const FLAG_COLUMNS: [&str; 6] = ["name", "category", "type", "status", "value", "threshold"];
const METRIC_COLUMNS: [&str; 6] = ["category", "name", "value", "compareValue", "trend", "change"];

/// What a command produced, looked up under the envelope's `result`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultShape<'a> {
    /// Forensic flag results.
    Flags(&'a [Value]),
    /// Chart rows keyed by `year`.
    Chart(&'a [Value]),
    /// Ratio board; its metric list is pulled out of the record.
    Board {
        record: &'a Map<String, Value>,
        metrics: &'a [Value],
    },
    Rows(&'a [Value]),
    Record(&'a Map<String, Value>),
    Scalar(&'a Value),
}

impl<'a> ResultShape<'a> {
    pub fn of(value: &'a Value) -> Self {
        let result = value
            .as_object()
            .and_then(|m| m.get("result"))
            .unwrap_or(value);
        match result {
            Value::Array(items) => Self::of_list(items),
            Value::Object(map) => match map.get("metrics") {
                Some(Value::Array(metrics)) => ResultShape::Board { record: map, metrics },
                _ => ResultShape::Record(map),
            },
            other => ResultShape::Scalar(other),
        }
    }

    pub fn of_list(items: &'a [Value]) -> Self {
        match items.first() {
            Some(first) if is_flag(first) => ResultShape::Flags(items),
            Some(first) if first.get("year").is_some_and(Value::is_string) => {
                ResultShape::Chart(items)
            }
            _ => ResultShape::Rows(items),
        }
    }
}

fn is_flag(item: &Value) -> bool {
    ["type", "status", "threshold"]
        .iter()
        .all(|k| item.get(k).is_some())
}

/// Header plus rows of display cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    fn with_header<S: AsRef<str>>(header: &[S]) -> Self {
        Grid {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn columns(items: &[Value], columns: &[&str]) -> Self {
        let mut grid = Grid::with_header(columns);
        grid.rows = items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|c| item.get(c).map(cell).unwrap_or_default())
                    .collect()
            })
            .collect();
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row per flag, fixed columns.
pub fn flag_grid(flags: &[Value]) -> Grid {
    Grid::columns(flags, &FLAG_COLUMNS)
}

/// One row per board metric with its comparison column.
pub fn metric_grid(metrics: &[Value]) -> Grid {
    Grid::columns(metrics, &METRIC_COLUMNS)
}

/// Series down the side, periods across the top.
pub fn chart_grid(rows: &[Value]) -> Grid {
    let years: Vec<String> = rows
        .iter()
        .map(|r| r.get("year").map(cell).unwrap_or_default())
        .collect();

    let mut series: Vec<&str> = Vec::new();
    for row in rows.iter().filter_map(Value::as_object) {
        for key in row.keys().filter(|k| k.as_str() != "year") {
            if !series.contains(&key.as_str()) {
                series.push(key);
            }
        }
    }

    let mut header = vec!["series".to_string()];
    header.extend(years);
    Grid {
        header,
        rows: series
            .iter()
            .map(|name| {
                let mut line = vec![name.to_string()];
                line.extend(rows.iter().map(|r| r.get(*name).map(cell).unwrap_or_default()));
                line
            })
            .collect(),
    }
}

/// Columns from the first object's keys; plain values get a single column.
pub fn object_grid(items: &[Value]) -> Grid {
    match items.first() {
        Some(Value::Object(first)) => {
            let columns: Vec<&str> = first.keys().map(String::as_str).collect();
            Grid::columns(items, &columns)
        }
        Some(_) => Grid {
            header: vec!["value".to_string()],
            rows: items.iter().map(|v| vec![cell(v)]).collect(),
        },
        None => Grid::default(),
    }
}

/// Field/value pairs. With `skip_lists`, lists of objects are left for the
/// caller to render as their own grids (see [`nested_lists`]).
pub fn record_grid(map: &Map<String, Value>, skip_lists: bool) -> Grid {
    let mut grid = Grid::with_header(&["field", "value"]);
    grid.rows = map
        .iter()
        .filter(|(_, v)| !(skip_lists && is_object_list(v)))
        .map(|(k, v)| vec![k.clone(), cell(v)])
        .collect();
    grid
}

/// Lists of objects inside a record, each laid out by its own shape.
pub fn nested_lists(map: &Map<String, Value>) -> Vec<(&str, Grid)> {
    map.iter()
        .filter_map(|(key, v)| match v {
            Value::Array(items) if is_object_list(v) => {
                Some((key.as_str(), list_grid(key, items)))
            }
            _ => None,
        })
        .collect()
}

fn list_grid(key: &str, items: &[Value]) -> Grid {
    if key == "metrics" {
        return metric_grid(items);
    }
    match ResultShape::of_list(items) {
        ResultShape::Flags(flags) => flag_grid(flags),
        ResultShape::Chart(rows) => chart_grid(rows),
        _ => object_grid(items),
    }
}

fn is_object_list(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.first().is_some_and(Value::is_object))
}

/// Display text of one value. Nulls are blank.
pub fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn flag(name: &str, status: bool) -> Value {
        json!({
            "name": name,
            "category": "Debt",
            "type": "Red",
            "status": status,
            "value": "Ratio: 1.20",
            "threshold": "> 1.0",
            "logic": "x",
            "description": "y"
        })
    }

    #[test]
    fn test_shape_of_envelopes() {
        let flags = json!({ "result": [flag("High Debt", true)], "warnings": [] });
        assert!(matches!(ResultShape::of(&flags), ResultShape::Flags(f) if f.len() == 1));

        let chart = json!({ "result": [{ "year": "2023", "Cash": 1.5 }] });
        assert!(matches!(ResultShape::of(&chart), ResultShape::Chart(_)));

        let board = json!({ "result": { "period": "2023", "metrics": [] } });
        assert!(matches!(
            ResultShape::of(&board),
            ResultShape::Board { metrics, .. } if metrics.is_empty()
        ));

        let saved = json!({ "path": "s.json", "cleared": true });
        assert!(matches!(ResultShape::of(&saved), ResultShape::Record(_)));

        let kinds = json!(["growth", "dupont"]);
        assert!(matches!(ResultShape::of(&kinds), ResultShape::Rows(_)));
        assert!(matches!(ResultShape::of(&json!(3)), ResultShape::Scalar(_)));
    }

    #[test]
    fn test_flag_grid_has_fixed_columns() {
        let grid = flag_grid(&[flag("A", true), flag("B", false)]);
        assert_eq!(grid.header, FLAG_COLUMNS.map(String::from).to_vec());
        assert_eq!(grid.rows[1], vec!["B", "Debt", "Red", "false", "Ratio: 1.20", "> 1.0"]);
    }

    #[test]
    fn test_chart_grid_puts_periods_across() {
        let rows = [
            json!({ "year": "2022", "Cash": 1.0, "Debt": 2.0 }),
            json!({ "year": "2023", "Cash": 3.0, "Debt": 4.5 }),
        ];
        let grid = chart_grid(&rows);
        assert_eq!(grid.header, vec!["series", "2022", "2023"]);
        assert_eq!(grid.rows, vec![vec!["Cash", "1.0", "3.0"], vec!["Debt", "2.0", "4.5"]]);
    }

    #[test]
    fn test_record_grid_leaves_lists_to_nested() {
        let record = json!({
            "period": "2023",
            "available_periods": ["2023", "2022"],
            "metrics": [{ "category": "Growth", "name": "ROE", "value": "12.00%",
                          "compareValue": "10.00%", "trend": "up", "change": "+2.00" }]
        });
        let map = record.as_object().unwrap();
        let grid = record_grid(map, true);
        assert_eq!(
            grid.rows,
            vec![vec!["available_periods", "2023, 2022"], vec!["period", "2023"]]
        );
        let nested = nested_lists(map);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].0, "metrics");
        assert_eq!(nested[0].1.rows[0][3], "10.00%");
        assert_eq!(record_grid(map, false).rows.len(), 3);
    }
}
