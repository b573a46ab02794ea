use serde_json::Value;
use std::io;

use super::shape::{self, Grid, ResultShape};

/// Write the result as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        let broken_pipe = matches!(
            e.kind(),
            csv::ErrorKind::Io(err) if err.kind() == io::ErrorKind::BrokenPipe
        );
        if !broken_pipe {
            eprintln!("CSV output error: {}", e);
        }
    }
}

/// Flags get one row each, chart series one row per series with a column
/// per period, and the ratio board one row per metric. Other records fall
/// back to field/value pairs.
pub fn write_csv<W: io::Write>(out: W, value: &Value) -> csv::Result<()> {
    let grid = match ResultShape::of(value) {
        ResultShape::Flags(flags) => shape::flag_grid(flags),
        ResultShape::Chart(rows) => shape::chart_grid(rows),
        ResultShape::Board { metrics, .. } => shape::metric_grid(metrics),
        ResultShape::Rows(items) => shape::object_grid(items),
        ResultShape::Record(map) => shape::record_grid(map, false),
        ResultShape::Scalar(v) => Grid {
            header: Vec::new(),
            rows: vec![vec![shape::cell(v)]],
        },
    };

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(out);
    if !grid.header.is_empty() {
        wtr.write_record(&grid.header)?;
    }
    for row in &grid.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_flags_one_row_each() {
        let value = json!({
            "result": [{
                "name": "Cash-Backed Profits",
                "category": "Earnings",
                "type": "Green",
                "status": true,
                "value": "Ratio: 1.57",
                "threshold": "> 1.1",
                "logic": "OCF / Net Income = 1.57 (threshold > 1.1)",
                "description": "Operating Cash Flow exceeds Net Income."
            }],
            "warnings": []
        });
        assert_eq!(
            render(&value),
            "name,category,type,status,value,threshold\n\
             Cash-Backed Profits,Earnings,Green,true,Ratio: 1.57,> 1.1\n"
        );
    }

    #[test]
    fn test_chart_rows_become_period_columns() {
        let value = json!({
            "result": [
                { "year": "2022", "Revenue": 10.0 },
                { "year": "2023", "Revenue": 12.5 }
            ]
        });
        assert_eq!(render(&value), "series,2022,2023\nRevenue,10.0,12.5\n");
    }

    #[test]
    fn test_board_writes_metric_rows() {
        let value = json!({
            "result": {
                "period": "2023",
                "metrics": [{
                    "category": "Profitability & Margins",
                    "name": "Gross Margin",
                    "value": "40.00%",
                    "rawValue": 0.4,
                    "compareValue": "38.00%",
                    "trend": "up",
                    "change": "+2.00%"
                }]
            }
        });
        let out = render(&value);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("category,name,value,compareValue,trend,change"));
        assert_eq!(
            lines.next(),
            Some("Profitability & Margins,Gross Margin,40.00%,38.00%,up,+2.00%")
        );
    }

    #[test]
    fn test_record_and_scalar_fallbacks() {
        assert_eq!(
            render(&json!({ "cleared": true, "path": "s.json" })),
            "field,value\ncleared,true\npath,s.json\n"
        );
        assert_eq!(render(&json!("2.5")), "2.5\n");
    }
}
