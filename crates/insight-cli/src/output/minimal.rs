use serde_json::Value;

/// Headline fields, most telling first.
const PRIORITY_KEYS: [&str; 6] =
    ["roe", "period", "company_name", "fiscal_year", "saved_at", "path"];

/// Print just the key answer value from the output.
///
/// Objects print their first priority field (or their first field); arrays
/// print one line per element using each element's name.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result_obj {
        Value::Object(map) => {
            for key in &PRIORITY_KEYS {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
                return;
            }
        }
        Value::Array(items) => {
            for item in items {
                println!("{}", item_line(item));
            }
            return;
        }
        _ => {}
    }

    println!("{}", format_minimal(result_obj));
}

/// `name: value` for metrics and flags, the row label for chart rows.
fn item_line(item: &Value) -> String {
    let field = |k: &str| item.get(k).and_then(Value::as_str);
    match (field("name"), field("value")) {
        (Some(name), Some(value)) => format!("{}: {}", name, value),
        _ => field("year")
            .or_else(|| field("fiscal_year"))
            .map(str::to_string)
            .unwrap_or_else(|| format_minimal(item)),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
