use serde_json::Value;
use std::io::{self, Read};

/// Attempt to read piped report data from stdin.
/// Returns None if stdin is a TTY (interactive) or empty.
///
/// JSON is tried first; anything else is parsed as YAML.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse(&buffer)
}

fn parse(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(Some(serde_json::from_str(trimmed)?));
    }
    let value: Value = serde_yaml::from_str(trimmed)
        .map_err(|e| format!("stdin is neither JSON nor YAML: {}", e))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_json_and_yaml() {
        assert_eq!(parse("  \n").unwrap(), None);
        assert_eq!(
            parse(r#"[{"fiscal_year": "2023"}]"#).unwrap(),
            Some(json!([{"fiscal_year": "2023"}]))
        );
        assert_eq!(
            parse("reports:\n  - fiscal_year: '2023'\n").unwrap(),
            Some(json!({"reports": [{"fiscal_year": "2023"}]}))
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse("{not json").is_err());
    }
}
