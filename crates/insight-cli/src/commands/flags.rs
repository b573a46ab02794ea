use std::time::Instant;

use clap::Args;
use serde_json::{json, Value};

use insight_core::flags::{analyze_flags, evaluate_flags};

use super::envelope;
use crate::input::ReportSource;

/// Arguments for forensic flag analysis
#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Include rules that did not trigger
    #[arg(long)]
    pub all: bool,
}

pub fn run_flags(args: FlagsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;

    let mut warnings = Vec::new();
    if bundle.reports.len() < 2 {
        warnings.push("Flag analysis needs at least two reports".to_string());
    }

    let flags = if args.all {
        evaluate_flags(&bundle.reports)
    } else {
        analyze_flags(&bundle.reports)
    };

    envelope(
        "Forensic red/green flags on the latest two periods",
        &json!({ "reports": bundle.reports.len(), "include_clear": args.all }),
        warnings,
        started,
        flags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::write_bundle;
    use pretty_assertions::assert_eq;

    fn args(path: String, all: bool) -> FlagsArgs {
        FlagsArgs {
            source: ReportSource {
                input: Some(path),
                from_store: None,
            },
            all,
        }
    }

    #[test]
    fn test_single_report_warns_and_returns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bundle(dir.path(), "one.json", &["2023"]);
        let value = run_flags(args(path, false)).unwrap();
        assert_eq!(value["warnings"][0], "Flag analysis needs at least two reports");
        assert_eq!(value["result"], json!([]));
    }

    #[test]
    fn test_all_includes_clear_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bundle(dir.path(), "two.json", &["2022", "2023"]);
        let surfaced = run_flags(args(path.clone(), false)).unwrap();
        let all = run_flags(args(path, true)).unwrap();
        assert!(all["warnings"].as_array().unwrap().is_empty());
        assert_eq!(all["assumptions"]["include_clear"], true);
        let count = |v: &Value| v["result"].as_array().map(Vec::len).unwrap_or(0);
        assert!(count(&all) > count(&surfaced));
    }
}
