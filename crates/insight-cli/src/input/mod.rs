pub mod file;
pub mod stdin;

use clap::Args;
use insight_core::report::ReportBundle;
use insight_core::store::{JsonFileStore, ReportStore};
use tracing::debug;

/// Default location of the saved session.
pub const DEFAULT_STORE: &str = ".insight/session.json";

/// Where a command's reports come from.
#[derive(Args, Debug, Clone)]
pub struct ReportSource {
    /// Path to a JSON or YAML report bundle (or a bare array of reports)
    #[arg(long, short)]
    pub input: Option<String>,

    /// Read the reports of a saved session instead
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    pub from_store: Option<Option<String>>,
}

impl ReportSource {
    /// `--input` first, then the saved session, then piped stdin.
    pub fn load(&self) -> Result<ReportBundle, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            debug!(path = %path, "reading reports from file");
            return Ok(ReportBundle::from_value(file::read_value(path)?)?);
        }
        if let Some(path) = &self.from_store {
            let path = path.as_deref().unwrap_or(DEFAULT_STORE);
            let session = JsonFileStore::new(path)
                .load()?
                .ok_or_else(|| format!("No saved session at '{}'", path))?;
            return Ok(ReportBundle {
                company_meta: session.company_meta,
                reports: session.reports,
            });
        }
        if let Some(data) = stdin::read_stdin()? {
            debug!("reading reports from stdin");
            return Ok(ReportBundle::from_value(data)?);
        }
        Err("--input file is required (or pipe JSON on stdin, or use --from-store)".into())
    }
}

/// Read a second bundle used as the comparison target.
pub fn load_target(
    path: Option<&str>,
) -> Result<Option<ReportBundle>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(Some(ReportBundle::from_value(file::read_value(p)?)?)),
        None => Ok(None),
    }
}

/// Write a bundle with one filing per label to `dir/name`.
#[cfg(test)]
pub(crate) fn write_bundle(dir: &std::path::Path, name: &str, labels: &[&str]) -> String {
    let reports: Vec<serde_json::Value> = labels
        .iter()
        .map(|label| {
            serde_json::json!({
                "fiscal_year": label,
                "data": { "income_statement": { "total_operating_revenue": 1000.0 } }
            })
        })
        .collect();
    let bundle = serde_json::json!({ "company_meta": { "name": "Acme" }, "reports": reports });
    let path = dir.join(name);
    std::fs::write(&path, bundle.to_string()).unwrap();
    path.display().to_string()
}
