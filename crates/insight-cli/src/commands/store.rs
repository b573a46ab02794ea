use clap::{Args, Subcommand};
use serde_json::{json, Value};

use insight_core::store::{JsonFileStore, ReportStore, Session};

use crate::input::{self, ReportSource, DEFAULT_STORE};

/// Arguments for the saved session
#[derive(Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,

    /// Session file
    #[arg(long, default_value = DEFAULT_STORE, global = true)]
    pub path: String,
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// Save a report bundle (and optional peer bundle) as the session
    Save {
        #[command(flatten)]
        source: ReportSource,

        /// Peer report bundle kept for target comparisons
        #[arg(long)]
        target: Option<String>,

        /// Markdown file holding a generated report to cache alongside
        #[arg(long)]
        report: Option<String>,
    },
    /// Print the saved session
    Show,
    /// Delete the saved session
    Clear,
}

pub fn run_store(args: StoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(&args.path);
    match args.command {
        StoreCommand::Save {
            source,
            target,
            report,
        } => {
            let mut session = Session::new(source.load()?);
            if let Some(t) = input::load_target(target.as_deref())? {
                session = session.with_target(t);
            }
            if let Some(path) = report {
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read '{}': {}", path, e))?;
                session.cached_report = Some(text);
            }
            store.save(&session)?;
            Ok(json!({
                "path": store.path().display().to_string(),
                "reports": session.reports.len(),
                "target_reports": session.target_reports().len(),
                "saved_at": session.saved_at,
            }))
        }
        StoreCommand::Show => match store.load()? {
            Some(session) => Ok(serde_json::to_value(session)?),
            None => Err(format!("No saved session at '{}'", args.path).into()),
        },
        StoreCommand::Clear => {
            store.clear()?;
            Ok(json!({ "path": args.path, "cleared": true }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::write_bundle;
    use pretty_assertions::assert_eq;

    fn store_args(command: StoreCommand, path: &str) -> StoreArgs {
        StoreArgs {
            command,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_save_show_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let session = dir.path().join("nested").join("session.json");
        let session = session.display().to_string();
        let report = dir.path().join("report.md");
        std::fs::write(&report, "# Acme 2023").unwrap();

        let save = StoreCommand::Save {
            source: ReportSource {
                input: Some(write_bundle(dir.path(), "mine.json", &["2022", "2023"])),
                from_store: None,
            },
            target: Some(write_bundle(dir.path(), "peer.json", &["2023"])),
            report: Some(report.display().to_string()),
        };
        let saved = run_store(store_args(save, &session)).unwrap();
        assert_eq!(saved["reports"], 2);
        assert_eq!(saved["target_reports"], 1);
        assert_eq!(saved["path"], session.as_str());

        let shown = run_store(store_args(StoreCommand::Show, &session)).unwrap();
        assert_eq!(shown["company_meta"]["name"], "Acme");
        assert_eq!(shown["reports"][1]["fiscal_year"], "2023");
        assert_eq!(shown["cached_report"], "# Acme 2023");

        let cleared = run_store(store_args(StoreCommand::Clear, &session)).unwrap();
        assert_eq!(cleared["cleared"], true);
        let err = run_store(store_args(StoreCommand::Show, &session)).unwrap_err();
        assert_eq!(err.to_string(), format!("No saved session at '{}'", session));
    }
}
