use std::time::Instant;

use clap::Args;
use serde_json::{json, Value};

use insight_core::context::extract_analysis_context;

use super::envelope;
use crate::input::ReportSource;

/// Arguments for the narrative analysis context
#[derive(Args)]
pub struct ContextArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Language tag passed through to the report writer
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Company name overriding the bundle's metadata
    #[arg(long)]
    pub company: Option<String>,
}

pub fn run_context(args: ContextArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;

    // Reports without their own metadata inherit the bundle's.
    let company = args
        .company
        .clone()
        .or_else(|| Some(bundle.company_meta.name.clone()).filter(|n| n != "Unknown"));

    let ctx = extract_analysis_context(&bundle.reports, &args.language, company.as_deref())?;
    let warnings = ctx
        .missing_data
        .iter()
        .map(|p| format!("Missing headline item: {}", p))
        .collect();

    envelope(
        "Analysis context for narrative report generation",
        &json!({ "language": args.language, "reports": bundle.reports.len() }),
        warnings,
        started,
        ctx,
    )
}
