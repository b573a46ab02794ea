use std::time::Instant;

use clap::Args;
use serde_json::{json, Value};

use insight_core::metrics::build_ratio_board;
use insight_core::report::ComparisonMode;

use super::{envelope, ModeArg};
use crate::input::{self, ReportSource};

/// Arguments for the ratio board
#[derive(Args)]
pub struct RatiosArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Fiscal label to show (defaults to the latest period)
    #[arg(long)]
    pub period: Option<String>,

    /// How the comparison column is chosen
    #[arg(long, value_enum, default_value = "yoy")]
    pub mode: ModeArg,

    /// Peer report bundle for `--mode target`
    #[arg(long)]
    pub target: Option<String>,
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;
    let target = input::load_target(args.target.as_deref())?;
    let mode: ComparisonMode = args.mode.into();

    let mut warnings = Vec::new();
    if mode == ComparisonMode::Target && target.is_none() {
        warnings.push("--mode target without --target: comparison column is empty".to_string());
    }

    let board = build_ratio_board(
        &bundle.reports,
        args.period.as_deref(),
        mode,
        target.as_ref().map(|t| t.reports.as_slice()),
    )?;
    if board.compare_period.is_none() {
        warnings.push(format!("No comparison period for {}", board.period));
    }

    envelope(
        "Financial ratio board (profitability, solvency, efficiency, growth, cash flow, per share)",
        &json!({
            "company": bundle.company_meta.name,
            "period": board.period,
            "mode": mode,
        }),
        warnings,
        started,
        board,
    )
}
