use std::time::Instant;

use clap::Args;
use serde_json::{json, Value};

use insight_core::metrics::calculate_signals;
use insight_core::report::{PeriodIndex, PeriodOrdering};

use super::{envelope, select};
use crate::input::ReportSource;

/// Arguments for risk and opportunity signals
#[derive(Args)]
pub struct SignalsArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Fiscal label to evaluate (defaults to the latest period)
    #[arg(long)]
    pub period: Option<String>,
}

pub fn run_signals(args: SignalsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;
    let index = PeriodIndex::new(&bundle.reports, PeriodOrdering::TypePriorityThenYear);
    let current = select(&index, args.period.as_deref())?;
    let previous = index.years_back(current, 1);

    let mut warnings = Vec::new();
    if previous.is_none() {
        warnings.push(format!(
            "No prior-year report for {}: growth signals fall back to placeholders",
            current.fiscal_year
        ));
    }

    let signals = calculate_signals(&current.data, previous.map(|r| &r.data));
    envelope(
        "Risk and opportunity signals",
        &json!({
            "period": current.fiscal_year,
            "previous": previous.map(|r| r.fiscal_year.as_str()),
        }),
        warnings,
        started,
        signals,
    )
}
