use std::time::Instant;

use clap::Args;
use serde::Serialize;
use serde_json::{json, Value};

use insight_core::metrics::{calculate_dupont, compare_dupont, DupontComparison, DupontMetrics};
use insight_core::report::{PeriodIndex, PeriodOrdering};

use super::{envelope, select};
use crate::input::ReportSource;

/// Arguments for the DuPont decomposition
#[derive(Args)]
pub struct DupontArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Fiscal label to decompose (defaults to the latest period)
    #[arg(long)]
    pub period: Option<String>,
}

#[derive(Serialize)]
struct DupontView {
    period: String,
    dupont: DupontMetrics,
    previous_period: Option<String>,
    previous: Option<DupontMetrics>,
    change: Option<DupontComparison>,
}

pub fn run_dupont(args: DupontArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;
    let index = PeriodIndex::new(&bundle.reports, PeriodOrdering::TypePriorityThenYear);
    let current = select(&index, args.period.as_deref())?;
    let prev = index.years_back(current, 1);

    let dupont = calculate_dupont(current, prev);
    let previous = prev.map(|p| calculate_dupont(p, index.years_back(p, 1)));
    let change = previous.as_ref().map(|p| compare_dupont(&dupont, p));

    let mut warnings = Vec::new();
    if prev.is_none() {
        warnings.push("No prior-year report: averages use period-end balances".to_string());
    }

    envelope(
        "Three-way DuPont: ROE = Net Margin x Asset Turnover x Equity Multiplier",
        &json!({ "period": current.fiscal_year, "averaging": prev.is_some() }),
        warnings,
        started,
        DupontView {
            period: current.fiscal_year.clone(),
            dupont,
            previous_period: prev.map(|p| p.fiscal_year.clone()),
            previous,
            change,
        },
    )
}
