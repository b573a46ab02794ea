use std::time::Instant;

use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};

use insight_core::report::{PeriodFilter, PeriodIndex, PeriodOrdering, PeriodType};

use super::envelope;
use crate::input::ReportSource;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderingArg {
    /// Year plus fine sub-period offset (charts, context)
    Scored,
    /// Leading integer plus coarse offset (flags)
    YearPrefix,
    /// Year, then Q1 < Q2 < Q3 < Q4 < Annual (ratio board)
    TypePriority,
}

impl From<OrderingArg> for PeriodOrdering {
    fn from(o: OrderingArg) -> Self {
        match o {
            OrderingArg::Scored => PeriodOrdering::ScoredSubPeriod,
            OrderingArg::YearPrefix => PeriodOrdering::YearPrefix,
            OrderingArg::TypePriority => PeriodOrdering::TypePriorityThenYear,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Annual,
    Quarterly,
    Monthly,
}

impl From<FilterArg> for PeriodFilter {
    fn from(f: FilterArg) -> Self {
        match f {
            FilterArg::All => PeriodFilter::All,
            FilterArg::Annual => PeriodFilter::Annual,
            FilterArg::Quarterly => PeriodFilter::Quarterly,
            FilterArg::Monthly => PeriodFilter::Monthly,
        }
    }
}

/// Arguments for listing report periods
#[derive(Args)]
pub struct PeriodsArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Chronological ordering to apply
    #[arg(long, value_enum, default_value = "scored")]
    pub ordering: OrderingArg,

    /// Keep only one period type
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,
}

#[derive(Serialize)]
struct PeriodRow {
    fiscal_year: String,
    period_type: PeriodType,
    score: f64,
}

pub fn run_periods(args: PeriodsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let bundle = args.source.load()?;
    let ordering: PeriodOrdering = args.ordering.into();
    let filter: PeriodFilter = args.filter.into();

    let index = PeriodIndex::new(&bundle.reports, ordering).filtered(filter);
    let rows: Vec<PeriodRow> = index
        .reports()
        .iter()
        .map(|r| PeriodRow {
            fiscal_year: r.fiscal_year.clone(),
            period_type: r.effective_period_type(),
            score: ordering.score(r),
        })
        .collect();

    envelope(
        "Chronological period listing, oldest first",
        &json!({ "ordering": ordering, "filter": filter }),
        Vec::new(),
        started,
        rows,
    )
}
