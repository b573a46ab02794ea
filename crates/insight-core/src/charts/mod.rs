//! Chart series mappers.
//!
//! Every mapper turns a chronologically ordered run of reports into one
//! [`ChartRow`] per report. Currency series are expressed in hundred
//! millions, ratio series in percent, and every ratio goes through
//! [`safe_div`](crate::math::safe_div) so rows never carry `NaN` or an
//! infinity. Series that need an average read the previous element of the
//! slice, so callers must sort first; [`map_chart`] does that for them.

pub mod aggregations;
pub mod cash_flow;
pub mod structure;
pub mod trends;

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::error::InsightError;
use crate::format::HUNDRED_MILLION;
use crate::report::{sort_chronological, PeriodOrdering, StandardizedReport};
use crate::InsightResult;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One x-axis point: the fiscal label plus named series values, in order.
///
/// Serializes as a flat object, `{"year": "2023", "<series>": value, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub year: String,
    pub series: Vec<(&'static str, f64)>,
}

impl ChartRow {
    pub fn new(year: impl Into<String>) -> Self {
        ChartRow {
            year: year.into(),
            series: Vec::new(),
        }
    }

    pub(crate) fn with(mut self, name: &'static str, value: f64) -> Self {
        self.series.push((name, value));
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.series.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len() + 1))?;
        map.serialize_entry("year", &self.year)?;
        for (name, value) in &self.series {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Currency amount in hundred millions.
pub(crate) fn scaled(amount: f64) -> f64 {
    amount / HUNDRED_MILLION
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    AssetStructure,
    LiabilityStructure,
    EquityStructure,
    Profitability,
    Efficiency,
    CostStructure,
    ProfitSources,
    CashFlowSummary,
    RevenueVsCash,
    Growth,
    OperatingCashFlow,
    InvestingCashFlow,
    FinancingCashFlow,
    Dupont,
}

impl ChartKind {
    pub const ALL: [ChartKind; 14] = [
        ChartKind::AssetStructure,
        ChartKind::LiabilityStructure,
        ChartKind::EquityStructure,
        ChartKind::Profitability,
        ChartKind::Efficiency,
        ChartKind::CostStructure,
        ChartKind::ProfitSources,
        ChartKind::CashFlowSummary,
        ChartKind::RevenueVsCash,
        ChartKind::Growth,
        ChartKind::OperatingCashFlow,
        ChartKind::InvestingCashFlow,
        ChartKind::FinancingCashFlow,
        ChartKind::Dupont,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::AssetStructure => "asset-structure",
            ChartKind::LiabilityStructure => "liability-structure",
            ChartKind::EquityStructure => "equity-structure",
            ChartKind::Profitability => "profitability",
            ChartKind::Efficiency => "efficiency",
            ChartKind::CostStructure => "cost-structure",
            ChartKind::ProfitSources => "profit-sources",
            ChartKind::CashFlowSummary => "cash-flow-summary",
            ChartKind::RevenueVsCash => "revenue-vs-cash",
            ChartKind::Growth => "growth",
            ChartKind::OperatingCashFlow => "operating-cash-flow",
            ChartKind::InvestingCashFlow => "investing-cash-flow",
            ChartKind::FinancingCashFlow => "financing-cash-flow",
            ChartKind::Dupont => "dupont",
        }
    }

    /// Map an already sorted run of reports.
    pub fn map(self, reports: &[&StandardizedReport]) -> Vec<ChartRow> {
        match self {
            ChartKind::AssetStructure => structure::asset_structure(reports),
            ChartKind::LiabilityStructure => structure::liability_structure(reports),
            ChartKind::EquityStructure => structure::equity_structure(reports),
            ChartKind::Profitability => trends::profitability(reports),
            ChartKind::Efficiency => trends::efficiency(reports),
            ChartKind::CostStructure => trends::cost_structure(reports),
            ChartKind::ProfitSources => trends::profit_sources(reports),
            ChartKind::CashFlowSummary => cash_flow::summary(reports),
            ChartKind::RevenueVsCash => cash_flow::revenue_vs_cash(reports),
            ChartKind::Growth => trends::growth(reports),
            ChartKind::OperatingCashFlow => cash_flow::operating_detail(reports),
            ChartKind::InvestingCashFlow => cash_flow::investing_detail(reports),
            ChartKind::FinancingCashFlow => cash_flow::financing_detail(reports),
            ChartKind::Dupont => trends::dupont(reports),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| InsightError::InvalidInput {
                field: "chart".into(),
                reason: format!(
                    "unknown chart '{s}', expected one of: {}",
                    ChartKind::ALL.map(ChartKind::name).join(", ")
                ),
            })
    }
}

/// Sort `reports` chronologically and map them into `kind`'s rows.
pub fn map_chart(kind: ChartKind, reports: &[StandardizedReport]) -> Vec<ChartRow> {
    let sorted = sort_chronological(reports, PeriodOrdering::ScoredSubPeriod);
    let rows = kind.map(&sorted);
    debug!(chart = %kind, rows = rows.len(), "mapped chart");
    rows
}

/// Like [`map_chart`] with the kind given by name.
pub fn map_chart_named(kind: &str, reports: &[StandardizedReport]) -> InsightResult<Vec<ChartRow>> {
    Ok(map_chart(kind.parse()?, reports))
}
