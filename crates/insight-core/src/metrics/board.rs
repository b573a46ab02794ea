//! Ratio board: one selected period, its comparison column and DuPont view.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dupont::{calculate_dupont, compare_dupont, DupontComparison, DupontMetrics};
use super::ratios::calculate_metrics;
use super::trend::annotate;
use super::AnnotatedMetric;
use crate::error::InsightError;
use crate::report::{
    resolve_comparison, ComparisonMode, PeriodIndex, PeriodOrdering, StandardizedReport,
};
use crate::InsightResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioBoard {
    pub period: String,
    pub compare_period: Option<String>,
    pub mode: ComparisonMode,
    pub metrics: Vec<AnnotatedMetric>,
    pub dupont: DupontMetrics,
    pub comparison_dupont: Option<DupontMetrics>,
    pub dupont_change: Option<DupontComparison>,
    /// Selectable labels, latest first.
    pub available_periods: Vec<String>,
}

/// Build the board for `selected` (the latest period when `None`).
///
/// Current metrics always average against the previous-year report of the
/// same type; `mode` only decides what the comparison column shows.
pub fn build_ratio_board(
    reports: &[StandardizedReport],
    selected: Option<&str>,
    mode: ComparisonMode,
    target: Option<&[StandardizedReport]>,
) -> InsightResult<RatioBoard> {
    let index = PeriodIndex::new(reports, PeriodOrdering::TypePriorityThenYear);
    let target_index = target.map(|t| PeriodIndex::new(t, PeriodOrdering::TypePriorityThenYear));

    let current = match selected {
        Some(label) => index
            .get(label)
            .ok_or_else(|| InsightError::UnknownPeriod(label.to_string()))?,
        None => index
            .latest()
            .ok_or_else(|| InsightError::InsufficientData("No reports available".into()))?,
    };

    let prev_year = index.years_back(current, 1);
    let current_metrics = calculate_metrics(&current.data, prev_year.map(|r| &r.data));
    let dupont = calculate_dupont(current, prev_year);

    let comparison = resolve_comparison(&index, current, mode, target_index.as_ref());
    let (comparison_metrics, comparison_dupont) = match comparison.report {
        Some(report) => (
            calculate_metrics(&report.data, comparison.baseline.map(|r| &r.data)),
            Some(calculate_dupont(report, comparison.baseline)),
        ),
        None => (Vec::new(), None),
    };

    debug!(
        period = %current.fiscal_year,
        compare = comparison.report.map(|r| r.fiscal_year.as_str()).unwrap_or("-"),
        "built ratio board"
    );

    Ok(RatioBoard {
        period: current.fiscal_year.clone(),
        compare_period: comparison.report.map(|r| r.fiscal_year.clone()),
        mode,
        metrics: annotate(&current_metrics, &comparison_metrics),
        dupont,
        dupont_change: comparison_dupont.as_ref().map(|c| compare_dupont(&dupont, c)),
        comparison_dupont,
        available_periods: index
            .reports()
            .iter()
            .rev()
            .map(|r| r.fiscal_year.clone())
            .collect(),
    })
}
