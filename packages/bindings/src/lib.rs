//! JSON-in, JSON-out entry points for the Node.js addon.
//!
//! Each function takes one JSON document and returns the serialized result.
//! The `#[napi]` exports in [`node`] are thin wrappers over these.

use serde::Deserialize;

use insight_core::report::{
    ComparisonMode, PeriodFilter, PeriodOrdering, ReportBundle, ReportData, StandardizedReport,
};
use insight_core::InsightResult;

#[cfg(feature = "node")]
mod node;

/// Reports given either as a bundle or as a bare array.
fn parse_reports(reports_json: &str) -> InsightResult<Vec<StandardizedReport>> {
    let value: serde_json::Value = serde_json::from_str(reports_json)?;
    Ok(ReportBundle::from_value(value)?.reports)
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PairInput {
    current: ReportData,
    #[serde(default)]
    previous: Option<ReportData>,
}

pub fn calculate_metrics(input_json: &str) -> InsightResult<String> {
    let input: PairInput = serde_json::from_str(input_json)?;
    let output = insight_core::metrics::calculate_metrics(&input.current, input.previous.as_ref());
    Ok(serde_json::to_string(&output)?)
}

pub fn calculate_signals(input_json: &str) -> InsightResult<String> {
    let input: PairInput = serde_json::from_str(input_json)?;
    let output = insight_core::metrics::calculate_signals(&input.current, input.previous.as_ref());
    Ok(serde_json::to_string(&output)?)
}

#[derive(Deserialize)]
struct DupontInput {
    current: StandardizedReport,
    #[serde(default)]
    previous: Option<StandardizedReport>,
}

pub fn calculate_dupont(input_json: &str) -> InsightResult<String> {
    let input: DupontInput = serde_json::from_str(input_json)?;
    let output = insight_core::metrics::calculate_dupont(&input.current, input.previous.as_ref());
    Ok(serde_json::to_string(&output)?)
}

#[derive(Deserialize)]
struct RatioBoardInput {
    reports: Vec<StandardizedReport>,
    #[serde(default)]
    period: Option<String>,
    #[serde(default)]
    mode: ComparisonMode,
    #[serde(default)]
    target: Option<Vec<StandardizedReport>>,
}

pub fn build_ratio_board(input_json: &str) -> InsightResult<String> {
    let input: RatioBoardInput = serde_json::from_str(input_json)?;
    let output = insight_core::metrics::build_ratio_board(
        &input.reports,
        input.period.as_deref(),
        input.mode,
        input.target.as_deref(),
    )?;
    Ok(serde_json::to_string(&output)?)
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

pub fn analyze_flags(reports_json: &str) -> InsightResult<String> {
    let reports = parse_reports(reports_json)?;
    let output = insight_core::flags::analyze_flags(&reports);
    Ok(serde_json::to_string(&output)?)
}

// ---------------------------------------------------------------------------
// Charts and periods
// ---------------------------------------------------------------------------

pub fn map_chart(kind: &str, reports_json: &str) -> InsightResult<String> {
    let reports = parse_reports(reports_json)?;
    let output = insight_core::charts::map_chart_named(kind, &reports)?;
    Ok(serde_json::to_string(&output)?)
}

#[derive(Deserialize)]
struct SortInput {
    reports: Vec<StandardizedReport>,
    #[serde(default)]
    ordering: PeriodOrdering,
    #[serde(default)]
    filter: PeriodFilter,
}

/// Reports oldest first under the requested ordering.
pub fn sort_reports(input_json: &str) -> InsightResult<String> {
    let input: SortInput = serde_json::from_str(input_json)?;
    let sorted: Vec<&StandardizedReport> =
        insight_core::report::sort_chronological(&input.reports, input.ordering)
            .into_iter()
            .filter(|r| input.filter.matches(r))
            .collect();
    Ok(serde_json::to_string(&sorted)?)
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ContextInput {
    reports: Vec<StandardizedReport>,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    company_name: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

pub fn extract_analysis_context(input_json: &str) -> InsightResult<String> {
    let input: ContextInput = serde_json::from_str(input_json)?;
    let output = insight_core::context::extract_analysis_context(
        &input.reports,
        &input.language,
        input.company_name.as_deref(),
    )?;
    Ok(serde_json::to_string(&output)?)
}
