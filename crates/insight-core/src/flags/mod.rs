//! Forensic flag engine.
//!
//! Compares the latest report with its predecessor and evaluates every rule
//! in [`rules::RULES`] over a shared [`FlagContext`]. Evaluation is two-phase:
//! all rules run unconditionally, then only triggered flags (and
//! informational ones) are returned.

pub mod context;
pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::report::{sort_chronological, PeriodOrdering, StandardizedReport};

pub use context::FlagContext;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagCategory {
    Liquidity,
    Revenue,
    Cost,
    Asset,
    Debt,
    Earnings,
    Growth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagType {
    /// Earnings-quality or fraud risk.
    Red,
    /// Financial health.
    Green,
    /// Always reported; carries context rather than a verdict.
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagResult {
    pub name: String,
    pub category: FlagCategory,
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub status: bool,
    pub value: String,
    pub threshold: String,
    /// The evaluated condition with its numbers filled in.
    pub logic: String,
    pub description: String,
}

impl FlagResult {
    pub(crate) fn new(name: &str, category: FlagCategory, flag_type: FlagType) -> Self {
        FlagResult {
            name: name.to_string(),
            category,
            flag_type,
            status: false,
            value: String::new(),
            threshold: String::new(),
            logic: String::new(),
            description: String::new(),
        }
    }

    pub(crate) fn red(name: &str, category: FlagCategory) -> Self {
        Self::new(name, category, FlagType::Red)
    }

    pub(crate) fn green(name: &str, category: FlagCategory) -> Self {
        Self::new(name, category, FlagType::Green)
    }

    pub(crate) fn when(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub(crate) fn threshold(mut self, threshold: &str) -> Self {
        self.threshold = threshold.to_string();
        self
    }

    pub(crate) fn logic(mut self, logic: impl Into<String>) -> Self {
        self.logic = logic.into();
        self
    }

    pub(crate) fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Whether the flag belongs in the engine's output.
    pub fn is_surfaced(&self) -> bool {
        self.status || self.flag_type == FlagType::Info
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Every rule's result, triggered or not. Empty with fewer than two reports.
pub fn evaluate_flags(reports: &[StandardizedReport]) -> Vec<FlagResult> {
    if reports.len() < 2 {
        return Vec::new();
    }
    let sorted = sort_chronological(reports, PeriodOrdering::YearPrefix);
    let n = sorted.len();
    let curr = sorted[n - 1];
    let prev = sorted[n - 2];
    let prev2 = n.checked_sub(3).map(|i| sorted[i]);

    debug!(
        current = %curr.fiscal_year,
        previous = %prev.fiscal_year,
        "analyzing flags"
    );

    let ctx = FlagContext::build(curr, prev, prev2);
    rules::RULES.iter().map(|rule| rule(&ctx)).collect()
}

/// Triggered flags plus informational ones.
pub fn analyze_flags(reports: &[StandardizedReport]) -> Vec<FlagResult> {
    let surfaced: Vec<FlagResult> = evaluate_flags(reports)
        .into_iter()
        .filter(FlagResult::is_surfaced)
        .collect();
    debug!(surfaced = surfaced.len(), "flag analysis complete");
    surfaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::report::accounts::{balance, cash_flow, income};
    use crate::report::ReportData;
    use pretty_assertions::assert_eq;

    fn names(flags: &[FlagResult]) -> Vec<&str> {
        flags.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_fewer_than_two_reports_is_empty() {
        assert!(analyze_flags(&[]).is_empty());
        assert!(analyze_flags(&[annual("2023", company(1.0))]).is_empty());
    }

    #[test]
    fn test_every_rule_is_evaluated() {
        let reports = vec![annual("2022", company(1.0)), annual("2023", company(1.1))];
        assert_eq!(evaluate_flags(&reports).len(), rules::RULES.len());
    }

    #[test]
    fn test_output_is_filtered_to_surfaced() {
        let reports = vec![annual("2022", company(1.0)), annual("2023", company(1.1))];
        let flags = analyze_flags(&reports);
        assert!(flags.iter().all(|f| f.status || f.flag_type == FlagType::Info));
        assert!(flags.len() < rules::RULES.len());
    }

    #[test]
    fn test_zero_data_surfaces_only_triggered_flags() {
        let reports = vec![
            annual("2022", ReportData::default()),
            annual("2023", ReportData::default()),
        ];
        let flags = analyze_flags(&reports);
        assert!(flags.iter().all(|f| f.status));
        assert_eq!(names(&flags), vec!["Inverted Interest Rate"]);
    }

    #[test]
    fn test_aggressive_revenue_recognition() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 100.0)
            .with_value(balance::TOTAL_ASSETS, 5000.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 1200.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 260.0)
            .with_value(balance::TOTAL_ASSETS, 5000.0);
        let flags = analyze_flags(&[annual("2022", prev), annual("2023", curr)]);
        let flag = flags
            .iter()
            .find(|f| f.name == "Aggressive Revenue Recognition")
            .expect("flag should trigger");
        assert_eq!(flag.flag_type, FlagType::Red);
        assert_eq!(flag.category, FlagCategory::Revenue);
    }

    #[test]
    fn test_kangde_xin_paradox() {
        let data = ReportData::default()
            .with_value(balance::MONETARY_FUNDS, 300.0)
            .with_value(balance::TOTAL_ASSETS, 1000.0)
            .with_value(income::INTEREST_EXPENSES, 6.0)
            .with_value(balance::LONG_TERM_BORROWINGS, 100.0);
        let flags = analyze_flags(&[annual("2022", data.clone()), annual("2023", data)]);
        let flag = flags.iter().find(|f| f.name == "Kangde Xin Paradox").unwrap();
        assert_eq!(flag.value, "Cash/Assets: 30.0%, Int/Debt: 6.0%");
    }

    #[test]
    fn test_sorts_before_pairing() {
        let early = ReportData::default().with_value(income::REVENUE, 100.0);
        let late = ReportData::default().with_value(income::REVENUE, 200.0);
        let shuffled = [
            annual("2023", late.clone()),
            annual("2021", early.clone()),
            annual("2022", early.clone()),
        ];
        let ordered = [annual("2021", early.clone()), annual("2022", early), annual("2023", late)];
        assert_eq!(evaluate_flags(&shuffled), evaluate_flags(&ordered));
    }

    #[test]
    fn test_quarterly_flows_are_annualized() {
        let q = |label: &str, ocf: f64, capex: f64| {
            StandardizedReport::new(
                label,
                Some(crate::report::PeriodType::Quarterly),
                ReportData::default()
                    .with_value(cash_flow::OPERATING_NET, ocf)
                    .with_value(cash_flow::CAPEX, capex),
            )
        };
        let flags = analyze_flags(&[q("2023 Q1", -1e8, 0.0), q("2023 Q2", -0.5e8, 0.0)]);
        let fcf = flags.iter().find(|f| f.name == "Negative FCF").unwrap();
        assert_eq!(fcf.value, "Current: -2.00B, Prev: -4.00B");
    }

    #[test]
    fn test_serializes_type_field() {
        let flag = FlagResult::red("X", FlagCategory::Debt).when(true);
        let json = serde_json::to_value(&flag).unwrap();
        assert_eq!(json["type"], "Red");
        assert_eq!(json["category"], "Debt");
    }
}
