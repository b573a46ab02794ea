//! Fiscal label parsing and chronological ordering.
//!
//! Labels are free text (`"2023"`, `"2023 Q2"`, `"2023 Annual"`,
//! `"2023-06"`), so every consumer picks an explicit [`PeriodOrdering`]
//! rather than guessing at a shared heuristic.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{PeriodType, StandardizedReport};

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}").unwrap());
static MONTH_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-/.年](\d{1,2})").unwrap());

// ---------------------------------------------------------------------------
// Label parsing
// ---------------------------------------------------------------------------

/// Position of a period within its fiscal year, as read from the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPeriod {
    Quarter(u8),
    Semi,
    Annual,
    /// Month label; `None` when the separator is present but no month digits follow.
    Month(Option<u8>),
    Unmarked,
}

pub fn sub_period(label: &str) -> SubPeriod {
    let lower = label.to_lowercase();
    if lower.contains("q1") {
        SubPeriod::Quarter(1)
    } else if lower.contains("q2") {
        SubPeriod::Quarter(2)
    } else if lower.contains("semi") {
        SubPeriod::Semi
    } else if lower.contains("q3") {
        SubPeriod::Quarter(3)
    } else if lower.contains("q4") {
        SubPeriod::Quarter(4)
    } else if lower.contains("annual") {
        SubPeriod::Annual
    } else if label.contains('-') || label.contains('.') {
        SubPeriod::Month(month_token(label))
    } else {
        SubPeriod::Unmarked
    }
}

fn month_token(label: &str) -> Option<u8> {
    MONTH_TOKEN
        .captures(label)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// JavaScript `parseInt` semantics: optional sign and leading digits after
/// whitespace; anything else reads as `0`.
pub fn leading_int(label: &str) -> i32 {
    let s = label.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().map(|n| sign * n).unwrap_or(0)
}

/// First `20xx` token of the label, `0` when none.
pub fn year_token(label: &str) -> i32 {
    YEAR_TOKEN
        .find(label)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Fiscal year used for year-over-year pairing: the leading integer, or the
/// first `20xx` token for labels such as `"FY2023"`.
pub fn label_year(label: &str) -> i32 {
    match leading_int(label) {
        0 => year_token(label),
        y => y,
    }
}

/// Period type implied by a label alone. Plain years count as annual.
pub fn infer_period_type(label: &str) -> PeriodType {
    match sub_period(label) {
        SubPeriod::Quarter(_) | SubPeriod::Semi => PeriodType::Quarterly,
        SubPeriod::Month(_) => PeriodType::Monthly,
        SubPeriod::Annual | SubPeriod::Unmarked => PeriodType::Annual,
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodOrdering {
    /// `20xx` year plus a fine-grained sub-period offset (Q1 .20 .. Annual .99).
    #[default]
    ScoredSubPeriod,
    /// Leading integer plus a coarse offset (Q1 .1 .. Q4/Annual .4).
    YearPrefix,
    /// Year first; within a year Q1 < Q2 < Q3 < Q4 < Annual.
    TypePriorityThenYear,
}

impl PeriodOrdering {
    /// Ascending sort key of a report under this ordering.
    pub fn score(self, report: &StandardizedReport) -> f64 {
        let label = report.fiscal_year.as_str();
        match self {
            PeriodOrdering::ScoredSubPeriod => {
                let offset = match sub_period(label) {
                    SubPeriod::Quarter(1) => 0.20,
                    SubPeriod::Quarter(2) | SubPeriod::Semi => 0.45,
                    SubPeriod::Quarter(3) => 0.70,
                    SubPeriod::Quarter(_) => 0.95,
                    SubPeriod::Month(Some(m)) => f64::from(m) / 100.0,
                    SubPeriod::Annual | SubPeriod::Month(None) | SubPeriod::Unmarked => 0.99,
                };
                f64::from(year_token(label)) + offset
            }
            PeriodOrdering::YearPrefix => {
                let offset = match sub_period(label) {
                    SubPeriod::Quarter(1) => 0.1,
                    SubPeriod::Quarter(2) | SubPeriod::Semi => 0.2,
                    SubPeriod::Quarter(3) => 0.3,
                    SubPeriod::Month(Some(m)) => f64::from(m) / 100.0,
                    _ => 0.4,
                };
                f64::from(leading_int(label)) + offset
            }
            PeriodOrdering::TypePriorityThenYear => {
                f64::from(leading_int(label)) + type_priority(report) / 100.0
            }
        }
    }
}

fn type_priority(report: &StandardizedReport) -> f64 {
    let marker = sub_period(&report.fiscal_year);
    let annual = match report.period_type {
        Some(t) => t == PeriodType::Annual,
        None => marker == SubPeriod::Annual,
    };
    if annual {
        return 10.0;
    }
    match marker {
        SubPeriod::Quarter(q) => f64::from(q),
        _ if report.period_type.is_none() => 4.0,
        _ => 0.0,
    }
}

/// Stable ascending sort; reports with equal scores keep their input order.
pub fn sort_chronological(
    reports: &[StandardizedReport],
    ordering: PeriodOrdering,
) -> Vec<&StandardizedReport> {
    let mut keyed: Vec<(f64, &StandardizedReport)> =
        reports.iter().map(|r| (ordering.score(r), r)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, r)| r).collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodFilter {
    Annual,
    Quarterly,
    Monthly,
    #[default]
    All,
}

impl PeriodFilter {
    pub fn matches(self, report: &StandardizedReport) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Annual => report.effective_period_type() == PeriodType::Annual,
            PeriodFilter::Quarterly => report.effective_period_type() == PeriodType::Quarterly,
            PeriodFilter::Monthly => report.effective_period_type() == PeriodType::Monthly,
        }
    }
}

pub fn filter_by_type(
    reports: &[StandardizedReport],
    filter: PeriodFilter,
) -> Vec<&StandardizedReport> {
    reports.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportData;
    use pretty_assertions::assert_eq;

    fn report(label: &str, period_type: Option<PeriodType>) -> StandardizedReport {
        StandardizedReport::new(label, period_type, ReportData::default())
    }

    fn labels(sorted: &[&StandardizedReport]) -> Vec<String> {
        sorted.iter().map(|r| r.fiscal_year.clone()).collect()
    }

    #[test]
    fn test_sub_period_markers() {
        assert_eq!(sub_period("2023 Q1"), SubPeriod::Quarter(1));
        assert_eq!(sub_period("2023 semi-annual"), SubPeriod::Semi);
        assert_eq!(sub_period("2023 Annual"), SubPeriod::Annual);
        assert_eq!(sub_period("2023-06"), SubPeriod::Month(Some(6)));
        assert_eq!(sub_period("2023年3"), SubPeriod::Unmarked);
        assert_eq!(sub_period("2023"), SubPeriod::Unmarked);
    }

    #[test]
    fn test_leading_int_matches_parse_int() {
        assert_eq!(leading_int("2023 Q2"), 2023);
        assert_eq!(leading_int("  2021-12"), 2021);
        assert_eq!(leading_int("FY2023"), 0);
        assert_eq!(label_year("FY2023"), 2023);
    }

    #[test]
    fn test_scored_sub_period_order() {
        let reports = vec![
            report("2023 Annual", None),
            report("2023 Q3", None),
            report("2022", None),
            report("2023 Q1", None),
            report("2023-06", None),
        ];
        let sorted = sort_chronological(&reports, PeriodOrdering::ScoredSubPeriod);
        assert_eq!(
            labels(&sorted),
            vec!["2022", "2023-06", "2023 Q1", "2023 Q3", "2023 Annual"]
        );
    }

    #[test]
    fn test_year_prefix_order() {
        let reports = vec![
            report("2023 Q4", None),
            report("2023 Q2", None),
            report("2022 Annual", None),
        ];
        let sorted = sort_chronological(&reports, PeriodOrdering::YearPrefix);
        assert_eq!(labels(&sorted), vec!["2022 Annual", "2023 Q2", "2023 Q4"]);
    }

    #[test]
    fn test_type_priority_puts_annual_last_within_year() {
        let reports = vec![
            report("2023", Some(PeriodType::Annual)),
            report("2023 Q4", Some(PeriodType::Quarterly)),
            report("2022", Some(PeriodType::Annual)),
            report("2023 Q1", Some(PeriodType::Quarterly)),
        ];
        let sorted = sort_chronological(&reports, PeriodOrdering::TypePriorityThenYear);
        assert_eq!(labels(&sorted), vec!["2022", "2023 Q1", "2023 Q4", "2023"]);
    }

    #[test]
    fn test_type_priority_reads_quarter_marker() {
        assert_eq!(type_priority(&report("2023 Q2", Some(PeriodType::Quarterly))), 2.0);
        assert_eq!(type_priority(&report("2023 Q2", None)), 2.0);
        assert_eq!(type_priority(&report("2023", Some(PeriodType::Annual))), 10.0);
        assert_eq!(type_priority(&report("2023 Annual", None)), 10.0);
        assert_eq!(type_priority(&report("2023", None)), 4.0);
        assert_eq!(type_priority(&report("2023-06", None)), 4.0);
        // Declared non-annual without a quarter marker sorts first in its year.
        assert_eq!(type_priority(&report("2023 interim", Some(PeriodType::Quarterly))), 0.0);
        assert_eq!(type_priority(&report("2023-06", Some(PeriodType::Monthly))), 0.0);

        let reports = vec![
            report("2023 Q3", Some(PeriodType::Quarterly)),
            report("2023", Some(PeriodType::Annual)),
            report("2023 interim", Some(PeriodType::Quarterly)),
            report("2023 Q1", Some(PeriodType::Quarterly)),
        ];
        let sorted = sort_chronological(&reports, PeriodOrdering::TypePriorityThenYear);
        assert_eq!(labels(&sorted), vec!["2023 interim", "2023 Q1", "2023 Q3", "2023"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_scores() {
        let reports = vec![report("2023", None), report("2023 ", None)];
        let sorted = sort_chronological(&reports, PeriodOrdering::YearPrefix);
        assert_eq!(labels(&sorted), vec!["2023", "2023 "]);
    }

    #[test]
    fn test_filter_uses_declared_type_then_label() {
        let reports = vec![
            report("2023", None),
            report("2023 Q2", None),
            report("2023-06", None),
            report("2022 Q4", Some(PeriodType::Annual)),
        ];
        assert_eq!(
            labels(&filter_by_type(&reports, PeriodFilter::Annual)),
            vec!["2023", "2022 Q4"]
        );
        assert_eq!(labels(&filter_by_type(&reports, PeriodFilter::Quarterly)), vec!["2023 Q2"]);
        assert_eq!(labels(&filter_by_type(&reports, PeriodFilter::Monthly)), vec!["2023-06"]);
        assert_eq!(filter_by_type(&reports, PeriodFilter::All).len(), 4);
    }
}
