//! Ordered view over a report collection with period pairing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::period::{label_year, sort_chronological, sub_period, PeriodFilter, PeriodOrdering};
use super::StandardizedReport;

/// How the comparison period of a report is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComparisonMode {
    /// Same period type one fiscal year earlier.
    #[default]
    YoY,
    /// The adjacent older report, whatever its type.
    Sequential,
    /// The same fiscal label in another company's collection.
    Target,
}

/// Reports sorted ascending under one ordering.
#[derive(Debug, Clone)]
pub struct PeriodIndex<'a> {
    ordering: PeriodOrdering,
    reports: Vec<&'a StandardizedReport>,
}

impl<'a> PeriodIndex<'a> {
    pub fn new(reports: &'a [StandardizedReport], ordering: PeriodOrdering) -> Self {
        PeriodIndex {
            ordering,
            reports: sort_chronological(reports, ordering),
        }
    }

    pub fn ordering(&self) -> PeriodOrdering {
        self.ordering
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Oldest first.
    pub fn reports(&self) -> &[&'a StandardizedReport] {
        &self.reports
    }

    pub fn latest(&self) -> Option<&'a StandardizedReport> {
        self.reports.last().copied()
    }

    /// Position of the first report carrying `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.reports.iter().position(|r| r.fiscal_year == label)
    }

    pub fn get(&self, label: &str) -> Option<&'a StandardizedReport> {
        self.position(label).map(|i| self.reports[i])
    }

    /// Subset of this index, same ordering.
    pub fn filtered(&self, filter: PeriodFilter) -> PeriodIndex<'a> {
        PeriodIndex {
            ordering: self.ordering,
            reports: self.reports.iter().copied().filter(|r| filter.matches(r)).collect(),
        }
    }

    fn position_of(&self, current: &StandardizedReport) -> Option<usize> {
        self.reports
            .iter()
            .position(|r| std::ptr::eq(*r, current))
            .or_else(|| self.position(&current.fiscal_year))
    }

    /// The report `n` positions before `current` in this ordering.
    pub fn periods_back(
        &self,
        current: &StandardizedReport,
        n: usize,
    ) -> Option<&'a StandardizedReport> {
        let pos = self.position_of(current)?;
        pos.checked_sub(n).map(|i| self.reports[i])
    }

    /// Same effective period type, `years` fiscal years before `current`.
    /// A candidate at the same position within its year wins over the rest.
    pub fn years_back(
        &self,
        current: &StandardizedReport,
        years: i32,
    ) -> Option<&'a StandardizedReport> {
        let wanted_year = label_year(&current.fiscal_year) - years;
        let wanted_type = current.effective_period_type();
        let marker = sub_period(&current.fiscal_year);

        let candidates: Vec<&'a StandardizedReport> = self
            .reports
            .iter()
            .copied()
            .filter(|r| {
                label_year(&r.fiscal_year) == wanted_year
                    && r.effective_period_type() == wanted_type
            })
            .collect();

        candidates
            .iter()
            .copied()
            .find(|r| sub_period(&r.fiscal_year) == marker)
            .or_else(|| candidates.first().copied())
    }
}

/// The report `current` should be compared against under `mode`.
///
/// `Target` looks `current`'s label up in `target`; without a target
/// collection there is nothing to compare to.
pub fn resolve_previous<'a>(
    index: &PeriodIndex<'a>,
    current: &StandardizedReport,
    mode: ComparisonMode,
    target: Option<&PeriodIndex<'a>>,
) -> Option<&'a StandardizedReport> {
    let found = match mode {
        ComparisonMode::Sequential => index.periods_back(current, 1),
        ComparisonMode::YoY => index.years_back(current, 1),
        ComparisonMode::Target => target.and_then(|t| t.get(&current.fiscal_year)),
    };
    debug!(
        current = %current.fiscal_year,
        mode = ?mode,
        previous = found.map(|r| r.fiscal_year.as_str()).unwrap_or("-"),
        "resolved comparison period"
    );
    found
}

/// A comparison report together with the period it is itself measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparison<'a> {
    pub report: Option<&'a StandardizedReport>,
    pub baseline: Option<&'a StandardizedReport>,
}

/// Full pairing for a comparison column.
///
/// - `YoY`: the previous-year report, measured against the year before it.
/// - `Sequential`: the adjacent older report, unpaired.
/// - `Target`: the target's same-label report, measured against the target's
///   own previous-year report.
pub fn resolve_comparison<'a>(
    index: &PeriodIndex<'a>,
    current: &StandardizedReport,
    mode: ComparisonMode,
    target: Option<&PeriodIndex<'a>>,
) -> Comparison<'a> {
    let report = resolve_previous(index, current, mode, target);
    let baseline = match mode {
        ComparisonMode::YoY => index.years_back(current, 2),
        ComparisonMode::Sequential => None,
        ComparisonMode::Target => match (target, report) {
            (Some(t), Some(r)) => t.years_back(r, 1),
            _ => None,
        },
    };
    Comparison { report, baseline }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{PeriodType, ReportData};
    use pretty_assertions::assert_eq;

    fn report(label: &str, period_type: Option<PeriodType>) -> StandardizedReport {
        StandardizedReport::new(label, period_type, ReportData::default())
    }

    fn label(r: Option<&StandardizedReport>) -> Option<&str> {
        r.map(|r| r.fiscal_year.as_str())
    }

    fn mixed() -> Vec<StandardizedReport> {
        vec![
            report("2021", Some(PeriodType::Annual)),
            report("2022 Q2", Some(PeriodType::Quarterly)),
            report("2022", Some(PeriodType::Annual)),
            report("2023 Q1", Some(PeriodType::Quarterly)),
            report("2023 Q2", Some(PeriodType::Quarterly)),
            report("2023", Some(PeriodType::Annual)),
        ]
    }

    #[test]
    fn test_latest_and_position() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        assert_eq!(label(index.latest()), Some("2023"));
        assert_eq!(index.position("2021"), Some(0));
        assert_eq!(index.position("1999"), None);
    }

    #[test]
    fn test_yoy_matches_type_and_sub_period() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        let q2 = index.get("2023 Q2").unwrap();
        assert_eq!(label(resolve_previous(&index, q2, ComparisonMode::YoY, None)), Some("2022 Q2"));
        let fy = index.get("2023").unwrap();
        assert_eq!(label(resolve_previous(&index, fy, ComparisonMode::YoY, None)), Some("2022"));
        let q1 = index.get("2023 Q1").unwrap();
        // Only a Q2 exists in 2022; still the same type, so it is used.
        assert_eq!(label(resolve_previous(&index, q1, ComparisonMode::YoY, None)), Some("2022 Q2"));
    }

    #[test]
    fn test_yoy_absent_is_none() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        let first = index.get("2021").unwrap();
        assert_eq!(resolve_previous(&index, first, ComparisonMode::YoY, None), None);
    }

    #[test]
    fn test_sequential_ignores_type() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        let fy = index.get("2023").unwrap();
        assert_eq!(
            label(resolve_previous(&index, fy, ComparisonMode::Sequential, None)),
            Some("2023 Q2")
        );
        assert_eq!(label(index.periods_back(fy, 5)), Some("2021"));
        assert_eq!(index.periods_back(fy, 6), None);
    }

    #[test]
    fn test_target_lookup_by_label() {
        let reports = mixed();
        let peers = vec![report("2022", None), report("2023", None)];
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        let target = PeriodIndex::new(&peers, PeriodOrdering::TypePriorityThenYear);
        let fy = index.get("2023").unwrap();

        let cmp = resolve_comparison(&index, fy, ComparisonMode::Target, Some(&target));
        assert_eq!(label(cmp.report), Some("2023"));
        assert_eq!(label(cmp.baseline), Some("2022"));
        assert_eq!(resolve_previous(&index, fy, ComparisonMode::Target, None), None);
    }

    #[test]
    fn test_yoy_comparison_has_two_year_baseline() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::TypePriorityThenYear);
        let fy = index.get("2023").unwrap();
        let cmp = resolve_comparison(&index, fy, ComparisonMode::YoY, None);
        assert_eq!(label(cmp.report), Some("2022"));
        assert_eq!(label(cmp.baseline), Some("2021"));

        let seq = resolve_comparison(&index, fy, ComparisonMode::Sequential, None);
        assert_eq!(label(seq.report), Some("2023 Q2"));
        assert_eq!(seq.baseline, None);
    }

    #[test]
    fn test_filtered_index_keeps_ordering() {
        let reports = mixed();
        let index = PeriodIndex::new(&reports, PeriodOrdering::ScoredSubPeriod);
        let annual = index.filtered(PeriodFilter::Annual);
        let names: Vec<&str> = annual.reports().iter().map(|r| r.fiscal_year.as_str()).collect();
        assert_eq!(names, vec!["2021", "2022", "2023"]);
    }
}
