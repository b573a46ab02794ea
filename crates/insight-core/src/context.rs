//! Structured analysis context for narrative report generation.
//!
//! Condenses a report collection into the latest period's headline figures,
//! year-over-year trends, surfaced flags and the full ratio table, in the
//! shape a downstream language model consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InsightError;
use crate::flags::{analyze_flags, FlagResult, FlagType};
use crate::metrics::calculate_metrics;
use crate::report::accounts::{balance, cash_flow, income};
use crate::report::{
    has_value, PeriodIndex, PeriodOrdering, PeriodType, ReportData, StandardizedReport,
};
use crate::InsightResult;

const UNKNOWN_COMPANY: &str = "Unknown Company";
const UNKNOWN_CODE: &str = "N/A";

/// Trend moves within this many percent count as stable.
const STABLE_BAND: f64 = 2.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub revenue: f64,
    pub net_profit: f64,
    pub operating_cash_flow: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub cash_and_equiv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    pub metric_name: String,
    pub current_value: f64,
    pub previous_value: Option<f64>,
    pub yoy_change_percent: Option<f64>,
    pub trend_direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Positive,
    Info,
}

impl From<FlagType> for Severity {
    fn from(t: FlagType) -> Self {
        match t {
            FlagType::Red => Severity::Critical,
            FlagType::Green => Severity::Positive,
            FlagType::Info => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFlag {
    pub flag_name: String,
    pub flag_type: FlagType,
    pub severity: Severity,
    pub triggered_value: String,
    pub threshold: String,
    pub description: String,
}

impl From<FlagResult> for ActiveFlag {
    fn from(f: FlagResult) -> Self {
        ActiveFlag {
            flag_name: f.name,
            severity: f.flag_type.into(),
            flag_type: f.flag_type,
            triggered_value: f.value,
            threshold: f.threshold,
            description: f.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub company_name: String,
    pub stock_code: String,
    pub fiscal_year: String,
    pub period_type: PeriodType,
    pub language: String,
    pub full_report: ReportData,
    pub key_metrics: KeyMetrics,
    /// Ratio name to formatted value for the latest period.
    pub ratios: BTreeMap<String, String>,
    pub trends: Vec<MetricTrend>,
    pub active_flags: Vec<ActiveFlag>,
    /// Headline paths the latest filing does not carry.
    pub missing_data: Vec<String>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

const TRACKED: [(&str, &str); 3] = [
    ("Revenue", income::REVENUE),
    ("Net Profit", income::NET_PROFIT_PARENT),
    ("OCF", cash_flow::OPERATING_NET),
];

const REQUIRED_PATHS: [&str; 6] = [
    income::REVENUE,
    income::NET_PROFIT_PARENT,
    cash_flow::OPERATING_NET,
    balance::TOTAL_ASSETS,
    balance::TOTAL_LIABILITIES,
    balance::MONETARY_FUNDS,
];

/// Build the context from the latest report and its predecessor.
///
/// `company_name` overrides the name carried in the latest report's metadata.
pub fn extract_analysis_context(
    reports: &[StandardizedReport],
    language: &str,
    company_name: Option<&str>,
) -> InsightResult<AnalysisContext> {
    let index = PeriodIndex::new(reports, PeriodOrdering::ScoredSubPeriod);
    let (latest, previous) = match index.reports() {
        [] => {
            return Err(InsightError::InsufficientData(
                "No reports available to analyze".into(),
            ))
        }
        [.., prev, last] => (*last, Some(*prev)),
        [only] => (*only, None),
    };

    let d = &latest.data;
    let pd = previous.map(|p| &p.data);

    let key_metrics = KeyMetrics {
        revenue: d.value(income::REVENUE),
        net_profit: d.value(income::NET_PROFIT_PARENT),
        operating_cash_flow: d.value(cash_flow::OPERATING_NET),
        total_assets: d.value(balance::TOTAL_ASSETS),
        total_liabilities: d.value(balance::TOTAL_LIABILITIES),
        cash_and_equiv: d.value(balance::MONETARY_FUNDS),
    };

    let trends = TRACKED
        .iter()
        .map(|(name, path)| metric_trend(name, d.value(path), pd.map(|p| p.value(path))))
        .collect();

    // Growth ratios compare against the same period one year earlier.
    let year_ago = index.years_back(latest, 1).map(|r| &r.data);
    let ratios = calculate_metrics(d, year_ago)
        .into_iter()
        .map(|m| (m.name, m.value))
        .collect();

    let active_flags: Vec<ActiveFlag> =
        analyze_flags(reports).into_iter().map(Into::into).collect();

    let missing_data: Vec<String> = REQUIRED_PATHS
        .iter()
        .filter(|p| !has_value(Some(d), p))
        .map(|p| p.to_string())
        .collect();

    let meta = latest.company_meta.as_ref();
    let company_name = company_name
        .or(meta.map(|m| m.name.as_str()))
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_COMPANY)
        .to_string();
    let stock_code = meta
        .and_then(|m| m.stock_code.as_deref())
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_CODE)
        .to_string();

    debug!(
        latest = %latest.fiscal_year,
        flags = active_flags.len(),
        missing = missing_data.len(),
        "extracted analysis context"
    );

    Ok(AnalysisContext {
        company_name,
        stock_code,
        fiscal_year: latest.fiscal_year.clone(),
        period_type: latest.effective_period_type(),
        language: language.to_string(),
        full_report: d.clone(),
        key_metrics,
        ratios,
        trends,
        active_flags,
        missing_data,
    })
}

fn metric_trend(name: &str, current: f64, previous: Option<f64>) -> MetricTrend {
    let yoy = previous
        .filter(|p| *p != 0.0)
        .map(|p| (current - p) / p.abs() * 100.0);
    let trend_direction = match yoy {
        Some(y) if y > STABLE_BAND => TrendDirection::Increasing,
        Some(y) if y < -STABLE_BAND => TrendDirection::Decreasing,
        _ => TrendDirection::Stable,
    };
    MetricTrend {
        metric_name: name.to_string(),
        current_value: current,
        previous_value: previous,
        yoy_change_percent: yoy,
        trend_direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::math::approx_eq;
    use crate::report::CompanyMeta;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_is_an_error() {
        let err = extract_analysis_context(&[], "en", None).unwrap_err();
        assert!(matches!(
            err,
            InsightError::InsufficientData(ref m) if m == "No reports available to analyze"
        ));
    }

    #[test]
    fn test_latest_and_trends() {
        let reports = vec![annual("2023", company(1.1)), annual("2022", company(1.0))];
        let ctx = extract_analysis_context(&reports, "zh", None).unwrap();
        assert_eq!(ctx.fiscal_year, "2023");
        assert_eq!(ctx.period_type, PeriodType::Annual);
        assert_eq!(ctx.language, "zh");
        assert_eq!(ctx.company_name, "Unknown Company");
        assert_eq!(ctx.stock_code, "N/A");

        let revenue = &ctx.trends[0];
        assert_eq!(revenue.metric_name, "Revenue");
        assert_eq!(revenue.previous_value, Some(1000.0));
        assert!(approx_eq(revenue.yoy_change_percent.unwrap(), 10.0, 1e-9));
        assert_eq!(revenue.trend_direction, TrendDirection::Increasing);

        assert_eq!(ctx.ratios.get("Gross Margin").map(String::as_str), Some("40.00%"));
        assert!(ctx.active_flags.iter().all(|f| f.severity != Severity::Info));
        assert!(ctx.missing_data.is_empty());
    }

    #[test]
    fn test_ratios_use_year_ago_quarter() {
        let quarter = |label: &str, revenue: f64| {
            StandardizedReport::new(
                label,
                Some(PeriodType::Quarterly),
                ReportData::default().with_value(income::REVENUE, revenue),
            )
        };
        let reports = vec![
            quarter("2022 Q3", 100.0),
            quarter("2023 Q2", 200.0),
            quarter("2023 Q3", 150.0),
        ];
        let ctx = extract_analysis_context(&reports, "en", None).unwrap();
        assert_eq!(ctx.fiscal_year, "2023 Q3");
        assert_eq!(
            ctx.ratios.get("Revenue Growth (YoY)").map(String::as_str),
            Some("50.00%")
        );
        // Trends follow the adjacent period.
        assert_eq!(ctx.trends[0].previous_value, Some(200.0));
    }

    #[test]
    fn test_single_report_has_no_yoy() {
        let ctx = extract_analysis_context(&[annual("2023", company(1.0))], "en", None).unwrap();
        assert!(ctx.trends.iter().all(|t| t.yoy_change_percent.is_none()));
        assert!(ctx.trends.iter().all(|t| t.trend_direction == TrendDirection::Stable));
        assert!(ctx.active_flags.is_empty());
    }

    #[test]
    fn test_zero_previous_has_no_yoy() {
        let t = metric_trend("OCF", 50.0, Some(0.0));
        assert_eq!(t.previous_value, Some(0.0));
        assert_eq!(t.yoy_change_percent, None);
        assert_eq!(metric_trend("OCF", 101.0, Some(100.0)).trend_direction, TrendDirection::Stable);
        assert_eq!(
            metric_trend("OCF", -60.0, Some(-100.0)).trend_direction,
            TrendDirection::Increasing
        );
    }

    #[test]
    fn test_company_name_resolution() {
        let mut report = annual("2023", company(1.0));
        report.company_meta = Some(CompanyMeta {
            name: "Acme Holdings".into(),
            stock_code: Some("600000".into()),
            ..CompanyMeta::default()
        });
        let reports = vec![report];
        let ctx = extract_analysis_context(&reports, "en", None).unwrap();
        assert_eq!(ctx.company_name, "Acme Holdings");
        assert_eq!(ctx.stock_code, "600000");

        let ctx = extract_analysis_context(&reports, "en", Some("Override Co")).unwrap();
        assert_eq!(ctx.company_name, "Override Co");
    }

    #[test]
    fn test_missing_headline_paths() {
        let data = ReportData::default().with_value(income::REVENUE, 0.0);
        let ctx = extract_analysis_context(&[annual("2023", data)], "en", None).unwrap();
        assert!(!ctx.missing_data.contains(&income::REVENUE.to_string()));
        assert!(ctx.missing_data.contains(&balance::TOTAL_ASSETS.to_string()));
        assert_eq!(ctx.missing_data.len(), 5);
    }

    #[test]
    fn test_serialized_shape() {
        let ctx = extract_analysis_context(&[annual("2023", company(1.0))], "en", None).unwrap();
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["trends"][0]["trend_direction"], "stable");
        assert_eq!(json["period_type"], "Annual");
        assert!(json["full_report"]["income_statement"].is_object());
    }
}
