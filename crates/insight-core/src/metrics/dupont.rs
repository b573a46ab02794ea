//! Three-way DuPont decomposition.
//!
//! ROE = Net Margin x Asset Turnover x Equity Multiplier, with assets and
//! parent equity averaged against the previous report when one is given.
//! Because the components telescope, `roe == net_income / avg_equity`
//! whenever revenue and average assets are non-zero.

use serde::{Deserialize, Serialize};

use crate::math::{average, safe_div};
use crate::report::accounts::{balance, income};
use crate::report::StandardizedReport;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DupontMetrics {
    pub roe: f64,
    pub net_margin: f64,
    pub asset_turnover: f64,
    pub equity_multiplier: f64,
}

/// Component deltas of `current` against a comparison decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupontComparison {
    pub roe_change: f64,
    pub margin_change: f64,
    pub turnover_change: f64,
    pub leverage_change: f64,
    /// Component with the largest absolute change.
    pub primary_driver: String,
    pub diagnosis: String,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

pub fn calculate_dupont(
    current: &StandardizedReport,
    previous: Option<&StandardizedReport>,
) -> DupontMetrics {
    let data = &current.data;
    let prev = previous.map(|p| &p.data);

    let revenue = data.value(income::REVENUE);
    let net_income = data.value(income::NET_PROFIT_PARENT);
    let avg_assets = average(
        data.value(balance::TOTAL_ASSETS),
        prev.map(|p| p.value(balance::TOTAL_ASSETS)),
    );
    let avg_equity = average(
        data.value(balance::TOTAL_PARENT_EQUITY),
        prev.map(|p| p.value(balance::TOTAL_PARENT_EQUITY)),
    );

    let net_margin = safe_div(net_income, revenue);
    let asset_turnover = safe_div(revenue, avg_assets);
    let equity_multiplier = safe_div(avg_assets, avg_equity);

    DupontMetrics {
        roe: net_margin * asset_turnover * equity_multiplier,
        net_margin,
        asset_turnover,
        equity_multiplier,
    }
}

pub fn compare_dupont(current: &DupontMetrics, comparison: &DupontMetrics) -> DupontComparison {
    let margin_change = current.net_margin - comparison.net_margin;
    let turnover_change = current.asset_turnover - comparison.asset_turnover;
    let leverage_change = current.equity_multiplier - comparison.equity_multiplier;

    let changes = [
        ("Profit margin", margin_change.abs()),
        ("Asset turnover", turnover_change.abs()),
        ("Financial leverage", leverage_change.abs()),
    ];
    let primary_driver = changes
        .iter()
        .fold(changes[0], |best, c| if c.1 > best.1 { *c } else { best })
        .0
        .to_string();

    DupontComparison {
        roe_change: current.roe - comparison.roe,
        margin_change,
        turnover_change,
        leverage_change,
        primary_driver,
        diagnosis: diagnose(current),
    }
}

fn diagnose(m: &DupontMetrics) -> String {
    let mut parts = Vec::new();

    if m.net_margin < 0.05 {
        parts.push("Low profit margins indicate pricing pressure or cost issues");
    } else if m.net_margin > 0.20 {
        parts.push("Strong profit margins suggest competitive advantage");
    }

    if m.asset_turnover < 0.5 {
        parts.push("Low asset turnover suggests capital-intensive operations or underutilized assets");
    } else if m.asset_turnover > 2.0 {
        parts.push("High asset turnover indicates efficient asset utilization");
    }

    if m.equity_multiplier > 5.0 {
        parts.push("Very high financial leverage increases financial risk significantly");
    } else if m.equity_multiplier > 3.0 {
        parts.push("Elevated financial leverage increases risk");
    } else if m.equity_multiplier < 1.5 {
        parts.push("Conservative leverage with low financial risk");
    }

    if parts.is_empty() {
        "Balanced DuPont profile with no notable concerns".to_string()
    } else {
        parts.join(". ") + "."
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::math::approx_eq;
    use crate::report::ReportData;

    #[test]
    fn test_components_without_previous() {
        let out = calculate_dupont(&annual("2023", company(1.0)), None);
        assert!(approx_eq(out.net_margin, 0.14, 1e-12));
        assert!(approx_eq(out.asset_turnover, 0.5, 1e-12));
        assert!(approx_eq(out.equity_multiplier, 2.0, 1e-12));
        assert!(approx_eq(out.roe, 0.14, 1e-12));
    }

    #[test]
    fn test_identity_holds_with_previous() {
        let pairs = [(1.0, 0.8), (1.0, 1.7), (3.3, 0.1), (0.07, 12.0)];
        for (cur, prev) in pairs {
            let c = annual("2023", company(cur));
            let p = annual("2022", company(prev));
            let out = calculate_dupont(&c, Some(&p));
            let product = out.net_margin * out.asset_turnover * out.equity_multiplier;
            assert!((out.roe - product).abs() < 1e-9);

            let avg_equity = (1000.0 * cur + 1000.0 * prev) / 2.0;
            assert!((out.roe - 140.0 * cur / avg_equity).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_report_is_zero() {
        let out = calculate_dupont(&annual("2023", ReportData::default()), None);
        assert_eq!(out, DupontMetrics::default());
    }

    #[test]
    fn test_primary_driver_is_largest_change() {
        let current = DupontMetrics {
            roe: 0.2,
            net_margin: 0.10,
            asset_turnover: 1.0,
            equity_multiplier: 2.0,
        };
        let prior = DupontMetrics {
            roe: 0.12,
            net_margin: 0.08,
            asset_turnover: 1.0,
            equity_multiplier: 1.5,
        };
        let cmp = compare_dupont(&current, &prior);
        assert_eq!(cmp.primary_driver, "Financial leverage");
        assert!(approx_eq(cmp.roe_change, 0.08, 1e-12));
        assert!(approx_eq(cmp.margin_change, 0.02, 1e-12));
    }

    #[test]
    fn test_diagnosis_flags_thin_margins() {
        let m = DupontMetrics {
            roe: 0.03,
            net_margin: 0.02,
            asset_turnover: 1.0,
            equity_multiplier: 1.5,
        };
        let cmp = compare_dupont(&m, &m);
        assert!(cmp.diagnosis.starts_with("Low profit margins"));
        assert_eq!(cmp.primary_driver, "Profit margin");
    }
}
