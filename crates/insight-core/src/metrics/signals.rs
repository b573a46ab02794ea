//! Compact signals view: five headline ratios in four categories.
//!
//! This table is deliberately separate from [`super::ratios`]; it uses its
//! own category names, plain-ratio leverage and one-decimal percentages.

use super::{Metric, MetricRule};
use crate::format::ValueFormat;
use crate::math::{average, safe_div};
use crate::report::accounts::{balance, income};
use crate::report::ReportData;

#[derive(Debug, Clone, Default)]
pub struct SignalInputs {
    pub revenue: f64,
    pub cost_of_sales: f64,
    pub net_income: f64,
    pub total_liabilities: f64,
    pub equity: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub avg_assets: f64,
}

impl SignalInputs {
    pub fn extract(current: &ReportData, previous: Option<&ReportData>) -> Self {
        let v = |path: &str| current.value(path);
        SignalInputs {
            revenue: v(income::REVENUE),
            cost_of_sales: v(income::OPERATING_COST),
            net_income: v(income::NET_PROFIT_PARENT),
            total_liabilities: v(balance::TOTAL_LIABILITIES),
            equity: v(balance::TOTAL_PARENT_EQUITY),
            current_assets: v(balance::TOTAL_CURRENT_ASSETS),
            current_liabilities: v(balance::TOTAL_CURRENT_LIABILITIES),
            avg_assets: average(
                v(balance::TOTAL_ASSETS),
                previous.map(|p| p.value(balance::TOTAL_ASSETS)),
            ),
        }
    }
}

pub static SIGNAL_RULES: &[MetricRule<SignalInputs>] = &[
    MetricRule {
        category: "Profitability",
        name: "Gross Margin",
        description: "Gross profit as a share of revenue",
        formula: "(Revenue - COGS) / Revenue",
        format: ValueFormat::PercentShort,
        compute: |i| safe_div(i.revenue - i.cost_of_sales, i.revenue),
    },
    MetricRule {
        category: "Profitability",
        name: "Net Profit Margin",
        description: "Net income attributable to parent per unit of revenue",
        formula: "Net Income / Revenue",
        format: ValueFormat::PercentShort,
        compute: |i| safe_div(i.net_income, i.revenue),
    },
    MetricRule {
        category: "Leverage",
        name: "Debt-to-Equity",
        description: "Liabilities per unit of shareholders' equity",
        formula: "Total Liabilities / Shareholders' Equity",
        format: ValueFormat::Number,
        compute: |i| safe_div(i.total_liabilities, i.equity),
    },
    MetricRule {
        category: "Liquidity",
        name: "Current Ratio",
        description: "Current assets covering current liabilities",
        formula: "Current Assets / Current Liabilities",
        format: ValueFormat::Number,
        compute: |i| safe_div(i.current_assets, i.current_liabilities),
    },
    MetricRule {
        category: "Efficiency",
        name: "Asset Turnover",
        description: "Revenue generated per unit of average assets",
        formula: "Revenue / Avg Total Assets",
        format: ValueFormat::Number,
        compute: |i| safe_div(i.revenue, i.avg_assets),
    },
];

pub fn calculate_signals(current: &ReportData, previous: Option<&ReportData>) -> Vec<Metric> {
    let inputs = SignalInputs::extract(current, previous);
    SIGNAL_RULES.iter().map(|rule| rule.evaluate(&inputs)).collect()
}
