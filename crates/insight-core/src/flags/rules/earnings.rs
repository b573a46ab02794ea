//! Earnings-quality rules: what profit is made of and whether cash backs it.

use super::pct;
use crate::flags::{FlagCategory, FlagContext, FlagResult};
use crate::format::to_fixed;
use crate::math::safe_div;

/// One income item measured against a profit base.
fn reliance(
    name: &str,
    ratio: f64,
    limit: f64,
    threshold: &str,
    label: &str,
    description: &str,
) -> FlagResult {
    FlagResult::red(name, FlagCategory::Earnings)
        .when(ratio > limit)
        .value(format!("Ratio: {}%", pct(ratio, 1)))
        .threshold(threshold)
        .logic(format!("{label} = {}% (> {}%)", pct(ratio, 1), pct(limit, 0)))
        .describe(description)
}

pub fn asset_disposal_reliance(c: &FlagContext) -> FlagResult {
    reliance(
        "Asset Disposal Reliance",
        safe_div(c.asset_disposal_income, c.net_profit),
        0.20,
        "> 20% of Net Profit",
        "Asset Disposal Income / Net Profit",
        "Relying on selling assets to generate profit is unsustainable and masks core business weakness.",
    )
}

pub fn asset_impairment_surge(c: &FlagContext) -> FlagResult {
    reliance(
        "Asset Impairment Surge",
        safe_div(c.asset_impairment, c.operating_profit),
        0.20,
        "> 20% of Op Profit",
        "Asset Impairment / Op Profit",
        "Large write-downs ('Big Bath') indicate inflated past earnings or clearing decks for future.",
    )
}

pub fn credit_impairment_surge(c: &FlagContext) -> FlagResult {
    reliance(
        "Credit Impairment Surge",
        safe_div(c.credit_impairment, c.operating_profit),
        0.15,
        "> 15% of Op Profit",
        "Credit Impairment / Op Profit",
        "Sharp deterioration in receivables quality, suggesting customer defaults.",
    )
}

pub fn non_operating_revenue_dependency(c: &FlagContext) -> FlagResult {
    reliance(
        "Non-Operating Rev Dependency",
        safe_div(c.non_operating_revenue, c.total_profit),
        0.20,
        "> 20% of Total Profit",
        "Non-op Revenue / Total Profit",
        "Earnings driven by grants/fines rather than operations are low quality.",
    )
}

pub fn fair_value_reliance(c: &FlagContext) -> FlagResult {
    reliance(
        "Fair Value Reliance",
        safe_div(c.fair_value_change, c.net_profit),
        0.30,
        "> 30% of Net Profit",
        "Fair Value Income / Net Profit",
        "Profits driven by paper gains are risky and don't reflect cash generation.",
    )
}

pub fn investment_income_reliance(c: &FlagContext) -> FlagResult {
    reliance(
        "Investment Income Reliance",
        safe_div(c.investment_income, c.operating_profit),
        0.30,
        "> 30% of Op Profit",
        "Inv Income / Op Profit",
        "Reliance on trading stocks or subsidiaries rather than main product.",
    )
}

pub fn other_income_reliance(c: &FlagContext) -> FlagResult {
    reliance(
        "Other Income Reliance",
        safe_div(c.other_income, c.operating_profit),
        0.30,
        "> 30% of Op Profit",
        "Other Income / Op Profit",
        "Profit derived from 'Other Income' is often non-persistent.",
    )
}

pub fn other_cash_received_anomaly(c: &FlagContext) -> FlagResult {
    let ratio = safe_div(c.other_cash_received_operating, c.ocf_inflow);
    FlagResult::red("Other Cash Received Anomaly", FlagCategory::Earnings)
        .when(ratio > 0.10)
        .value(format!("Ratio: {}%", pct(ratio, 1)))
        .threshold("> 10% of Op Inflow")
        .logic(format!(
            "Other Op Cash In / Total Op Inflow = {}% (> 10%)",
            pct(ratio, 1)
        ))
        .describe("Often used to hide non-operating cash to inflate OCF.")
}

pub fn cash_profit_divergence(c: &FlagContext) -> FlagResult {
    FlagResult::red("Cash-Profit Divergence", FlagCategory::Earnings)
        .when(c.net_income_growth > 0.1 && c.ocf_growth <= 0.0)
        .value(format!(
            "NI Growth: {}%, OCF Growth: {}%",
            pct(c.net_income_growth, 1),
            pct(c.ocf_growth, 1)
        ))
        .threshold("NI > 10% & OCF <= 0%")
        .logic(format!(
            "NI Growth = {}% (threshold > 10%) & OCF Growth = {}% (threshold <= 0%)",
            pct(c.net_income_growth, 1),
            pct(c.ocf_growth, 1)
        ))
        .describe(
            "Profits are growing rapidly while cash flow is stagnant or falling, indicating low \
             quality earnings.",
        )
}

pub fn low_ocf_to_net_income(c: &FlagContext) -> FlagResult {
    let ratio = c.ocf / c.net_profit_parent;
    FlagResult::red("Low OCF/NI Ratio", FlagCategory::Earnings)
        .when(ratio < 0.8)
        .value(format!("Ratio: {}", to_fixed(ratio, 2)))
        .threshold("< 0.8")
        .logic(format!("OCF / Net Income = {} (threshold < 0.8)", to_fixed(ratio, 2)))
        .describe("Operating cash flow is significantly lower than reported net income.")
}

pub fn high_total_accruals(c: &FlagContext) -> FlagResult {
    let ratio = c.annualize(c.net_profit_parent - c.ocf) / c.total_assets;
    FlagResult::red("High Total Accruals", FlagCategory::Earnings)
        .when(ratio > 0.1)
        .value(format!("Accruals/Assets: {}%", pct(ratio, 1)))
        .threshold("> 10%")
        .logic(format!(
            "Annualized (NI - OCF) / Total Assets = {}% (threshold > 10%)",
            pct(ratio, 1)
        ))
        .describe("Earnings are driven heavily by non-cash accruals rather than cash flow.")
}

pub fn non_core_revenue_dependence(c: &FlagContext) -> FlagResult {
    let ratio = c.other_income / c.ebit;
    FlagResult::red("Non-Core Revenue Dependence", FlagCategory::Earnings)
        .when(ratio > 0.15)
        .value(format!("Other Income/EBIT: {}%", pct(ratio, 1)))
        .threshold("> 15%")
        .logic(format!("Other Income / EBIT = {}% (threshold > 15%)", pct(ratio, 1)))
        .describe("A large share of operating earnings comes from outside the core business.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::report::accounts::{cash_flow, income};
    use crate::report::ReportData;
    use pretty_assertions::assert_eq;

    fn single(data: ReportData) -> FlagContext {
        FlagContext::build(&annual("2023", data.clone()), &annual("2022", data), None)
    }

    #[test]
    fn test_reliance_logic_text() {
        let data = company(1.0).with_value(income::INVESTMENT_INCOME, 72.0);
        let flag = investment_income_reliance(&single(data));
        assert!(flag.status);
        assert_eq!(flag.value, "Ratio: 40.0%");
        assert_eq!(flag.logic, "Inv Income / Op Profit = 40.0% (> 30%)");
    }

    #[test]
    fn test_zero_operating_profit_never_triggers() {
        let data = ReportData::default().with_value(income::ASSET_IMPAIRMENT_LOSS, -50.0);
        assert!(!asset_impairment_surge(&single(data)).status);
    }

    #[test]
    fn test_cash_profit_divergence() {
        let prev = company(1.0);
        let curr = company(1.0)
            .with_value(income::NET_PROFIT_PARENT, 170.0)
            .with_value(cash_flow::OPERATING_NET, 200.0);
        let ctx = FlagContext::build(&annual("2023", curr), &annual("2022", prev), None);
        let flag = cash_profit_divergence(&ctx);
        assert!(flag.status);
        assert_eq!(flag.value, "NI Growth: 21.4%, OCF Growth: -9.1%");
    }

    #[test]
    fn test_accruals_and_low_ocf() {
        let data = company(1.0).with_value(cash_flow::OPERATING_NET, -100.0);
        let ctx = single(data);
        // (140 + 100) / 2000
        let accruals = high_total_accruals(&ctx);
        assert!(accruals.status);
        assert_eq!(accruals.value, "Accruals/Assets: 12.0%");
        assert!(low_ocf_to_net_income(&ctx).status);
    }

    #[test]
    fn test_non_core_revenue_dependence() {
        // 40 / (185 + 25)
        let data = company(1.0).with_value(income::OTHER_INCOME, 40.0);
        let flag = non_core_revenue_dependence(&single(data));
        assert!(flag.status);
        assert_eq!(flag.value, "Other Income/EBIT: 19.0%");
    }
}
