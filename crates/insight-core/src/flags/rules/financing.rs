//! Debt, interest and cash-adequacy rules.

use super::{bn, pct};
use crate::flags::{FlagCategory, FlagContext, FlagResult};
use crate::math::safe_div;

const LOW_YIELD: f64 = 0.005;

pub fn high_cash_interest_rate(c: &FlagContext) -> FlagResult {
    let rate = safe_div(
        c.annualize(c.cash_paid_dividends_interest),
        c.avg_interest_bearing_debt,
    );
    FlagResult::red("High Cash Interest Rate", FlagCategory::Debt)
        .when(rate > 0.05)
        .value(format!("Rate: {}%", pct(rate, 1)))
        .threshold("> 5% (Distressed)")
        .logic(format!(
            "Annualized Cash Interest Paid / Avg Debt = {}% (> 5%)",
            pct(rate, 1)
        ))
        .describe(
            "Paying an excessively high rate on debt (or dividends included) can signal high-risk \
             borrowing status.",
        )
}

pub fn inverted_interest_rate(c: &FlagContext) -> FlagResult {
    FlagResult::red("Inverted Interest Rate", FlagCategory::Liquidity)
        .when(c.deposit_rate < LOW_YIELD)
        .value(format!("Yield: {}%", pct(c.deposit_rate, 2)))
        .threshold("< 0.5%")
        .logic(format!(
            "Annualized Interest Income / Avg Cash = {}% (< 0.5%)",
            pct(c.deposit_rate, 2)
        ))
        .describe(
            "Extremely low yield on cash balances suggests funds may be restricted, pledged, or \
             non-existent.",
        )
}

/// Four independent indicators; two or more trigger the flag.
pub fn high_cash_high_debt(c: &FlagContext) -> FlagResult {
    let covers_short_debt = safe_div(c.cash, c.short_term_debt + c.trading_fin_liabilities) >= 1.0
        && c.short_term_debt > 0.0;
    let leveraged = safe_div(c.interest_bearing_debt, c.total_assets) >= 0.3;
    let low_yield = c.deposit_rate < LOW_YIELD;
    let cash_outgrows_revenue =
        safe_div(c.cash_growth, c.revenue_growth) >= 2.0 && c.revenue_growth > 0.0;

    let met = [covers_short_debt, leveraged, low_yield, cash_outgrows_revenue]
        .iter()
        .filter(|&&hit| hit)
        .count();

    FlagResult::red("High-Cash, High-Debt", FlagCategory::Liquidity)
        .when(met >= 2)
        .value(format!("Criteria Met: {met}/4"))
        .threshold(">= 2 Indicators")
        .logic(format!(
            "1.Cash/ST Debt>=1: {covers_short_debt} | 2.Debt/Asset>=30%: {leveraged} | \
             3.Yield<0.5%: {low_yield} | 4.Cash/Rev Gr>=2: {cash_outgrows_revenue}"
        ))
        .describe(
            "Coexistence of high cash coverage and high debt/leverage, often indicating restricted \
             or fictitious cash.",
        )
}

pub fn other_payables_anomaly(c: &FlagContext) -> FlagResult {
    let ratio = safe_div(c.other_payables, c.total_liabilities);
    FlagResult::red("Other Payables Anomaly", FlagCategory::Debt)
        .when(ratio > 0.10)
        .value(format!("Ratio: {}%", pct(ratio, 1)))
        .threshold("> 10% of Total Liabilities")
        .logic(format!("Other Payables / Total Liabilities = {}% (> 10%)", pct(ratio, 1)))
        .describe("Can hide off-book loans or illicit financing.")
}

/// Large cash pile next to expensive debt.
pub fn kangde_xin_paradox(c: &FlagContext) -> FlagResult {
    let cash_ratio = safe_div(c.cash, c.total_assets);
    let interest_to_debt = if c.total_debt > 0.0 {
        c.annualize(c.interest_expense) / c.total_debt
    } else {
        0.0
    };
    FlagResult::red("Kangde Xin Paradox", FlagCategory::Liquidity)
        .when(cash_ratio > 0.2 && interest_to_debt > 0.05)
        .value(format!(
            "Cash/Assets: {}%, Int/Debt: {}%",
            pct(cash_ratio, 1),
            pct(interest_to_debt, 1)
        ))
        .threshold("> 20% & > 5%")
        .logic(format!(
            "Cash/Assets = {}% (threshold > 20%) & Annualized Int/Debt = {}% (threshold > 5%)",
            pct(cash_ratio, 1),
            pct(interest_to_debt, 1)
        ))
        .describe(
            "High cash balance coexisting with high-interest debt suggests cash might be \
             restricted or fictitious.",
        )
}

pub fn debt_cliff(c: &FlagContext) -> FlagResult {
    let ratio = safe_div(c.short_term_debt, c.total_debt);
    FlagResult::red("Debt Cliff", FlagCategory::Debt)
        .when(ratio > 0.5)
        .value(format!("ST Debt ratio: {}%", pct(ratio, 1)))
        .threshold("> 50%")
        .logic(format!(
            "Short-term Debt / Total Debt = {}% (threshold > 50%)",
            pct(ratio, 1)
        ))
        .describe("Reliance on short-term debt exposes the company to refinancing risks.")
}

/// Consecutive negative free cash flow, both periods annualized.
pub fn negative_fcf(c: &FlagContext) -> FlagResult {
    let current = c.annualize(c.fcf);
    let previous = c.annualize(c.prev_fcf);
    let mut value = format!("Current: {}B, Prev: {}B", bn(current), bn(previous));
    if let Some(prev2) = &c.prev2 {
        value.push_str(&format!(", Prev2: {}B", bn(c.annualize(prev2.fcf))));
    }
    FlagResult::red("Negative FCF", FlagCategory::Liquidity)
        .when(current < 0.0 && previous < 0.0)
        .value(value)
        .threshold("Negative for > 1 period")
        .logic(format!(
            "Annualized Current FCF = {}B & Annualized Previous FCF = {}B (threshold both < 0)",
            bn(current),
            bn(previous)
        ))
        .describe(
            "Free Cash Flow has been negative for consecutive periods despite any reported profits.",
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::report::accounts::{balance, cash_flow, income};
    use crate::report::ReportData;
    use pretty_assertions::assert_eq;

    fn single(data: ReportData) -> FlagContext {
        FlagContext::build(&annual("2023", data.clone()), &annual("2022", data), None)
    }

    #[test]
    fn test_high_cash_high_debt_counts_criteria() {
        // Cash 300 covers short debt 150, debt 450 / assets 1000, yield 0
        let data = ReportData::default()
            .with_value(balance::MONETARY_FUNDS, 300.0)
            .with_value(balance::SHORT_TERM_BORROWINGS, 150.0)
            .with_value(balance::LONG_TERM_BORROWINGS, 300.0)
            .with_value(balance::TOTAL_ASSETS, 1000.0);
        let flag = high_cash_high_debt(&single(data));
        assert!(flag.status);
        assert_eq!(flag.value, "Criteria Met: 3/4");
        assert_eq!(
            flag.logic,
            "1.Cash/ST Debt>=1: true | 2.Debt/Asset>=30%: true | 3.Yield<0.5%: true | 4.Cash/Rev Gr>=2: false"
        );
    }

    #[test]
    fn test_inverted_rate_uses_two_decimals() {
        let data = company(1.0).with_value(income::INTEREST_INCOME, 1.2);
        let flag = inverted_interest_rate(&single(data));
        assert!(flag.status);
        assert_eq!(flag.value, "Yield: 0.40%");
    }

    #[test]
    fn test_debt_cliff() {
        let data = ReportData::default()
            .with_value(balance::SHORT_TERM_BORROWINGS, 300.0)
            .with_value(balance::LONG_TERM_BORROWINGS, 100.0);
        let flag = debt_cliff(&single(data));
        assert!(flag.status);
        assert_eq!(flag.value, "ST Debt ratio: 75.0%");
        assert!(!debt_cliff(&single(ReportData::default())).status);
    }

    #[test]
    fn test_negative_fcf_lists_third_period() {
        let burn = |ocf: f64| {
            ReportData::default()
                .with_value(cash_flow::OPERATING_NET, ocf)
                .with_value(cash_flow::CAPEX, 2e8)
        };
        let ctx = FlagContext::build(
            &annual("2023", burn(1e8)),
            &annual("2022", burn(0.5e8)),
            Some(&annual("2021", burn(3e8))),
        );
        let flag = negative_fcf(&ctx);
        assert!(flag.status);
        assert_eq!(flag.value, "Current: -1.00B, Prev: -1.50B, Prev2: 1.00B");
    }

    #[test]
    fn test_positive_fcf_is_clear() {
        assert!(!negative_fcf(&single(company(1.0))).status);
    }
}
