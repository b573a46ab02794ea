//! Positive indicators of financial health.

use crate::flags::{FlagCategory, FlagContext, FlagResult};
use crate::format::to_fixed;
use crate::math::safe_div;

pub fn cash_backed_profits(c: &FlagContext) -> FlagResult {
    let ratio = c.ocf / c.net_profit_parent;
    FlagResult::green("Cash-Backed Profits", FlagCategory::Earnings)
        .when(ratio > 1.1)
        .value(format!("Ratio: {}", to_fixed(ratio, 2)))
        .threshold("> 1.1")
        .logic(format!("OCF / Net Income = {} (threshold > 1.1)", to_fixed(ratio, 2)))
        .describe("Operating Cash Flow exceeds Net Income, indicating high quality of earnings.")
}

pub fn self_funding(c: &FlagContext) -> FlagResult {
    let ratio = c.ocf / c.capex;
    FlagResult::green("Self-Funding", FlagCategory::Growth)
        .when(ratio > 1.5)
        .value(format!("Ratio: {}", to_fixed(ratio, 2)))
        .threshold("> 1.5")
        .logic(format!("OCF / Capex = {} (threshold > 1.5)", to_fixed(ratio, 2)))
        .describe(
            "The company generates enough cash to fully fund its capital expenditures and growth.",
        )
}

pub fn conservative_leverage(c: &FlagContext) -> FlagResult {
    let net_debt = c.interest_bearing_debt - c.cash;
    let ebitda = c.annualize(c.total_profit + c.interest_expense + c.depreciation);
    let leverage = safe_div(net_debt, ebitda);
    FlagResult::green("Conservative Leverage", FlagCategory::Debt)
        .when(leverage < 2.0 && net_debt > 0.0)
        .value(format!("Net Debt/EBITDA: {}", to_fixed(leverage, 2)))
        .threshold("< 2.0x")
        .logic(format!(
            "Net Debt / Annualized EBITDA = {} (threshold < 2.0x)",
            to_fixed(leverage, 2)
        ))
        .describe("Debt levels are low relative to earnings, indicating a strong balance sheet.")
}
