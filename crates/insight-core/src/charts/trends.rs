//! Income-statement and return trends.

use super::aggregations::main_business_profit;
use super::{scaled, ChartRow};
use crate::math::{average, safe_div, safe_growth};
use crate::metrics::calculate_dupont;
use crate::report::accounts::{balance, income};
use crate::report::StandardizedReport;

/// Pairs each report with the element before it (none for the first).
fn with_previous<'a>(
    reports: &'a [&'a StandardizedReport],
) -> impl Iterator<Item = (&'a StandardizedReport, Option<&'a StandardizedReport>)> + 'a {
    reports
        .iter()
        .enumerate()
        .map(move |(i, r)| (*r, i.checked_sub(1).map(|p| reports[p])))
}

fn averaged(
    current: &StandardizedReport,
    previous: Option<&StandardizedReport>,
    path: &str,
) -> f64 {
    average(current.data.value(path), previous.map(|p| p.data.value(path)))
}

/// ROE on average parent equity, net and gross margin, all in percent.
pub fn profitability(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    with_previous(reports)
        .map(|(r, prev)| {
            let d = &r.data;
            let revenue = d.value(income::REVENUE);
            let net_income = d.value(income::NET_PROFIT_PARENT);
            let gross_profit = revenue - d.value(income::OPERATING_COST);
            let avg_equity = averaged(r, prev, balance::TOTAL_PARENT_EQUITY);
            ChartRow::new(&r.fiscal_year)
                .with("ROE", safe_div(net_income, avg_equity) * 100.0)
                .with("Net Margin", safe_div(net_income, revenue) * 100.0)
                .with("Gross Margin", safe_div(gross_profit, revenue) * 100.0)
        })
        .collect()
}

/// Turnover ratios against balances averaged with the previous element.
pub fn efficiency(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    with_previous(reports)
        .map(|(r, prev)| {
            let revenue = r.data.value(income::REVENUE);
            let cogs = r.data.value(income::OPERATING_COST);
            ChartRow::new(&r.fiscal_year)
                .with(
                    "Inventory Turnover",
                    safe_div(cogs, averaged(r, prev, balance::INVENTORIES)),
                )
                .with(
                    "AR Turnover",
                    safe_div(revenue, averaged(r, prev, balance::NOTES_AND_ACCOUNTS_RECEIVABLE)),
                )
                .with(
                    "Fixed Asset Turnover",
                    safe_div(revenue, averaged(r, prev, balance::FIXED_ASSETS)),
                )
                .with(
                    "Total Asset Turnover",
                    safe_div(revenue, averaged(r, prev, balance::TOTAL_ASSETS)),
                )
        })
        .collect()
}

/// Each cost line as a percentage of revenue, with main business profit as the remainder.
pub fn cost_structure(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    reports
        .iter()
        .map(|r| {
            let d = &r.data;
            let revenue = d.value(income::REVENUE);
            let share = |amount: f64| safe_div(amount, revenue) * 100.0;
            ChartRow::new(&r.fiscal_year)
                .with("COGS", share(d.value(income::OPERATING_COST)))
                .with("Tax & Surcharge", share(d.value(income::TAXES_AND_SURCHARGES)))
                .with("Selling Exp", share(d.value(income::SELLING_EXPENSES)))
                .with("Admin Exp", share(d.value(income::ADMIN_EXPENSES)))
                .with("R&D Exp", share(d.value(income::RD_EXPENSES)))
                .with("Main Profit", share(main_business_profit(d)))
        })
        .collect()
}

/// Contributions to profit; costs are plotted negative.
pub fn profit_sources(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    reports
        .iter()
        .map(|r| {
            let d = &r.data;
            let impairment =
                d.value(income::ASSET_IMPAIRMENT_LOSS) + d.value(income::CREDIT_IMPAIRMENT_LOSS);
            ChartRow::new(&r.fiscal_year)
                .with("Main Business Profit", scaled(main_business_profit(d)))
                .with("Finance Expense", -scaled(d.value(income::FINANCIAL_EXPENSES_AMOUNT)))
                .with("Impairment Loss", -scaled(impairment))
                .with("Fair Value Change", scaled(d.value(income::FAIR_VALUE_CHANGE_INCOME)))
                .with("Investment Income", scaled(d.value(income::INVESTMENT_INCOME)))
                .with("Asset Disposal", scaled(d.value(income::ASSET_DISPOSAL_INCOME)))
                .with("Other Income", scaled(d.value(income::OTHER_INCOME)))
                .with("Non-op Revenue", scaled(d.value(income::NON_OPERATING_REVENUE)))
                .with("Non-op Expense", -scaled(d.value(income::NON_OPERATING_EXPENSES)))
        })
        .collect()
}

/// Revenue and net profit with growth on the previous element.
///
/// Revenue growth divides by the signed prior value, net profit growth by
/// its absolute value; both read `0` for the first element.
pub fn growth(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    with_previous(reports)
        .map(|(r, prev)| {
            let revenue = r.data.value(income::REVENUE);
            let net = r.data.value(income::NET_PROFIT_PARENT);
            let prev_revenue = prev.map_or(0.0, |p| p.data.value(income::REVENUE));
            let prev_net = prev.map_or(0.0, |p| p.data.value(income::NET_PROFIT_PARENT));
            ChartRow::new(&r.fiscal_year)
                .with("Revenue", scaled(revenue))
                .with(
                    "Revenue Growth",
                    safe_div(revenue - prev_revenue, prev_revenue) * 100.0,
                )
                .with("Net Profit", scaled(net))
                .with("Net Profit Growth", safe_growth(net, prev_net) * 100.0)
        })
        .collect()
}

/// DuPont components per period, averaged against the previous element.
pub fn dupont(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    with_previous(reports)
        .map(|(r, prev)| {
            let m = calculate_dupont(r, prev);
            ChartRow::new(&r.fiscal_year)
                .with("ROE", m.roe * 100.0)
                .with("Net Margin", m.net_margin * 100.0)
                .with("Asset Turnover", m.asset_turnover)
                .with("Equity Multiplier", m.equity_multiplier)
        })
        .collect()
}
