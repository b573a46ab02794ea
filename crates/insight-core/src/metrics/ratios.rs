//! The full ratio set: six categories over one period and its predecessor.

use tracing::debug;

use super::{Metric, MetricRule};
use crate::format::ValueFormat;
use crate::math::{average, safe_div};
use crate::report::accounts::{balance, cash_flow, income};
use crate::report::ReportData;

const PROFITABILITY: &str = "Profitability & Margins";
const RETURNS: &str = "Return on Investment";
const SOLVENCY: &str = "Solvency & Liquidity";
const EFFICIENCY: &str = "Operating Efficiency";
const CASH_FLOW: &str = "Cash Flow Quality";
const GROWTH: &str = "Growth Indicators";

/// Category order used by the ratios board.
pub const CATEGORIES: [&str; 6] = [PROFITABILITY, RETURNS, SOLVENCY, EFFICIENCY, CASH_FLOW, GROWTH];

// ---------------------------------------------------------------------------
// Extracted inputs
// ---------------------------------------------------------------------------

/// Line items of the current period plus the averages that need a predecessor.
#[derive(Debug, Clone, Default)]
pub struct RatioInputs {
    pub revenue: f64,
    pub cost_of_sales: f64,
    pub selling_expenses: f64,
    pub admin_expenses: f64,
    pub finance_expenses: f64,
    pub rd_expenses: f64,
    pub impairment: f64,
    pub operating_profit: f64,
    pub total_profit: f64,
    pub net_income: f64,
    pub income_tax: f64,
    pub interest_expense: f64,
    pub interest_paid: f64,
    pub ebit: f64,
    pub tax_rate: f64,

    pub total_assets: f64,
    pub total_liabilities: f64,
    pub equity: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub inventory: f64,
    pub receivables: f64,
    pub monetary_funds: f64,
    pub trading_assets: f64,
    pub interest_bearing_debt: f64,
    pub invested_capital: f64,

    pub ocf: f64,
    pub capex: f64,
    pub sales_cash: f64,
    pub fcf: f64,

    pub avg_assets: f64,
    pub avg_equity: f64,
    pub avg_inventory: f64,
    pub avg_receivables: f64,
    pub avg_interest_bearing_debt: f64,

    pub prev_revenue: f64,
    pub prev_net_income: f64,
    pub prev_ocf: f64,
}

fn interest_bearing_debt(data: Option<&ReportData>) -> f64 {
    crate::report::path::sum_values(
        data,
        &[
            balance::SHORT_TERM_BORROWINGS,
            balance::NON_CURRENT_LIABILITIES_DUE_1Y,
            balance::LONG_TERM_BORROWINGS,
            balance::BONDS_PAYABLE,
        ],
    )
}

impl RatioInputs {
    pub fn extract(current: &ReportData, previous: Option<&ReportData>) -> Self {
        let v = |path: &str| current.value(path);
        let pv = |path: &str| previous.map(|p| p.value(path));

        let revenue = v(income::REVENUE);
        // Some filings carry finance expense as a bare number.
        let finance_amount = v(income::FINANCIAL_EXPENSES_AMOUNT);
        let finance_expenses = if finance_amount != 0.0 {
            finance_amount
        } else {
            v(income::FINANCIAL_EXPENSES)
        };
        let total_profit = v(income::TOTAL_PROFIT);
        let income_tax = v(income::INCOME_TAX);
        let interest_expense = v(income::INTEREST_EXPENSES);
        let ebit = total_profit + interest_expense;

        let equity = v(balance::TOTAL_PARENT_EQUITY);
        let inventory = v(balance::INVENTORIES);
        let receivables = v(balance::NOTES_AND_ACCOUNTS_RECEIVABLE);
        let total_assets = v(balance::TOTAL_ASSETS);
        let ibd = interest_bearing_debt(Some(current));
        let prev_ibd = previous.map(|p| interest_bearing_debt(Some(p)));

        let ocf = v(cash_flow::OPERATING_NET);
        let capex = v(cash_flow::CAPEX);

        RatioInputs {
            revenue,
            cost_of_sales: v(income::OPERATING_COST),
            selling_expenses: v(income::SELLING_EXPENSES),
            admin_expenses: v(income::ADMIN_EXPENSES),
            finance_expenses,
            rd_expenses: v(income::RD_EXPENSES),
            impairment: v(income::ASSET_IMPAIRMENT_LOSS) + v(income::CREDIT_IMPAIRMENT_LOSS),
            operating_profit: v(income::OPERATING_PROFIT),
            total_profit,
            net_income: v(income::NET_PROFIT_PARENT),
            income_tax,
            interest_expense,
            interest_paid: v(cash_flow::DIVIDENDS_AND_INTEREST_PAID),
            ebit,
            tax_rate: safe_div(income_tax, total_profit),

            total_assets,
            total_liabilities: v(balance::TOTAL_LIABILITIES),
            equity,
            current_assets: v(balance::TOTAL_CURRENT_ASSETS),
            current_liabilities: v(balance::TOTAL_CURRENT_LIABILITIES),
            inventory,
            receivables,
            monetary_funds: v(balance::MONETARY_FUNDS),
            trading_assets: v(balance::TRADING_FINANCIAL_ASSETS)
                + v(balance::FVPL_TRADING_FINANCIAL_ASSETS),
            interest_bearing_debt: ibd,
            invested_capital: equity + ibd,

            ocf,
            capex,
            sales_cash: v(cash_flow::CASH_FROM_SALES),
            fcf: ocf - capex,

            avg_assets: average(total_assets, pv(balance::TOTAL_ASSETS)),
            avg_equity: average(equity, pv(balance::TOTAL_PARENT_EQUITY)),
            avg_inventory: average(inventory, pv(balance::INVENTORIES)),
            avg_receivables: average(receivables, pv(balance::NOTES_AND_ACCOUNTS_RECEIVABLE)),
            avg_interest_bearing_debt: average(ibd, prev_ibd),

            prev_revenue: pv(income::REVENUE).unwrap_or(0.0),
            prev_net_income: pv(income::NET_PROFIT_PARENT).unwrap_or(0.0),
            prev_ocf: pv(cash_flow::OPERATING_NET).unwrap_or(0.0),
        }
    }

    fn inventory_turnover(&self) -> f64 {
        safe_div(self.cost_of_sales, self.avg_inventory)
    }

    fn receivables_turnover(&self) -> f64 {
        safe_div(self.revenue, self.avg_receivables)
    }

    fn days_inventory(&self) -> f64 {
        safe_div(365.0, self.inventory_turnover())
    }

    fn days_sales(&self) -> f64 {
        safe_div(365.0, self.receivables_turnover())
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

type Rule = MetricRule<RatioInputs>;

macro_rules! rule {
    ($cat:expr, $name:expr, $fmt:ident, $desc:expr, $formula:expr, $compute:expr) => {
        Rule {
            category: $cat,
            name: $name,
            description: $desc,
            formula: $formula,
            format: ValueFormat::$fmt,
            compute: $compute,
        }
    };
}

pub static RATIO_RULES: &[Rule] = &[
    // Profitability & Margins
    rule!(
        PROFITABILITY,
        "Gross Margin",
        Percent,
        "Gross profit as a share of revenue",
        "(Revenue - COGS) / Revenue",
        |i| safe_div(i.revenue - i.cost_of_sales, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "Net Profit Margin",
        Percent,
        "Net income attributable to parent per unit of revenue",
        "Net Income / Revenue",
        |i| safe_div(i.net_income, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "Cost of Sales Ratio",
        Percent,
        "Cost of sales as a share of revenue",
        "COGS / Revenue",
        |i| safe_div(i.cost_of_sales, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "Expense of Sales Ratio",
        Percent,
        "Period expenses as a share of revenue",
        "(Selling + Admin + Finance Exp) / Revenue",
        |i| safe_div(i.selling_expenses + i.admin_expenses + i.finance_expenses, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "EBIT Margin",
        Percent,
        "Earnings before interest and tax per unit of revenue",
        "EBIT / Total Revenue",
        |i| safe_div(i.ebit, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "Operating Margin",
        Percent,
        "Operating profit per unit of revenue",
        "Operating Income / Total Revenue",
        |i| safe_div(i.operating_profit, i.revenue)
    ),
    rule!(
        PROFITABILITY,
        "Asset Impairment Ratio",
        Percent,
        "Asset and credit impairment losses relative to revenue",
        "Asset Impairment Loss / Total Revenue",
        |i| safe_div(i.impairment, i.revenue)
    ),
    // Return on Investment
    rule!(
        RETURNS,
        "ROE",
        Percent,
        "Return on average shareholders' equity",
        "Net Income / Avg Shareholders' Equity",
        |i| safe_div(i.net_income, i.avg_equity)
    ),
    rule!(
        RETURNS,
        "ROA",
        Percent,
        "Return on average total assets",
        "Net Income / Avg Total Assets",
        |i| safe_div(i.net_income, i.avg_assets)
    ),
    rule!(
        RETURNS,
        "ROIC",
        Percent,
        "After-tax operating return on invested capital",
        "EBIT * (1 - Tax Rate) / Invested Capital",
        |i| safe_div(i.ebit * (1.0 - i.tax_rate), i.invested_capital)
    ),
    rule!(
        RETURNS,
        "CFROI (Proxy)",
        Percent,
        "Cash-flow return on invested capital (proxy)",
        "Operating Cash Flow / Invested Capital",
        |i| safe_div(i.ocf, i.invested_capital)
    ),
    rule!(
        RETURNS,
        "CROIC",
        Percent,
        "Free-cash-flow return on invested capital",
        "Free Cash Flow / (Equity + Debt)",
        |i| safe_div(i.fcf, i.invested_capital)
    ),
    // Solvency & Liquidity
    rule!(
        SOLVENCY,
        "Current Ratio",
        Number,
        "Current assets covering current liabilities",
        "Current Assets / Current Liabilities",
        |i| safe_div(i.current_assets, i.current_liabilities)
    ),
    rule!(
        SOLVENCY,
        "Quick Ratio",
        Number,
        "Current assets excluding inventory over current liabilities",
        "(Current Assets - Inventory) / Current Liabilities",
        |i| safe_div(i.current_assets - i.inventory, i.current_liabilities)
    ),
    rule!(
        SOLVENCY,
        "Cash Ratio",
        Number,
        "Cash and trading assets over current liabilities",
        "(Cash + Cash Equiv) / Current Liabilities",
        |i| safe_div(i.monetary_funds + i.trading_assets, i.current_liabilities)
    ),
    rule!(
        SOLVENCY,
        "Debt to Assets",
        Percent,
        "Share of assets financed by liabilities",
        "Total Liabilities / Total Assets",
        |i| safe_div(i.total_liabilities, i.total_assets)
    ),
    rule!(
        SOLVENCY,
        "Debt to Equity",
        Percent,
        "Liabilities relative to shareholders' equity",
        "Total Liabilities / Shareholders' Equity",
        |i| safe_div(i.total_liabilities, i.equity)
    ),
    rule!(
        SOLVENCY,
        "Interest Coverage",
        Number,
        "Times interest earned",
        "EBIT / Interest Expense",
        |i| safe_div(i.ebit, i.interest_expense)
    ),
    rule!(
        SOLVENCY,
        "Accrued Interest Rate",
        Percent,
        "Booked interest cost of interest-bearing debt",
        "Interest Expense / Avg Total Debt",
        |i| safe_div(i.interest_expense, i.avg_interest_bearing_debt)
    ),
    rule!(
        SOLVENCY,
        "Cash Interest Rate",
        Percent,
        "Cash interest cost of interest-bearing debt",
        "Interest Paid (Proxy) / Avg Total Debt",
        |i| safe_div(i.interest_paid, i.avg_interest_bearing_debt)
    ),
    rule!(
        SOLVENCY,
        "Operating Cash Flow Ratio",
        Number,
        "Operating cash flow covering current liabilities",
        "Operating Cash Flow / Current Liabilities",
        |i| safe_div(i.ocf, i.current_liabilities)
    ),
    rule!(
        SOLVENCY,
        "NWC to Assets",
        Percent,
        "Net working capital as a share of total assets",
        "(Current Assets - Current Liabilities) / Total Assets",
        |i| safe_div(i.current_assets - i.current_liabilities, i.total_assets)
    ),
    rule!(
        SOLVENCY,
        "Net Debt",
        HundredMillions,
        "Net debt (hundred millions)",
        "Interest Bearing Debt - Cash",
        |i| i.interest_bearing_debt - i.monetary_funds
    ),
    // Operating Efficiency
    rule!(
        EFFICIENCY,
        "Selling Expense Ratio",
        Percent,
        "Selling expenses as a share of revenue",
        "Selling Expenses / Revenue",
        |i| safe_div(i.selling_expenses, i.revenue)
    ),
    rule!(
        EFFICIENCY,
        "Admin Expense Ratio",
        Percent,
        "Administrative expenses as a share of revenue",
        "Administrative Expenses / Revenue",
        |i| safe_div(i.admin_expenses, i.revenue)
    ),
    rule!(
        EFFICIENCY,
        "R&D Expense Ratio",
        Percent,
        "R&D expenses as a share of revenue",
        "R&D Expenses / Revenue",
        |i| safe_div(i.rd_expenses, i.revenue)
    ),
    rule!(
        EFFICIENCY,
        "Inventory Turnover",
        Number,
        "Times inventory is turned over per period",
        "COGS / Avg Inventory",
        RatioInputs::inventory_turnover
    ),
    rule!(
        EFFICIENCY,
        "Days Inventory Outstanding",
        Days,
        "Days of inventory on hand",
        "365 / Inventory Turnover",
        RatioInputs::days_inventory
    ),
    rule!(
        EFFICIENCY,
        "AR Turnover",
        Number,
        "Times receivables are collected per period",
        "Revenue / Avg AR",
        RatioInputs::receivables_turnover
    ),
    rule!(
        EFFICIENCY,
        "Days Sales Outstanding",
        Days,
        "Days to collect receivables",
        "365 / AR Turnover",
        RatioInputs::days_sales
    ),
    rule!(
        EFFICIENCY,
        "Total Asset Turnover",
        Number,
        "Revenue generated per unit of average assets",
        "Revenue / Avg Total Assets",
        |i| safe_div(i.revenue, i.avg_assets)
    ),
    rule!(
        EFFICIENCY,
        "Operating Cycle",
        Days,
        "Inventory days plus collection days",
        "DIO + DSO",
        |i| i.days_inventory() + i.days_sales()
    ),
    rule!(
        EFFICIENCY,
        "Working Capital",
        HundredMillions,
        "Working capital (hundred millions)",
        "Current Assets - Current Liabilities",
        |i| i.current_assets - i.current_liabilities
    ),
    // Cash Flow Quality
    rule!(
        CASH_FLOW,
        "OCF to Revenue",
        Percent,
        "Operating cash flow per unit of revenue",
        "Operating Cash Flow / Revenue",
        |i| safe_div(i.ocf, i.revenue)
    ),
    rule!(
        CASH_FLOW,
        "OCF to Operating Income",
        Number,
        "Cash backing of operating profit",
        "Operating Cash Flow / Operating Income",
        |i| safe_div(i.ocf, i.operating_profit)
    ),
    rule!(
        CASH_FLOW,
        "Free Cash Flow (FCFF)",
        HundredMillions,
        "Free cash flow to the firm (hundred millions)",
        "OCF - Capex (Simplified)",
        |i| i.fcf
    ),
    rule!(
        CASH_FLOW,
        "Cash Collection Ratio",
        Percent,
        "Cash received from sales per unit of revenue",
        "Cash Received from Sales / Revenue",
        |i| safe_div(i.sales_cash, i.revenue)
    ),
    rule!(
        CASH_FLOW,
        "OCF to Debt",
        Percent,
        "Operating cash flow relative to total liabilities",
        "Operating Cash Flow / Total Liabilities",
        |i| safe_div(i.ocf, i.total_liabilities)
    ),
    rule!(
        CASH_FLOW,
        "OCF to Capex",
        Number,
        "Operating cash flow covering capital expenditure",
        "Operating Cash Flow / Capital Expenditures",
        |i| safe_div(i.ocf, i.capex)
    ),
];

/// Growth rules; only evaluated when a previous period exists.
pub static GROWTH_RULES: &[Rule] = &[
    rule!(
        GROWTH,
        "Revenue Growth (YoY)",
        Percent,
        "Growth in total operating revenue",
        "(Current Revenue - Prev) / Prev",
        |i| safe_div(i.revenue - i.prev_revenue, i.prev_revenue)
    ),
    rule!(
        GROWTH,
        "Net Profit Growth (YoY)",
        Percent,
        "Growth in net income attributable to parent",
        "(Current Net Income - Prev) / |Prev|",
        |i| safe_div(i.net_income - i.prev_net_income, i.prev_net_income.abs())
    ),
    rule!(
        GROWTH,
        "OCF Growth (YoY)",
        Percent,
        "Growth in operating cash flow",
        "(Current OCF - Prev) / |Prev|",
        |i| safe_div(i.ocf - i.prev_ocf, i.prev_ocf.abs())
    ),
];

/// Stand-ins for the growth rules when there is no previous period.
pub static GROWTH_PLACEHOLDERS: &[Rule] = &[
    rule!(GROWTH, "Revenue Growth", Placeholder, "Requires prev year data", "N/A", |_| 0.0),
    rule!(GROWTH, "Net Profit Growth", Placeholder, "Requires prev year data", "N/A", |_| 0.0),
    rule!(GROWTH, "OCF Growth", Placeholder, "Requires prev year data", "N/A", |_| 0.0),
];

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Evaluate the full ratio set for `current`, averaging against `previous`
/// where one is given.
pub fn calculate_metrics(current: &ReportData, previous: Option<&ReportData>) -> Vec<Metric> {
    let inputs = RatioInputs::extract(current, previous);
    let growth = if previous.is_some() {
        GROWTH_RULES
    } else {
        GROWTH_PLACEHOLDERS
    };
    let metrics: Vec<Metric> = RATIO_RULES
        .iter()
        .chain(growth.iter())
        .map(|rule| rule.evaluate(&inputs))
        .collect();
    debug!(count = metrics.len(), with_previous = previous.is_some(), "calculated ratio set");
    metrics
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
