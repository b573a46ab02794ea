//! Derived quantities shared by the flag rules, computed once per analysis.
//!
//! Flow items of the current period are annualized with the multiplier of
//! its period type (Monthly x12, Quarterly x4). The previous period's flows
//! are scaled with the same multiplier so the pair stays comparable.

use crate::math::{safe_div, safe_growth};
use crate::report::accounts::{balance, cash_flow, income};
use crate::report::{PeriodType, ReportData, StandardizedReport};

#[derive(Debug, Clone)]
pub struct FlagContext {
    pub period_type: PeriodType,
    pub flow_mult: f64,

    // Balance sheet (stocks)
    pub cash: f64,
    pub ar: f64,
    pub prepayments: f64,
    pub other_receivables: f64,
    pub inventory: f64,
    pub cip: f64,
    pub goodwill: f64,
    pub deferred_expenses: f64,
    pub total_assets: f64,
    pub trading_fin_liabilities: f64,
    pub payables: f64,
    pub other_payables: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
    /// Borrowings, current portion and bonds.
    pub total_debt: f64,
    /// Total debt plus leases and trading financial liabilities.
    pub interest_bearing_debt: f64,
    pub short_term_debt: f64,

    // Income statement (flows, as reported)
    pub revenue: f64,
    pub cost_of_sales: f64,
    pub selling_expenses: f64,
    pub admin_expenses: f64,
    pub interest_expense: f64,
    pub interest_income: f64,
    pub asset_impairment: f64,
    pub credit_impairment: f64,
    pub fair_value_change: f64,
    pub investment_income: f64,
    pub asset_disposal_income: f64,
    pub other_income: f64,
    pub operating_profit: f64,
    pub non_operating_revenue: f64,
    pub total_profit: f64,
    pub net_profit: f64,
    pub net_profit_parent: f64,
    pub depreciation: f64,
    /// Total profit plus interest expense.
    pub ebit: f64,

    // Cash flow (flows, as reported)
    pub ocf: f64,
    pub ocf_inflow: f64,
    pub other_cash_received_operating: f64,
    pub cash_paid_dividends_interest: f64,
    pub capex: f64,
    pub fcf: f64,

    // Previous period
    pub prev_total_debt: f64,
    pub prev_fcf: f64,
    pub prev2: Option<Prev2>,

    // Averages and growth
    pub avg_inventory: f64,
    pub avg_cash: f64,
    pub avg_interest_bearing_debt: f64,
    pub revenue_growth: f64,
    pub inventory_growth: f64,
    pub ar_growth: f64,
    pub selling_growth: f64,
    pub admin_growth: f64,
    pub prepayment_growth: f64,
    pub payables_growth: f64,
    pub cash_growth: f64,
    pub net_income_growth: f64,
    pub ocf_growth: f64,

    // Margins and working-capital days
    pub gross_margin: f64,
    pub prev_gross_margin: f64,
    pub operating_margin: f64,
    pub prev_operating_margin: f64,
    pub inventory_turnover: f64,
    pub prev_inventory_turnover: f64,
    pub inventory_turnover_change: f64,
    pub dso: f64,
    pub prev_dso: f64,
    pub dpo: f64,
    pub prev_dpo: f64,
    pub dpo_growth: f64,
    /// Annualized interest income over average cash.
    pub deposit_rate: f64,
}

/// The report two periods back, when the collection has one.
#[derive(Debug, Clone, Default)]
pub struct Prev2 {
    pub label: String,
    pub fcf: f64,
}

fn total_debt(d: &ReportData) -> f64 {
    d.value(balance::SHORT_TERM_BORROWINGS)
        + d.value(balance::NON_CURRENT_LIABILITIES_DUE_1Y)
        + d.value(balance::LONG_TERM_BORROWINGS)
        + d.value(balance::BONDS_PAYABLE)
}

fn free_cash_flow(d: &ReportData) -> f64 {
    d.value(cash_flow::OPERATING_NET) - d.value(cash_flow::CAPEX)
}

impl FlagContext {
    pub fn build(
        curr: &StandardizedReport,
        prev: &StandardizedReport,
        prev2: Option<&StandardizedReport>,
    ) -> Self {
        let d = &curr.data;
        let pd = &prev.data;
        let period_type = curr.effective_period_type();
        let mult = period_type.annualization_factor();

        let cash = d.value(balance::MONETARY_FUNDS);
        let ar = d.value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE);
        let prepayments = d.value(balance::PREPAYMENTS);
        let inventory = d.value(balance::INVENTORIES);
        let payables = d.value(balance::NOTES_AND_ACCOUNTS_PAYABLE);
        let trading_fin_liabilities = d.value(balance::TRADING_FINANCIAL_LIABILITIES);
        let total_debt_now = total_debt(d);
        let interest_bearing_debt =
            total_debt_now + d.value(balance::LEASE_LIABILITIES) + trading_fin_liabilities;
        let short_term_debt = d.value(balance::SHORT_TERM_BORROWINGS)
            + d.value(balance::NON_CURRENT_LIABILITIES_DUE_1Y);

        let revenue = d.value(income::REVENUE);
        let cost_of_sales = d.value(income::OPERATING_COST);
        let selling_expenses = d.value(income::SELLING_EXPENSES);
        let admin_expenses = d.value(income::ADMIN_EXPENSES);
        let interest_expense = d.value(income::INTEREST_EXPENSES);
        let interest_income = d.value(income::INTEREST_INCOME);
        let asset_impairment = d.value(income::ASSET_IMPAIRMENT_LOSS).abs()
            + d.value(income::ASSET_IMPAIRMENT_LOSS_NEW).abs();
        let credit_impairment = (d.value(income::CREDIT_IMPAIRMENT_LOSS)
            + d.value(income::CREDIT_IMPAIRMENT_LOSS_NEW))
        .abs();
        let operating_profit = d.value(income::OPERATING_PROFIT);
        let total_profit = d.value(income::TOTAL_PROFIT);
        let net_profit_parent = d.value(income::NET_PROFIT_PARENT);

        let ocf = d.value(cash_flow::OPERATING_NET);
        let capex = d.value(cash_flow::CAPEX);

        // Previous period
        let prev_revenue = pd.value(income::REVENUE);
        let prev_cost = pd.value(income::OPERATING_COST);
        let prev_inventory = pd.value(balance::INVENTORIES);
        let prev_ar = pd.value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE);
        let prev_payables = pd.value(balance::NOTES_AND_ACCOUNTS_PAYABLE);
        let prev_cash = pd.value(balance::MONETARY_FUNDS);
        let prev_total_debt = total_debt(pd) + pd.value(balance::LEASE_LIABILITIES);

        let avg_inventory = (inventory + prev_inventory) / 2.0;
        let avg_cash = (cash + prev_cash) / 2.0;
        let avg_interest_bearing_debt = (interest_bearing_debt + prev_total_debt) / 2.0;

        let gross_margin = safe_div(revenue - cost_of_sales, revenue);
        let prev_gross_margin = safe_div(prev_revenue - prev_cost, prev_revenue);
        let inventory_turnover = safe_div(cost_of_sales * mult, avg_inventory);
        let prev_inventory_turnover = safe_div(prev_cost * mult, prev_inventory);
        let dso = safe_div(ar * 365.0, revenue * mult);
        let prev_dso = safe_div(prev_ar * 365.0, prev_revenue * mult);
        let dpo = safe_div(payables * 365.0, cost_of_sales * mult);
        let prev_dpo = safe_div(prev_payables * 365.0, prev_cost * mult);

        FlagContext {
            period_type,
            flow_mult: mult,

            cash,
            ar,
            prepayments,
            other_receivables: d.value(balance::OTHER_RECEIVABLES_TOTAL),
            inventory,
            cip: d.value(balance::CONSTRUCTION_IN_PROGRESS),
            goodwill: d.value(balance::GOODWILL),
            deferred_expenses: d.value(balance::LONG_TERM_DEFERRED_EXPENSES),
            total_assets: d.value(balance::TOTAL_ASSETS),
            trading_fin_liabilities,
            payables,
            other_payables: d.value(balance::OTHER_PAYABLES_TOTAL),
            total_liabilities: d.value(balance::TOTAL_LIABILITIES),
            total_equity: d.value(balance::TOTAL_EQUITY),
            total_debt: total_debt_now,
            interest_bearing_debt,
            short_term_debt,

            revenue,
            cost_of_sales,
            selling_expenses,
            admin_expenses,
            interest_expense,
            interest_income,
            asset_impairment,
            credit_impairment,
            fair_value_change: d.value(income::FAIR_VALUE_CHANGE_INCOME),
            investment_income: d.value(income::INVESTMENT_INCOME),
            asset_disposal_income: d.value(income::ASSET_DISPOSAL_INCOME),
            other_income: d.value(income::OTHER_INCOME),
            operating_profit,
            non_operating_revenue: d.value(income::NON_OPERATING_REVENUE),
            total_profit,
            net_profit: d.value(income::NET_PROFIT),
            net_profit_parent,
            depreciation: d.value(cash_flow::DEPRECIATION),
            ebit: total_profit + interest_expense,

            ocf,
            ocf_inflow: d.value(cash_flow::OPERATING_INFLOW),
            other_cash_received_operating: d.value(cash_flow::OTHER_CASH_RECEIVED_OPERATING),
            cash_paid_dividends_interest: d.value(cash_flow::DIVIDENDS_AND_INTEREST_PAID),
            capex,
            fcf: ocf - capex,

            prev_total_debt,
            prev_fcf: free_cash_flow(pd),
            prev2: prev2.map(|r| Prev2 {
                label: r.fiscal_year.clone(),
                fcf: free_cash_flow(&r.data),
            }),

            avg_inventory,
            avg_cash,
            avg_interest_bearing_debt,
            revenue_growth: safe_growth(revenue, prev_revenue),
            inventory_growth: safe_growth(inventory, prev_inventory),
            ar_growth: safe_growth(ar, prev_ar),
            selling_growth: safe_growth(selling_expenses, pd.value(income::SELLING_EXPENSES)),
            admin_growth: safe_growth(admin_expenses, pd.value(income::ADMIN_EXPENSES)),
            prepayment_growth: safe_growth(prepayments, pd.value(balance::PREPAYMENTS)),
            payables_growth: safe_growth(payables, prev_payables),
            cash_growth: safe_growth(cash, prev_cash),
            net_income_growth: safe_growth(net_profit_parent, pd.value(income::NET_PROFIT_PARENT)),
            ocf_growth: safe_growth(ocf, pd.value(cash_flow::OPERATING_NET)),

            gross_margin,
            prev_gross_margin,
            operating_margin: safe_div(operating_profit, revenue),
            prev_operating_margin: safe_div(pd.value(income::OPERATING_PROFIT), prev_revenue),
            inventory_turnover,
            prev_inventory_turnover,
            inventory_turnover_change: safe_growth(inventory_turnover, prev_inventory_turnover),
            dso,
            prev_dso,
            dpo,
            prev_dpo,
            dpo_growth: safe_growth(dpo, prev_dpo),
            deposit_rate: safe_div(interest_income * mult, avg_cash),
        }
    }

    /// Annualize a flow item of the current period.
    pub fn annualize(&self, flow: f64) -> f64 {
        flow * self.flow_mult
    }
}
