//! Composite line items that several charts group together.

use crate::report::accounts::{balance, income};
use crate::report::ReportData;

fn sum(data: &ReportData, paths: &[&str]) -> f64 {
    paths.iter().map(|p| data.value(p)).sum()
}

/// Monetary funds, funds lent and trading financial assets (both schema variants).
pub fn cash_and_equivalents(data: &ReportData) -> f64 {
    sum(
        data,
        &[
            balance::MONETARY_FUNDS,
            balance::FUNDS_LENT,
            balance::TRADING_FINANCIAL_ASSETS,
            balance::FVPL_TRADING_FINANCIAL_ASSETS,
        ],
    )
}

pub fn receivables(data: &ReportData) -> f64 {
    sum(
        data,
        &[
            balance::NOTES_RECEIVABLE,
            balance::ACCOUNTS_RECEIVABLE,
            balance::RECEIVABLES_FINANCING,
            balance::CONTRACT_ASSETS,
        ],
    )
}

pub fn interest_bearing_debt(data: &ReportData) -> f64 {
    sum(
        data,
        &[
            balance::SHORT_TERM_BORROWINGS,
            balance::LONG_TERM_BORROWINGS,
            balance::BONDS_PAYABLE,
            balance::NON_CURRENT_LIABILITIES_DUE_1Y,
        ],
    )
}

pub fn payables(data: &ReportData) -> f64 {
    sum(data, &[balance::NOTES_PAYABLE, balance::ACCOUNTS_PAYABLE])
}

/// Advances from customers plus contract liabilities.
pub fn prepayments_received(data: &ReportData) -> f64 {
    sum(
        data,
        &[balance::ADVANCES_FROM_CUSTOMERS, balance::CONTRACT_LIABILITIES],
    )
}

pub fn payroll_payable(data: &ReportData) -> f64 {
    sum(
        data,
        &[balance::PAYROLL_PAYABLE, balance::LONG_TERM_PAYROLL_PAYABLE],
    )
}

/// Revenue less cost of sales, surcharges, selling, admin and R&D expenses.
pub fn main_business_profit(data: &ReportData) -> f64 {
    data.value(income::REVENUE)
        - sum(
            data,
            &[
                income::OPERATING_COST,
                income::TAXES_AND_SURCHARGES,
                income::SELLING_EXPENSES,
                income::ADMIN_EXPENSES,
                income::RD_EXPENSES,
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::company;
    use serde_json::json;

    #[test]
    fn test_main_business_profit() {
        // 1000 - 600 - 10 - 80 - 60 - 30
        assert_eq!(main_business_profit(&company(1.0)), 220.0);
    }

    #[test]
    fn test_cash_counts_both_trading_asset_layouts() {
        let data: ReportData = serde_json::from_value(json!({
            "balance_sheet": {
                "current_assets": {
                    "monetary_funds": 100,
                    "funds_lent": {"amount": 5},
                    "trading_financial_assets": 10,
                    "financial_assets_fvpl": {"trading_financial_assets": 7}
                }
            }
        }))
        .unwrap();
        assert_eq!(cash_and_equivalents(&data), 122.0);
    }

    #[test]
    fn test_receivables_use_components_not_group_amount() {
        let data = ReportData::default()
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 999.0)
            .with_value(balance::NOTES_RECEIVABLE, 20.0)
            .with_value(balance::ACCOUNTS_RECEIVABLE, 80.0)
            .with_value(balance::CONTRACT_ASSETS, 10.0);
        assert_eq!(receivables(&data), 110.0);
    }
}
