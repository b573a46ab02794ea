//! Report builders shared by unit tests.

use crate::report::accounts::{balance, cash_flow, income};
use crate::report::{PeriodType, ReportData, StandardizedReport};

pub fn annual(label: &str, data: ReportData) -> StandardizedReport {
    StandardizedReport::new(label, Some(PeriodType::Annual), data)
}

/// A complete, internally consistent filing; every amount is multiplied by `scale`.
pub fn company(scale: f64) -> ReportData {
    let rows: &[(&str, f64)] = &[
        (income::REVENUE, 1000.0),
        (income::OPERATING_COST, 600.0),
        (income::TAXES_AND_SURCHARGES, 10.0),
        (income::SELLING_EXPENSES, 80.0),
        (income::ADMIN_EXPENSES, 60.0),
        (income::RD_EXPENSES, 30.0),
        (income::FINANCIAL_EXPENSES_AMOUNT, 20.0),
        (income::INTEREST_EXPENSES, 25.0),
        (income::INTEREST_INCOME, 5.0),
        (income::OPERATING_PROFIT, 180.0),
        (income::TOTAL_PROFIT, 185.0),
        (income::INCOME_TAX, 35.0),
        (income::NET_PROFIT, 150.0),
        (income::NET_PROFIT_PARENT, 140.0),
        (balance::MONETARY_FUNDS, 300.0),
        (balance::TRADING_FINANCIAL_ASSETS, 20.0),
        (balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 150.0),
        (balance::INVENTORIES, 200.0),
        (balance::PREPAYMENTS, 30.0),
        (balance::TOTAL_CURRENT_ASSETS, 800.0),
        (balance::FIXED_ASSETS, 900.0),
        (balance::TOTAL_ASSETS, 2000.0),
        (balance::SHORT_TERM_BORROWINGS, 100.0),
        (balance::NON_CURRENT_LIABILITIES_DUE_1Y, 50.0),
        (balance::NOTES_AND_ACCOUNTS_PAYABLE, 120.0),
        (balance::TOTAL_CURRENT_LIABILITIES, 500.0),
        (balance::LONG_TERM_BORROWINGS, 200.0),
        (balance::BONDS_PAYABLE, 100.0),
        (balance::TOTAL_LIABILITIES, 900.0),
        (balance::PAID_IN_CAPITAL, 400.0),
        (balance::CAPITAL_RESERVES, 200.0),
        (balance::UNDISTRIBUTED_PROFIT, 400.0),
        (balance::TOTAL_PARENT_EQUITY, 1000.0),
        (balance::TOTAL_EQUITY, 1100.0),
        (cash_flow::OPERATING_NET, 220.0),
        (cash_flow::CASH_FROM_SALES, 1050.0),
        (cash_flow::CAPEX, 80.0),
        (cash_flow::INVESTING_NET, -90.0),
        (cash_flow::FINANCING_NET, -60.0),
        (cash_flow::DIVIDENDS_AND_INTEREST_PAID, 40.0),
    ];
    rows.iter()
        .fold(ReportData::default(), |data, (path, v)| data.with_value(path, v * scale))
}
