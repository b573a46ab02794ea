//! Cash-flow charts. Inflows plot positive, outflows negative.

use super::{scaled, ChartRow};
use crate::report::accounts::{cash_flow, income};
use crate::report::StandardizedReport;

/// A series is an inflow (`1.0`) or an outflow (`-1.0`) read from one path.
type Line = (&'static str, &'static str, f64);

const OPERATING_LINES: &[Line] = &[
    ("Cash from Goods & Services", cash_flow::CASH_FROM_SALES, 1.0),
    ("Tax Refunds", cash_flow::TAX_REFUNDS_RECEIVED, 1.0),
    ("Other Operating Cash In", cash_flow::OTHER_CASH_RECEIVED_OPERATING, 1.0),
    ("Cash for Goods & Services", cash_flow::CASH_PAID_FOR_GOODS, -1.0),
    ("Cash to Employees", cash_flow::CASH_PAID_TO_EMPLOYEES, -1.0),
    ("Taxes Paid", cash_flow::TAXES_PAID, -1.0),
    ("Other Operating Cash Out", cash_flow::OTHER_CASH_PAID_OPERATING, -1.0),
];

const INVESTING_LINES: &[Line] = &[
    ("Inv. Recovery", cash_flow::INVESTMENT_RECOVERY, 1.0),
    ("Inv. Income", cash_flow::INVESTMENT_INCOME_RECEIVED, 1.0),
    ("Asset Disposal", cash_flow::DISPOSAL_OF_ASSETS, 1.0),
    ("Sub. Disposal", cash_flow::DISPOSAL_OF_SUBSIDIARIES, 1.0),
    ("Other Investing In", cash_flow::OTHER_CASH_RECEIVED_INVESTING, 1.0),
    ("Asset Purchase", cash_flow::CAPEX, -1.0),
    ("Inv. Payment", cash_flow::CASH_PAID_FOR_INVESTMENTS, -1.0),
    ("Sub. Purchase", cash_flow::NET_CASH_PAID_SUBSIDIARIES, -1.0),
    ("Other Investing Out", cash_flow::OTHER_CASH_PAID_INVESTING, -1.0),
];

const FINANCING_LINES: &[Line] = &[
    ("Inv. Received", cash_flow::CASH_FROM_INVESTORS, 1.0),
    ("Borrowings Rec.", cash_flow::CASH_FROM_BORROWINGS, 1.0),
    ("Bond Issue", cash_flow::CASH_FROM_BOND_ISSUE, 1.0),
    ("Other Financing In", cash_flow::OTHER_CASH_RECEIVED_FINANCING, 1.0),
    ("Debt Repayment", cash_flow::DEBT_REPAYMENT, -1.0),
    ("Div/Profit/Int Paid", cash_flow::DIVIDENDS_AND_INTEREST_PAID, -1.0),
    ("Other Financing Out", cash_flow::OTHER_CASH_PAID_FINANCING, -1.0),
];

const SUMMARY_LINES: &[Line] = &[
    ("Operating CF", cash_flow::OPERATING_NET, 1.0),
    ("Investing CF", cash_flow::INVESTING_NET, 1.0),
    ("Financing CF", cash_flow::FINANCING_NET, 1.0),
];

const REVENUE_VS_CASH_LINES: &[Line] = &[
    ("Revenue", income::REVENUE, 1.0),
    ("Cash From Sales", cash_flow::CASH_FROM_SALES, 1.0),
];

fn lines(reports: &[&StandardizedReport], lines: &[Line]) -> Vec<ChartRow> {
    reports
        .iter()
        .map(|r| {
            lines
                .iter()
                .fold(ChartRow::new(&r.fiscal_year), |row, (name, path, sign)| {
                    row.with(*name, sign * scaled(r.data.value(path)))
                })
        })
        .collect()
}

/// Net operating, investing and financing cash flow.
pub fn summary(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    lines(reports, SUMMARY_LINES)
}

pub fn revenue_vs_cash(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    lines(reports, REVENUE_VS_CASH_LINES)
}

pub fn operating_detail(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    lines(reports, OPERATING_LINES)
}

pub fn investing_detail(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    lines(reports, INVESTING_LINES)
}

pub fn financing_detail(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    lines(reports, FINANCING_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_in_hundred_millions() {
        let r = annual("2023", company(1e8));
        let row = &summary(&[&r])[0];
        assert_eq!(
            row.series,
            vec![("Operating CF", 220.0), ("Investing CF", -90.0), ("Financing CF", -60.0)]
        );
    }

    #[test]
    fn test_outflows_are_negative() {
        let r = annual("2023", company(1e8));
        let investing = &investing_detail(&[&r])[0];
        assert_eq!(investing.get("Asset Purchase"), Some(-80.0));
        let financing = &financing_detail(&[&r])[0];
        assert_eq!(financing.get("Div/Profit/Int Paid"), Some(-40.0));
    }

    #[test]
    fn test_revenue_vs_cash() {
        let r = annual("2023", company(1e8));
        let row = &revenue_vs_cash(&[&r])[0];
        assert_eq!(row.get("Revenue"), Some(1000.0));
        assert_eq!(row.get("Cash From Sales"), Some(1050.0));
    }
}
