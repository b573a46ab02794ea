//! Balance-sheet composition charts.
//!
//! Each chart lists named buckets followed by a residual bucket equal to the
//! reported total less every named bucket, so a row always sums to the total.

use super::aggregations as agg;
use super::{scaled, ChartRow};
use crate::report::accounts::balance;
use crate::report::{ReportData, StandardizedReport};

type Bucket = (&'static str, fn(&ReportData) -> f64);

const ASSET_BUCKETS: &[Bucket] = &[
    ("Cash & Equiv Etc", agg::cash_and_equivalents),
    ("Receivables Etc", agg::receivables),
    ("Prepayments", |d| d.value(balance::PREPAYMENTS)),
    ("Inventory", |d| d.value(balance::INVENTORIES)),
    ("Other Current Assets", |d| d.value(balance::OTHER_CURRENT_ASSETS)),
    ("Long-term Equity Invest", |d| d.value(balance::LONG_TERM_EQUITY_INVESTMENTS)),
    ("Goodwill", |d| d.value(balance::GOODWILL)),
    ("Fixed Assets", |d| d.value(balance::FIXED_ASSETS)),
    ("Construction In Progress", |d| d.value(balance::CONSTRUCTION_IN_PROGRESS)),
    ("Right-of-use Assets", |d| d.value(balance::RIGHT_OF_USE_ASSETS)),
    ("Intangible Assets", |d| d.value(balance::INTANGIBLE_ASSETS)),
];

const LIABILITY_BUCKETS: &[Bucket] = &[
    ("Interest-bearing Debt", agg::interest_bearing_debt),
    ("Payables Etc", agg::payables),
    ("Prepayments Received Etc", agg::prepayments_received),
    ("Payroll Payable Etc", agg::payroll_payable),
    ("Taxes Payable", |d| d.value(balance::TAXES_PAYABLE)),
    ("Other Payables", |d| d.value(balance::OTHER_PAYABLES)),
    ("Lease Liabilities", |d| d.value(balance::LEASE_LIABILITIES)),
    ("Long-term Payables", |d| d.value(balance::LONG_TERM_PAYABLES)),
];

const EQUITY_BUCKETS: &[Bucket] = &[
    ("Paid-in Capital", |d| d.value(balance::PAID_IN_CAPITAL)),
    ("Other Equity Instruments", |d| d.value(balance::OTHER_EQUITY_INSTRUMENTS)),
    ("Capital Reserves", |d| d.value(balance::CAPITAL_RESERVES)),
    ("Other Comprehensive Income", |d| d.value(balance::OTHER_COMPREHENSIVE_INCOME)),
    ("Treasury Stock", |d| d.value(balance::TREASURY_STOCK)),
    ("Special Reserves", |d| d.value(balance::SPECIAL_RESERVES)),
    ("Surplus Reserves", |d| d.value(balance::SURPLUS_RESERVES)),
    ("Undistributed Profit", |d| d.value(balance::UNDISTRIBUTED_PROFIT)),
];

fn composition(
    reports: &[&StandardizedReport],
    buckets: &[Bucket],
    total_path: &str,
    residual: &'static str,
) -> Vec<ChartRow> {
    reports
        .iter()
        .map(|r| {
            let mut named = 0.0;
            let row = buckets.iter().fold(ChartRow::new(&r.fiscal_year), |row, (name, f)| {
                let amount = f(&r.data);
                named += amount;
                row.with(*name, scaled(amount))
            });
            row.with(residual, scaled(r.data.value(total_path) - named))
        })
        .collect()
}

pub fn asset_structure(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    composition(reports, ASSET_BUCKETS, balance::TOTAL_ASSETS, "Other Assets")
}

pub fn liability_structure(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    composition(
        reports,
        LIABILITY_BUCKETS,
        balance::TOTAL_LIABILITIES,
        "Other Liabilities",
    )
}

pub fn equity_structure(reports: &[&StandardizedReport]) -> Vec<ChartRow> {
    composition(
        reports,
        EQUITY_BUCKETS,
        balance::TOTAL_EQUITY,
        "Minority Interests & Other",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use crate::math::approx_eq;
    use pretty_assertions::assert_eq;

    fn row_total(row: &ChartRow) -> f64 {
        row.series.iter().map(|(_, v)| v).sum()
    }

    #[test]
    fn test_rows_reconcile_to_totals() {
        let data = company(1e8)
            .with_value(balance::GOODWILL, 50e8)
            .with_value(balance::TREASURY_STOCK, 12e8)
            .with_value(balance::TAXES_PAYABLE, 7e8);
        let report = annual("2023", data.clone());
        let reports = vec![&report];

        let assets = &asset_structure(&reports)[0];
        assert!(approx_eq(row_total(assets), data.value(balance::TOTAL_ASSETS) / 1e8, 1e-9));
        let liabilities = &liability_structure(&reports)[0];
        assert!(approx_eq(row_total(liabilities), 900.0, 1e-9));
        let equity = &equity_structure(&reports)[0];
        assert!(approx_eq(row_total(equity), 1100.0, 1e-9));
    }

    #[test]
    fn test_asset_buckets() {
        let report = annual("2023", company(1e8));
        let row = &asset_structure(&[&report])[0];
        assert_eq!(row.year, "2023");
        assert_eq!(row.get("Cash & Equiv Etc"), Some(320.0));
        assert_eq!(row.get("Inventory"), Some(200.0));
        // 2000 - (320 + 0 + 30 + 200 + 900)
        assert_eq!(row.get("Other Assets"), Some(550.0));
        assert_eq!(row.series.last().map(|(n, _)| *n), Some("Other Assets"));
    }

    #[test]
    fn test_equity_residual_is_minority_and_other() {
        let report = annual("2023", company(1e8));
        let row = &equity_structure(&[&report])[0];
        // 1100 - (400 + 200 + 400)
        assert_eq!(row.get("Minority Interests & Other"), Some(100.0));
    }

    #[test]
    fn test_empty_report_is_all_zero() {
        let report = annual("2023", ReportData::default());
        let row = &liability_structure(&[&report])[0];
        assert!(row.series.iter().all(|(_, v)| *v == 0.0));
    }
}
