//! Flag rule table.
//!
//! Each rule is a plain function over the shared [`FlagContext`]; the table
//! order is the order flags are reported in.

mod assets;
mod earnings;
mod financing;
mod health;
mod operations;

use super::{FlagContext, FlagResult};
use crate::format::to_fixed;

pub type Rule = fn(&FlagContext) -> FlagResult;

pub static RULES: &[Rule] = &[
    operations::abnormal_gross_margin_expansion,
    operations::inventory_divergence,
    financing::high_cash_interest_rate,
    financing::inverted_interest_rate,
    financing::high_cash_high_debt,
    earnings::asset_disposal_reliance,
    earnings::asset_impairment_surge,
    earnings::credit_impairment_surge,
    earnings::non_operating_revenue_dependency,
    earnings::fair_value_reliance,
    earnings::investment_income_reliance,
    earnings::other_income_reliance,
    assets::receivable_bloat,
    assets::excessive_inventory,
    assets::other_receivables_anomaly,
    assets::goodwill_risk,
    assets::cip_trap,
    assets::deferred_expense_bloat,
    financing::other_payables_anomaly,
    operations::selling_expense_efficiency,
    operations::admin_expense_divergence,
    assets::prepayment_surge,
    operations::payables_gap,
    earnings::other_cash_received_anomaly,
    health::cash_backed_profits,
    health::self_funding,
    health::conservative_leverage,
    financing::kangde_xin_paradox,
    earnings::cash_profit_divergence,
    earnings::low_ocf_to_net_income,
    operations::rising_dso,
    earnings::high_total_accruals,
    financing::debt_cliff,
    operations::margin_divergence,
    financing::negative_fcf,
    operations::payables_stretch,
    operations::aggressive_revenue_recognition,
    operations::inventory_buildup,
    assets::high_goodwill,
    earnings::non_core_revenue_dependence,
];

/// `x` as a percentage with `digits` decimals, no `%` sign.
pub(crate) fn pct(x: f64, digits: u32) -> String {
    to_fixed(x * 100.0, digits)
}

/// `x` in hundred-millions with two decimals.
pub(crate) fn bn(x: f64) -> String {
    to_fixed(x / 1e8, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_names_are_unique() {
        let ctx_reports = (
            crate::fixtures::annual("2023", crate::fixtures::company(1.0)),
            crate::fixtures::annual("2022", crate::fixtures::company(1.0)),
        );
        let ctx = FlagContext::build(&ctx_reports.0, &ctx_reports.1, None);
        let names: HashSet<String> = RULES.iter().map(|r| r(&ctx).name).collect();
        assert_eq!(names.len(), RULES.len());
        assert_eq!(RULES.len(), 40);
    }

    #[test]
    fn test_pct_and_bn() {
        assert_eq!(pct(0.3, 1), "30.0");
        assert_eq!(pct(0.004, 2), "0.40");
        assert_eq!(bn(-250_000_000.0), "-2.50");
    }
}
