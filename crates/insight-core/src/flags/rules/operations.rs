//! Margin, expense and working-capital rules.

use super::pct;
use crate::flags::{FlagCategory, FlagContext, FlagResult};
use crate::format::to_fixed;

pub fn abnormal_gross_margin_expansion(c: &FlagContext) -> FlagResult {
    let gm_increase = c.gross_margin - c.prev_gross_margin;
    let turn_change = c.inventory_turnover_change;
    FlagResult::red("Abnormal Gross Margin Expansion", FlagCategory::Cost)
        .when(gm_increase > 0.05 && turn_change < -0.10)
        .value(format!(
            "GM Inc: {}%, Inv Turn Chg: {}%",
            pct(gm_increase, 1),
            pct(turn_change, 1)
        ))
        .threshold("GM Inc > 5% & Inv Turn Dec > 10%")
        .logic(format!(
            "Gross Margin Increase = {}% (> 5%) & Inventory Turnover Change = {}% (< -10%)",
            pct(gm_increase, 1),
            pct(turn_change, 1)
        ))
        .describe(
            "Rising margins with slowing inventory turnover suggests potential earnings inflation \
             via capitalization or failure to write down obsolete goods.",
        )
}

pub fn inventory_divergence(c: &FlagContext) -> FlagResult {
    let gap = c.inventory_growth - c.revenue_growth;
    FlagResult::red("Inventory Divergence", FlagCategory::Asset)
        .when(gap > 0.20)
        .value(format!(
            "Inv Growth: {}%, Rev Growth: {}%",
            pct(c.inventory_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .threshold("Inv Growth > Rev Growth + 20%")
        .logic(format!("Gap = {}% (> 20%)", pct(gap, 1)))
        .describe(
            "Inventory growing significantly faster than sales suggests falling demand, \
             obsolescence, or channel stuffing.",
        )
}

pub fn selling_expense_efficiency(c: &FlagContext) -> FlagResult {
    let floor = c.revenue_growth - 0.20;
    FlagResult::red("Selling Expense Efficiency", FlagCategory::Cost)
        .when(c.selling_growth < floor && c.revenue_growth > 0.1)
        .value(format!(
            "Sell Gr: {}%, Rev Gr: {}%",
            pct(c.selling_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .threshold("Sell Exp Gr < Rev Gr - 20%")
        .logic(format!(
            "Selling Exp Growth = {}% (< {}%)",
            pct(c.selling_growth, 1),
            pct(floor, 1)
        ))
        .describe("Revenue skyrocketing while marketing costs stay flat is highly suspicious.")
}

pub fn admin_expense_divergence(c: &FlagContext) -> FlagResult {
    let gap = c.admin_growth - c.revenue_growth;
    FlagResult::red("Admin Expense Divergence", FlagCategory::Cost)
        .when(gap > 0.15)
        .value(format!("Gap: {}%", pct(gap, 1)))
        .threshold("(Admin Gr - Rev Gr) > 15%")
        .logic(format!("Gap = {}% (> 15%)", pct(gap, 1)))
        .describe(
            "Admin costs growing much faster than sales indicates inefficiency or unchecked compensation.",
        )
}

pub fn payables_gap(c: &FlagContext) -> FlagResult {
    FlagResult::red("Payables Gap", FlagCategory::Liquidity)
        .when(c.payables_growth > c.revenue_growth + 0.20)
        .value(format!(
            "Pay Gr: {}%, Rev Gr: {}%",
            pct(c.payables_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .threshold("Payables Gr > Rev Gr + 20%")
        .logic(format!(
            "Payables Growth = {}% (> {}%)",
            pct(c.payables_growth, 1),
            to_fixed(c.revenue_growth * 100.0 + 20.0, 1)
        ))
        .describe(
            "Excessive payables growth signals liquidity stress: suppliers are funding the company.",
        )
}

pub fn rising_dso(c: &FlagContext) -> FlagResult {
    let change = c.dso - c.prev_dso;
    FlagResult::red("Rising DSO", FlagCategory::Revenue)
        .when(change > 15.0)
        .value(format!("Change: +{} days", to_fixed(change, 0)))
        .threshold("> +15 days")
        .logic(format!("DSO Change = {} days (threshold > 15 days)", to_fixed(change, 0)))
        .describe("It is taking significantly longer to collect payment from customers.")
}

pub fn margin_divergence(c: &FlagContext) -> FlagResult {
    FlagResult::red("Margin Divergence", FlagCategory::Cost)
        .when(c.gross_margin > c.prev_gross_margin && c.operating_margin < c.prev_operating_margin)
        .value("GM: Up, OM: Down")
        .threshold("GM Rising & OM Falling")
        .logic(format!(
            "Gross Margin: {}% (prev: {}%) & Operating Margin: {}% (prev: {}%)",
            pct(c.gross_margin, 1),
            pct(c.prev_gross_margin, 1),
            pct(c.operating_margin, 1),
            pct(c.prev_operating_margin, 1)
        ))
        .describe(
            "Gross margin improved but Operating margin declined, suggesting rising overheads or \
             expense reclassification.",
        )
}

pub fn payables_stretch(c: &FlagContext) -> FlagResult {
    FlagResult::red("Payables Stretch", FlagCategory::Liquidity)
        .when(c.dpo_growth > 0.2)
        .value(format!("DPO Growth: {}%", pct(c.dpo_growth, 1)))
        .threshold("> 20% YoY/MoM")
        .logic(format!("DPO Growth = {}% (threshold > 20%)", pct(c.dpo_growth, 1)))
        .describe(
            "Days Payable Outstanding increased significantly, potentially delaying payments to \
             suppliers to boost cash.",
        )
}

pub fn aggressive_revenue_recognition(c: &FlagContext) -> FlagResult {
    FlagResult::red("Aggressive Revenue Recognition", FlagCategory::Revenue)
        .when(c.ar_growth > 2.0 * c.revenue_growth && c.revenue_growth > 0.0)
        .value(format!(
            "AR Growth: {}%, Rev Growth: {}%",
            pct(c.ar_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .threshold("AR Gr > 2x Rev Gr & Rev Gr > 0")
        .logic(format!(
            "AR Growth = {}% (> {}%) & Revenue Growth = {}% (> 0%)",
            pct(c.ar_growth, 1),
            pct(2.0 * c.revenue_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .describe(
            "Receivables outpacing sales growth suggests revenue booked ahead of cash collection.",
        )
}

pub fn inventory_buildup(c: &FlagContext) -> FlagResult {
    FlagResult::red("Inventory Buildup", FlagCategory::Asset)
        .when(c.inventory_growth > 1.5 * c.revenue_growth && c.revenue_growth > 0.0)
        .value(format!(
            "Inv Growth: {}%, Rev Growth: {}%",
            pct(c.inventory_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .threshold("Inv Gr > 1.5x Rev Gr & Rev Gr > 0")
        .logic(format!(
            "Inventory Growth = {}% (> {}%) & Revenue Growth = {}% (> 0%)",
            pct(c.inventory_growth, 1),
            pct(1.5 * c.revenue_growth, 1),
            pct(c.revenue_growth, 1)
        ))
        .describe("Stock accumulating faster than sales points to weakening demand or future write-downs.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::annual;
    use crate::report::accounts::{balance, income};
    use crate::report::ReportData;

    fn pair(prev: ReportData, curr: ReportData) -> FlagContext {
        FlagContext::build(&annual("2023", curr), &annual("2022", prev), None)
    }

    #[test]
    fn test_scenario_receivables_outpace_revenue() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 100.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 1200.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 260.0);
        let flag = aggressive_revenue_recognition(&pair(prev, curr));
        assert!(flag.status);
        assert_eq!(flag.value, "AR Growth: 160.0%, Rev Growth: 20.0%");
    }

    #[test]
    fn test_shrinking_revenue_never_aggressive() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 100.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 900.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 300.0);
        assert!(!aggressive_revenue_recognition(&pair(prev, curr)).status);
    }

    #[test]
    fn test_inventory_buildup() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(balance::INVENTORIES, 100.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 1100.0)
            .with_value(balance::INVENTORIES, 120.0);
        // 20% > 1.5 x 10%
        assert!(inventory_buildup(&pair(prev, curr)).status);
    }

    #[test]
    fn test_margin_divergence() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(income::OPERATING_COST, 700.0)
            .with_value(income::OPERATING_PROFIT, 150.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(income::OPERATING_COST, 650.0)
            .with_value(income::OPERATING_PROFIT, 100.0);
        let flag = margin_divergence(&pair(prev, curr));
        assert!(flag.status);
        assert_eq!(
            flag.logic,
            "Gross Margin: 35.0% (prev: 30.0%) & Operating Margin: 10.0% (prev: 15.0%)"
        );
    }

    #[test]
    fn test_rising_dso_in_days() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 365.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 30.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 365.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_RECEIVABLE, 50.0);
        let flag = rising_dso(&pair(prev, curr));
        assert!(flag.status);
        assert_eq!(flag.value, "Change: +20 days");
    }

    #[test]
    fn test_payables_gap_threshold_text() {
        let prev = ReportData::default()
            .with_value(income::REVENUE, 1000.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_PAYABLE, 100.0);
        let curr = ReportData::default()
            .with_value(income::REVENUE, 1100.0)
            .with_value(balance::NOTES_AND_ACCOUNTS_PAYABLE, 150.0);
        let flag = payables_gap(&pair(prev, curr));
        assert!(flag.status);
        assert_eq!(flag.logic, "Payables Growth = 50.0% (> 30.0%)");
    }
}
