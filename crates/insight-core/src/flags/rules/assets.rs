//! Balance-sheet composition rules.

use super::pct;
use crate::flags::{FlagCategory, FlagContext, FlagResult};
use crate::math::safe_div;

/// One asset line as a share of total assets.
fn asset_share(
    name: &str,
    amount: f64,
    total: f64,
    limit: f64,
    label: &str,
    description: &str,
) -> FlagResult {
    let ratio = safe_div(amount, total);
    FlagResult::red(name, FlagCategory::Asset)
        .when(ratio > limit)
        .value(format!("Ratio: {}%", pct(ratio, 1)))
        .threshold(&format!("> {}% of Total Assets", pct(limit, 0)))
        .logic(format!("{label} = {}% (> {}%)", pct(ratio, 1), pct(limit, 0)))
        .describe(description)
}

pub fn receivable_bloat(c: &FlagContext) -> FlagResult {
    let share = safe_div(c.ar, c.total_assets);
    let gap = c.ar_growth - c.revenue_growth;
    FlagResult::red("Accounts Receivable Bloat", FlagCategory::Asset)
        .when(share > 0.3 || gap > 0.15)
        .value(format!("AR/Asset: {}%, Gap: {}%", pct(share, 1), pct(gap, 1)))
        .threshold("AR/Asset > 30% OR Gap > 15%")
        .logic(format!(
            "AR/Assets = {}% (> 30%) OR (AR Gr - Rev Gr) = {}% (> 15%)",
            pct(share, 1),
            pct(gap, 1)
        ))
        .describe("Receivables growing faster than sales signals channel stuffing or relaxed credit terms.")
}

pub fn excessive_inventory(c: &FlagContext) -> FlagResult {
    let share = safe_div(c.inventory, c.total_assets);
    let gap = c.inventory_growth - c.revenue_growth;
    FlagResult::red("Excessive Inventory", FlagCategory::Asset)
        .when(share > 0.3 || gap > 0.15)
        .value(format!("Inv/Asset: {}%, Gap: {}%", pct(share, 1), pct(gap, 1)))
        .threshold("Inv/Asset > 30% OR Gap > 15%")
        .logic(format!(
            "Inv/Assets = {}% (> 30%) OR (Inv Gr - Rev Gr) = {}% (> 15%)",
            pct(share, 1),
            pct(gap, 1)
        ))
        .describe("Inventory growing faster than sales often signals potential write-downs.")
}

pub fn other_receivables_anomaly(c: &FlagContext) -> FlagResult {
    asset_share(
        "Other Receivables Anomaly",
        c.other_receivables,
        c.total_assets,
        0.05,
        "Other Rec / Total Assets",
        "Hiding place for misappropriated funds or loans to shareholders.",
    )
}

pub fn goodwill_risk(c: &FlagContext) -> FlagResult {
    let ratio = safe_div(c.goodwill, c.total_equity);
    FlagResult::red("Goodwill Risk", FlagCategory::Asset)
        .when(ratio > 0.20)
        .value(format!("Ratio: {}%", pct(ratio, 1)))
        .threshold("> 20% of Net Assets")
        .logic(format!("Goodwill / Net Assets = {}% (> 20%)", pct(ratio, 1)))
        .describe("High goodwill suggests aggressive acquisitions; risk of massive write-offs.")
}

pub fn cip_trap(c: &FlagContext) -> FlagResult {
    asset_share(
        "CIP Trap",
        c.cip,
        c.total_assets,
        0.15,
        "CIP / Total Assets",
        "CIP that doesn't convert to fixed assets may be capitalized expense or fraud.",
    )
}

pub fn deferred_expense_bloat(c: &FlagContext) -> FlagResult {
    asset_share(
        "Deferred Expense Bloat",
        c.deferred_expenses,
        c.total_assets,
        0.05,
        "Deferred Exp / Total Assets",
        "Used to hide current expenses to artificially boost profits.",
    )
}

pub fn prepayment_surge(c: &FlagContext) -> FlagResult {
    let share = safe_div(c.prepayments, c.total_assets);
    FlagResult::red("Prepayment Surge", FlagCategory::Asset)
        .when(share > 0.05 || c.prepayment_growth > 0.5)
        .value(format!(
            "Ratio: {}%, Gr: {}%",
            pct(share, 1),
            pct(c.prepayment_growth, 1)
        ))
        .threshold("> 5% Assets OR > 50% Growth")
        .logic(format!(
            "Prepay/Assets = {}% (> 5%) OR Growth = {}% (> 50%)",
            pct(share, 1),
            pct(c.prepayment_growth, 1)
        ))
        .describe("Massive prepayments are common vehicles for embezzlement or fund transfer.")
}

pub fn high_goodwill(c: &FlagContext) -> FlagResult {
    let ratio = safe_div(c.goodwill, c.total_assets);
    FlagResult::red("High Goodwill", FlagCategory::Asset)
        .when(ratio > 0.40)
        .value(format!("Goodwill/Assets: {}%", pct(ratio, 1)))
        .threshold("> 40%")
        .logic(format!("Goodwill / Total Assets = {}% (threshold > 40%)", pct(ratio, 1)))
        .describe("Goodwill dominates the asset base; an impairment would wipe out a large share of equity.")
}
