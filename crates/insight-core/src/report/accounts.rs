//! Dot paths of the standardized statement schema.

pub mod income {
    pub const REVENUE: &str = "income_statement.total_operating_revenue";
    pub const OPERATING_COST: &str = "income_statement.total_operating_cost.operating_cost";
    pub const TAXES_AND_SURCHARGES: &str =
        "income_statement.total_operating_cost.taxes_and_surcharges";
    pub const SELLING_EXPENSES: &str = "income_statement.total_operating_cost.selling_expenses";
    pub const ADMIN_EXPENSES: &str = "income_statement.total_operating_cost.admin_expenses";
    pub const RD_EXPENSES: &str = "income_statement.total_operating_cost.rd_expenses";
    pub const FINANCIAL_EXPENSES: &str = "income_statement.total_operating_cost.financial_expenses";
    pub const FINANCIAL_EXPENSES_AMOUNT: &str =
        "income_statement.total_operating_cost.financial_expenses.amount";
    pub const INTEREST_EXPENSES: &str =
        "income_statement.total_operating_cost.financial_expenses.interest_expenses";
    pub const INTEREST_INCOME: &str =
        "income_statement.total_operating_cost.financial_expenses.interest_income";
    pub const ASSET_IMPAIRMENT_LOSS: &str =
        "income_statement.total_operating_cost.asset_impairment_loss";
    pub const CREDIT_IMPAIRMENT_LOSS: &str =
        "income_statement.total_operating_cost.credit_impairment_loss";

    pub const ASSET_IMPAIRMENT_LOSS_NEW: &str =
        "income_statement.other_operating_income.asset_impairment_loss_new";
    pub const CREDIT_IMPAIRMENT_LOSS_NEW: &str =
        "income_statement.other_operating_income.credit_impairment_loss_new";
    pub const FAIR_VALUE_CHANGE_INCOME: &str =
        "income_statement.other_operating_income.fair_value_change_income";
    pub const INVESTMENT_INCOME: &str = "income_statement.other_operating_income.investment_income";
    pub const ASSET_DISPOSAL_INCOME: &str =
        "income_statement.other_operating_income.asset_disposal_income";
    pub const OTHER_INCOME: &str = "income_statement.other_operating_income.other_income";

    pub const OPERATING_PROFIT: &str = "income_statement.operating_profit.amount";
    pub const NON_OPERATING_REVENUE: &str =
        "income_statement.operating_profit.non_operating_revenue";
    pub const NON_OPERATING_EXPENSES: &str =
        "income_statement.operating_profit.non_operating_expenses";
    pub const TOTAL_PROFIT: &str = "income_statement.total_profit.amount";
    pub const INCOME_TAX: &str = "income_statement.total_profit.income_tax";
    pub const NET_PROFIT: &str = "income_statement.net_profit.amount";
    pub const NET_PROFIT_PARENT: &str = "income_statement.net_profit.net_profit_attr_to_parent";
}

pub mod balance {
    pub const MONETARY_FUNDS: &str = "balance_sheet.current_assets.monetary_funds";
    pub const FUNDS_LENT: &str = "balance_sheet.current_assets.funds_lent";
    pub const TRADING_FINANCIAL_ASSETS: &str = "balance_sheet.current_assets.trading_financial_assets";
    pub const FVPL_TRADING_FINANCIAL_ASSETS: &str =
        "balance_sheet.current_assets.financial_assets_fvpl.trading_financial_assets";
    pub const NOTES_AND_ACCOUNTS_RECEIVABLE: &str =
        "balance_sheet.current_assets.notes_and_accounts_receivable.amount";
    pub const NOTES_RECEIVABLE: &str =
        "balance_sheet.current_assets.notes_and_accounts_receivable.notes_receivable";
    pub const ACCOUNTS_RECEIVABLE: &str =
        "balance_sheet.current_assets.notes_and_accounts_receivable.accounts_receivable";
    pub const RECEIVABLES_FINANCING: &str = "balance_sheet.current_assets.receivables_financing";
    pub const CONTRACT_ASSETS: &str = "balance_sheet.current_assets.contract_assets";
    pub const PREPAYMENTS: &str = "balance_sheet.current_assets.prepayments";
    pub const OTHER_RECEIVABLES_TOTAL: &str =
        "balance_sheet.current_assets.other_receivables_total.amount";
    pub const INVENTORIES: &str = "balance_sheet.current_assets.inventories";
    pub const OTHER_CURRENT_ASSETS: &str = "balance_sheet.current_assets.other_current_assets";
    pub const TOTAL_CURRENT_ASSETS: &str = "balance_sheet.current_assets.total_current_assets";

    pub const LONG_TERM_EQUITY_INVESTMENTS: &str =
        "balance_sheet.non_current_assets.long_term_equity_investments";
    pub const GOODWILL: &str = "balance_sheet.non_current_assets.goodwill";
    pub const FIXED_ASSETS: &str = "balance_sheet.non_current_assets.fixed_assets";
    pub const CONSTRUCTION_IN_PROGRESS: &str =
        "balance_sheet.non_current_assets.construction_in_progress";
    pub const RIGHT_OF_USE_ASSETS: &str = "balance_sheet.non_current_assets.right_of_use_assets";
    pub const INTANGIBLE_ASSETS: &str = "balance_sheet.non_current_assets.intangible_assets";
    pub const LONG_TERM_DEFERRED_EXPENSES: &str =
        "balance_sheet.non_current_assets.long_term_deferred_expenses";
    pub const TOTAL_ASSETS: &str = "balance_sheet.assets_summary.total_assets";

    pub const SHORT_TERM_BORROWINGS: &str = "balance_sheet.current_liabilities.short_term_borrowings";
    pub const TRADING_FINANCIAL_LIABILITIES: &str =
        "balance_sheet.current_liabilities.trading_financial_liabilities";
    pub const NOTES_AND_ACCOUNTS_PAYABLE: &str =
        "balance_sheet.current_liabilities.notes_and_accounts_payable.amount";
    pub const NOTES_PAYABLE: &str =
        "balance_sheet.current_liabilities.notes_and_accounts_payable.notes_payable";
    pub const ACCOUNTS_PAYABLE: &str =
        "balance_sheet.current_liabilities.notes_and_accounts_payable.accounts_payable";
    pub const ADVANCES_FROM_CUSTOMERS: &str =
        "balance_sheet.current_liabilities.advances_from_customers";
    pub const CONTRACT_LIABILITIES: &str = "balance_sheet.current_liabilities.contract_liabilities";
    pub const PAYROLL_PAYABLE: &str = "balance_sheet.current_liabilities.payroll_payable";
    pub const TAXES_PAYABLE: &str = "balance_sheet.current_liabilities.taxes_payable";
    pub const OTHER_PAYABLES_TOTAL: &str =
        "balance_sheet.current_liabilities.other_payables_total.amount";
    pub const OTHER_PAYABLES: &str =
        "balance_sheet.current_liabilities.other_payables_total.other_payables";
    pub const NON_CURRENT_LIABILITIES_DUE_1Y: &str =
        "balance_sheet.current_liabilities.non_current_liabilities_due_within_1y";
    pub const TOTAL_CURRENT_LIABILITIES: &str =
        "balance_sheet.current_liabilities.total_current_liabilities";

    pub const LONG_TERM_BORROWINGS: &str = "balance_sheet.non_current_liabilities.long_term_borrowings";
    pub const BONDS_PAYABLE: &str = "balance_sheet.non_current_liabilities.bonds_payable.amount";
    pub const LEASE_LIABILITIES: &str = "balance_sheet.non_current_liabilities.lease_liabilities";
    pub const LONG_TERM_PAYABLES: &str = "balance_sheet.non_current_liabilities.long_term_payables";
    pub const LONG_TERM_PAYROLL_PAYABLE: &str =
        "balance_sheet.non_current_liabilities.long_term_payroll_payable";
    pub const TOTAL_LIABILITIES: &str = "balance_sheet.liabilities_summary.total_liabilities";

    pub const PAID_IN_CAPITAL: &str = "balance_sheet.equity.paid_in_capital";
    pub const OTHER_EQUITY_INSTRUMENTS: &str = "balance_sheet.equity.other_equity_instruments.amount";
    pub const CAPITAL_RESERVES: &str = "balance_sheet.equity.capital_reserves";
    pub const OTHER_COMPREHENSIVE_INCOME: &str = "balance_sheet.equity.other_comprehensive_income";
    pub const TREASURY_STOCK: &str = "balance_sheet.equity.treasury_stock";
    pub const SPECIAL_RESERVES: &str = "balance_sheet.equity.special_reserves";
    pub const SURPLUS_RESERVES: &str = "balance_sheet.equity.surplus_reserves";
    pub const UNDISTRIBUTED_PROFIT: &str = "balance_sheet.equity.undistributed_profit";
    pub const TOTAL_PARENT_EQUITY: &str = "balance_sheet.equity.total_parent_equity";
    pub const TOTAL_EQUITY: &str = "balance_sheet.equity.total_equity";
}

pub mod cash_flow {
    pub const OPERATING_NET: &str =
        "cash_flow_statement.operating_activities.net_cash_flow_from_operating";
    pub const OPERATING_INFLOW: &str =
        "cash_flow_statement.operating_activities.subtotal_cash_inflow_operating";
    pub const CASH_FROM_SALES: &str =
        "cash_flow_statement.operating_activities.cash_received_from_goods_and_services";
    pub const TAX_REFUNDS_RECEIVED: &str = "cash_flow_statement.operating_activities.tax_refunds_received";
    pub const OTHER_CASH_RECEIVED_OPERATING: &str =
        "cash_flow_statement.operating_activities.other_cash_received_operating";
    pub const CASH_PAID_FOR_GOODS: &str =
        "cash_flow_statement.operating_activities.cash_paid_for_goods_and_services";
    pub const CASH_PAID_TO_EMPLOYEES: &str =
        "cash_flow_statement.operating_activities.cash_paid_to_employees";
    pub const TAXES_PAID: &str = "cash_flow_statement.operating_activities.taxes_paid";
    pub const OTHER_CASH_PAID_OPERATING: &str =
        "cash_flow_statement.operating_activities.other_cash_paid_operating";

    pub const INVESTING_NET: &str =
        "cash_flow_statement.investing_activities.net_cash_flow_from_investing";
    pub const INVESTMENT_RECOVERY: &str =
        "cash_flow_statement.investing_activities.cash_received_from_investment_recovery";
    pub const INVESTMENT_INCOME_RECEIVED: &str =
        "cash_flow_statement.investing_activities.cash_received_from_investment_income";
    pub const DISPOSAL_OF_ASSETS: &str =
        "cash_flow_statement.investing_activities.net_cash_from_disposal_assets";
    pub const DISPOSAL_OF_SUBSIDIARIES: &str =
        "cash_flow_statement.investing_activities.net_cash_from_disposal_subsidiaries";
    pub const OTHER_CASH_RECEIVED_INVESTING: &str =
        "cash_flow_statement.investing_activities.other_cash_received_investing";
    pub const CAPEX: &str = "cash_flow_statement.investing_activities.cash_paid_for_assets";
    pub const CASH_PAID_FOR_INVESTMENTS: &str =
        "cash_flow_statement.investing_activities.cash_paid_for_investments";
    pub const NET_CASH_PAID_SUBSIDIARIES: &str =
        "cash_flow_statement.investing_activities.net_cash_paid_subsidiaries";
    pub const OTHER_CASH_PAID_INVESTING: &str =
        "cash_flow_statement.investing_activities.other_cash_paid_investing";

    pub const FINANCING_NET: &str =
        "cash_flow_statement.financing_activities.net_cash_flow_from_financing";
    pub const CASH_FROM_INVESTORS: &str =
        "cash_flow_statement.financing_activities.cash_received_from_investments.amount";
    pub const CASH_FROM_BORROWINGS: &str =
        "cash_flow_statement.financing_activities.cash_received_from_borrowings";
    pub const CASH_FROM_BOND_ISSUE: &str =
        "cash_flow_statement.financing_activities.cash_received_from_bond_issue";
    pub const OTHER_CASH_RECEIVED_FINANCING: &str =
        "cash_flow_statement.financing_activities.other_cash_received_financing";
    pub const DEBT_REPAYMENT: &str =
        "cash_flow_statement.financing_activities.cash_paid_for_debt_repayment";
    /// Dividends, profit distributions and interest paid.
    pub const DIVIDENDS_AND_INTEREST_PAID: &str =
        "cash_flow_statement.financing_activities.cash_paid_for_dividends_and_profits";
    pub const OTHER_CASH_PAID_FINANCING: &str =
        "cash_flow_statement.financing_activities.other_cash_paid_financing.amount";

    pub const DEPRECIATION: &str = "cash_flow_statement.supplementary_info.net_profit_adjustment.depreciation_fixed_assets_investment_props";
}
