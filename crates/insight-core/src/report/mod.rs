//! Standardized report data model.
//!
//! A report carries one fiscal period's income statement, balance sheet and
//! cash-flow statement as arbitrarily deep trees of named line items. A leaf
//! is either a bare number or a group holding an `amount` plus sub-breakdowns;
//! both forms resolve to the same value through [`path::get_value`].

pub mod accounts;
pub mod index;
pub mod path;
pub mod period;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InsightError;
use crate::InsightResult;

pub use index::{resolve_comparison, Comparison, ComparisonMode, PeriodIndex};
pub use path::{get_value, get_value_in, has_value, has_value_in, lookup_in};
pub use period::{filter_by_type, sort_chronological, PeriodFilter, PeriodOrdering};

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

/// One node of a statement tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    Number(f64),
    Group(BTreeMap<String, LineItem>),
    /// Strings, nulls, arrays: carried through, never numeric.
    Opaque(serde_json::Value),
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::Group(BTreeMap::new())
    }
}

impl LineItem {
    pub fn child(&self, key: &str) -> Option<&LineItem> {
        match self {
            LineItem::Group(map) => map.get(key),
            _ => None,
        }
    }

    /// The node's own value: a bare number, or a group's numeric `amount`.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            LineItem::Number(n) => Some(*n),
            LineItem::Group(map) => match map.get("amount") {
                Some(LineItem::Number(n)) => Some(*n),
                _ => None,
            },
            LineItem::Opaque(_) => None,
        }
    }

    /// Walk `segments` below this node. See [`path::lookup_in`] for the dot-path form.
    pub fn lookup<'a, I>(&self, segments: I) -> Option<&LineItem>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    fn set_path(&mut self, segments: &[&str], value: f64) {
        let Some((head, rest)) = segments.split_first() else {
            match self {
                LineItem::Group(map) => {
                    map.insert("amount".to_string(), LineItem::Number(value));
                }
                other => *other = LineItem::Number(value),
            }
            return;
        };

        // A bare number that gains children keeps its value as `amount`.
        if !matches!(self, LineItem::Group(_)) {
            let mut map = BTreeMap::new();
            if let Some(n) = self.numeric() {
                map.insert("amount".to_string(), LineItem::Number(n));
            }
            *self = LineItem::Group(map);
        }
        if let LineItem::Group(map) = self {
            let child = map.entry((*head).to_string()).or_default();
            if rest.is_empty() {
                if let LineItem::Group(inner) = child {
                    inner.insert("amount".to_string(), LineItem::Number(value));
                } else {
                    *child = LineItem::Number(value);
                }
            } else {
                child.set_path(rest, value);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Report data
// ---------------------------------------------------------------------------

/// The three statements of one filing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub income_statement: LineItem,
    #[serde(default)]
    pub balance_sheet: LineItem,
    #[serde(default)]
    pub cash_flow_statement: LineItem,
}

impl ReportData {
    pub fn section(&self, name: &str) -> Option<&LineItem> {
        match name {
            "income_statement" => Some(&self.income_statement),
            "balance_sheet" => Some(&self.balance_sheet),
            "cash_flow_statement" => Some(&self.cash_flow_statement),
            _ => None,
        }
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut LineItem> {
        match name {
            "income_statement" => Some(&mut self.income_statement),
            "balance_sheet" => Some(&mut self.balance_sheet),
            "cash_flow_statement" => Some(&mut self.cash_flow_statement),
            _ => None,
        }
    }

    /// Node addressed by a dot path whose first segment names the statement.
    pub fn lookup(&self, path: &str) -> Option<&LineItem> {
        match path.split_once('.') {
            Some((statement, rest)) => lookup_in(self.section(statement)?, rest),
            None => self.section(path),
        }
    }

    /// Numeric value at `path`, `0` when absent.
    pub fn value(&self, path: &str) -> f64 {
        get_value(Some(self), path)
    }

    /// Builder-style setter; intermediate groups are created on demand.
    /// Paths outside the three statements are ignored.
    pub fn with_value(mut self, path: &str, value: f64) -> Self {
        self.set_value(path, value);
        self
    }

    pub fn set_value(&mut self, path: &str, value: f64) {
        let segments: Vec<&str> = path.split('.').collect();
        if let Some((head, rest)) = segments.split_first() {
            if let Some(section) = self.section_mut(head) {
                section.set_path(rest, value);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Period type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    Annual,
    Quarterly,
    Monthly,
}

impl PeriodType {
    /// Flow-to-annual multiplier (12 months, 4 quarters).
    pub fn annualization_factor(self) -> f64 {
        match self {
            PeriodType::Annual => 1.0,
            PeriodType::Quarterly => 4.0,
            PeriodType::Monthly => 12.0,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodType::Annual => "Annual",
            PeriodType::Quarterly => "Quarterly",
            PeriodType::Monthly => "Monthly",
        };
        f.write_str(s)
    }
}

impl FromStr for PeriodType {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" => Ok(PeriodType::Annual),
            "quarterly" | "quarter" => Ok(PeriodType::Quarterly),
            "monthly" | "month" => Ok(PeriodType::Monthly),
            other => Err(InsightError::InvalidInput {
                field: "period_type".into(),
                reason: format!("'{other}' is not Annual, Quarterly or Monthly"),
            }),
        }
    }
}

/// Unknown or malformed period types are treated as absent so that the label
/// heuristics take over.
fn lenient_period_type<'de, D>(deserializer: D) -> Result<Option<PeriodType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok()))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMeta {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default)]
    pub stock_code: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_company_name() -> String {
    "Unknown".to_string()
}

fn default_currency() -> String {
    "CNY".to_string()
}

impl Default for CompanyMeta {
    fn default() -> Self {
        CompanyMeta {
            name: default_company_name(),
            stock_code: None,
            currency: default_currency(),
        }
    }
}

/// One fiscal period's filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedReport {
    pub fiscal_year: String,
    #[serde(
        default,
        deserialize_with = "lenient_period_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub period_type: Option<PeriodType>,
    #[serde(default)]
    pub data: ReportData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_meta: Option<CompanyMeta>,
}

impl StandardizedReport {
    pub fn new(
        fiscal_year: impl Into<String>,
        period_type: Option<PeriodType>,
        data: ReportData,
    ) -> Self {
        StandardizedReport {
            fiscal_year: fiscal_year.into(),
            period_type,
            data,
            company_meta: None,
        }
    }

    /// Declared period type, or the one implied by the fiscal label.
    pub fn effective_period_type(&self) -> PeriodType {
        self.period_type
            .unwrap_or_else(|| period::infer_period_type(&self.fiscal_year))
    }
}

/// Ingestion envelope: company metadata plus its reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    #[serde(default)]
    pub company_meta: CompanyMeta,
    #[serde(default)]
    pub reports: Vec<StandardizedReport>,
}

impl ReportBundle {
    /// Accepts either `{company_meta, reports}` or a bare array of reports.
    pub fn from_value(value: serde_json::Value) -> InsightResult<Self> {
        if value.is_array() {
            let reports: Vec<StandardizedReport> = serde_json::from_value(value)?;
            return Ok(ReportBundle {
                company_meta: CompanyMeta::default(),
                reports,
            });
        }
        if !value.is_object() {
            return Err(InsightError::InvalidInput {
                field: "reports".into(),
                reason: "expected an object with `reports` or an array of reports".into(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}
