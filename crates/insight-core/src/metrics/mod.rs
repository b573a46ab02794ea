//! Ratio boards, signal tables and DuPont decomposition.
//!
//! Two independent rule tables live here: the full ratio set used by the
//! ratios board ([`ratios`]) and the compact signals view ([`signals`]).
//! They overlap but use different category taxonomies and formats, so they
//! are kept apart rather than merged.

pub mod board;
pub mod dupont;
pub mod ratios;
pub mod signals;
pub mod trend;

use serde::{Deserialize, Serialize};

use crate::format::ValueFormat;

pub use board::{build_ratio_board, RatioBoard};
pub use dupont::{calculate_dupont, compare_dupont, DupontComparison, DupontMetrics};
pub use ratios::calculate_metrics;
pub use signals::calculate_signals;
pub use trend::annotate;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// One computed ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub category: String,
    pub name: String,
    /// Formatted for display.
    pub value: String,
    #[serde(rename = "rawValue")]
    pub raw_value: f64,
    pub trend: Trend,
    pub change: String,
    pub description: String,
    pub formula: String,
}

/// A metric annotated against a comparison period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedMetric {
    #[serde(flatten)]
    pub metric: Metric,
    #[serde(rename = "compareValue")]
    pub compare_value: String,
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Static descriptor of one metric over a pre-extracted input set `T`.
pub struct MetricRule<T> {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub formula: &'static str,
    pub format: ValueFormat,
    pub compute: fn(&T) -> f64,
}

impl<T> MetricRule<T> {
    pub fn evaluate(&self, inputs: &T) -> Metric {
        let raw = (self.compute)(inputs);
        Metric {
            category: self.category.to_string(),
            name: self.name.to_string(),
            value: self.format.apply(raw),
            raw_value: raw,
            trend: Trend::Stable,
            change: "-".to_string(),
            description: self.description.to_string(),
            formula: self.formula.to_string(),
        }
    }
}
