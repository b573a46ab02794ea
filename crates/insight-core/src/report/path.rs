//! Dot-path lookups into report data.
//!
//! Resolution never fails: a missing segment, a non-numeric leaf or an
//! absent report all read as `0`. Callers that need to tell "zero" from
//! "missing" use [`has_value`].
//!
//! [`get_value_in`] walks any line-item tree; the [`ReportData`] forms take
//! a path whose first segment names the statement.

use super::{LineItem, ReportData};

/// Node at `path` below `node`.
pub fn lookup_in<'a>(node: &'a LineItem, path: &str) -> Option<&'a LineItem> {
    node.lookup(path.split('.'))
}

/// Numeric value at `path` below `node`, or `0`.
pub fn get_value_in(node: &LineItem, path: &str) -> f64 {
    resolve_in(node, path).unwrap_or(0.0)
}

pub fn has_value_in(node: &LineItem, path: &str) -> bool {
    resolve_in(node, path).is_some()
}

fn resolve_in(node: &LineItem, path: &str) -> Option<f64> {
    lookup_in(node, path)?.numeric()
}

/// Numeric value at `path`, or `0`.
pub fn get_value(data: Option<&ReportData>, path: &str) -> f64 {
    resolve(data, path).unwrap_or(0.0)
}

/// Whether `path` resolves to a number (including an explicit `0`).
pub fn has_value(data: Option<&ReportData>, path: &str) -> bool {
    resolve(data, path).is_some()
}

/// Sum of several paths; each absent path contributes `0`.
pub fn sum_values(data: Option<&ReportData>, paths: &[&str]) -> f64 {
    paths.iter().map(|p| get_value(data, p)).sum()
}

fn resolve(data: Option<&ReportData>, path: &str) -> Option<f64> {
    data?.lookup(path)?.numeric()
}
