//! Trend annotation of a metric set against a comparison set.

use super::{AnnotatedMetric, Metric, Trend};
use crate::format::format_change;

/// Movements smaller than this are reported as stable.
const TREND_EPSILON: f64 = 0.00001;

/// Attach trend, change string and comparison value to each metric in
/// `current`, pairing by metric name. Unmatched metrics stay stable with
/// `-` placeholders.
pub fn annotate(current: &[Metric], comparison: &[Metric]) -> Vec<AnnotatedMetric> {
    current
        .iter()
        .map(|m| {
            let mut metric = m.clone();
            let Some(comp) = comparison.iter().find(|c| c.name == m.name) else {
                return AnnotatedMetric {
                    metric: Metric {
                        trend: Trend::Stable,
                        change: "-".to_string(),
                        ..metric
                    },
                    compare_value: "-".to_string(),
                };
            };

            let diff = m.raw_value - comp.raw_value;
            metric.trend = if diff > TREND_EPSILON {
                Trend::Up
            } else if diff < -TREND_EPSILON {
                Trend::Down
            } else {
                Trend::Stable
            };
            metric.change = format_change(diff, m.value.contains('%'));

            AnnotatedMetric {
                metric,
                compare_value: comp.value.clone(),
            }
        })
        .collect()
}
