pub mod charts;
pub mod context;
pub mod dupont;
pub mod flags;
pub mod periods;
pub mod ratios;
pub mod signals;
pub mod store;

use std::time::Instant;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use insight_core::report::{ComparisonMode, PeriodIndex, StandardizedReport};
use insight_core::with_metadata;

/// Wrap a command result in the standard output envelope.
pub(crate) fn envelope<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    started: Instant,
    result: T,
) -> Result<Value, Box<dyn std::error::Error>> {
    let elapsed_us = started.elapsed().as_micros() as u64;
    let output = with_metadata(methodology, assumptions, warnings, elapsed_us, result);
    Ok(serde_json::to_value(output)?)
}

/// The report labelled `period`, or the index's latest when `None`.
pub(crate) fn select<'a>(
    index: &PeriodIndex<'a>,
    period: Option<&str>,
) -> Result<&'a StandardizedReport, Box<dyn std::error::Error>> {
    match period {
        Some(label) => index
            .get(label)
            .ok_or_else(|| format!("Unknown period '{}'", label).into()),
        None => index.latest().ok_or_else(|| "No reports in input".into()),
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Yoy,
    Sequential,
    Target,
}

impl From<ModeArg> for ComparisonMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Yoy => ComparisonMode::YoY,
            ModeArg::Sequential => ComparisonMode::Sequential,
            ModeArg::Target => ComparisonMode::Target,
        }
    }
}
