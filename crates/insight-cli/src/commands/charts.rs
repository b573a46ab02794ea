use std::time::Instant;

use clap::Args;
use serde_json::{json, Value};

use insight_core::charts::{map_chart, ChartKind};

use super::envelope;
use crate::input::ReportSource;

/// Arguments for chart series
#[derive(Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub source: ReportSource,

    /// Chart to map, e.g. asset-structure, growth, dupont
    #[arg(long)]
    pub kind: Option<String>,

    /// List the available chart kinds
    #[arg(long)]
    pub list: bool,
}

pub fn run_charts(args: ChartsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.list {
        let kinds: Vec<&str> = ChartKind::ALL.iter().map(|k| k.name()).collect();
        return Ok(json!(kinds));
    }

    let started = Instant::now();
    let kind: ChartKind = args
        .kind
        .as_deref()
        .ok_or("--kind is required (see --list)")?
        .parse()?;
    let bundle = args.source.load()?;
    let rows = map_chart(kind, &bundle.reports);

    envelope(
        "Chart series: currency in hundred millions, ratios in percent",
        &json!({ "kind": kind.name() }),
        Vec::new(),
        started,
        rows,
    )
}
