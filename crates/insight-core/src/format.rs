//! Fixed-point rendering of engine values.
//!
//! The dashboard compares formatted strings across periods and companies, so
//! rounding has to be identical everywhere. [`to_fixed`] follows JavaScript's
//! `Number.prototype.toFixed`: the exact binary value of the `f64` is rounded
//! half away from zero, and a negative input keeps its `-` sign even when the
//! rounded magnitude is zero (`-0.001` -> `"-0.00"`).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Hundred-million divisor used for currency magnitudes ("B" suffix).
pub const HUNDRED_MILLION: f64 = 1e8;

/// Render `value` with exactly `digits` fractional digits.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let body = match Decimal::from_f64_retain(magnitude) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", digits as usize, rounded)
        }
        // Beyond Decimal's range; the integer part dominates anyway.
        None => format!("{:.*}", digits as usize, magnitude),
    };
    format!("{sign}{body}")
}

/// `12.34%` from `0.1234`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", to_fixed(value * 100.0, 2))
}

/// One-decimal percentage used in flag diagnostics (`30.0%`).
pub fn format_percent_1dp(value: f64) -> String {
    format!("{}%", to_fixed(value * 100.0, 1))
}

pub fn format_number(value: f64) -> String {
    to_fixed(value, 2)
}

pub fn format_days(value: f64) -> String {
    format!("{} days", to_fixed(value, 0))
}

/// Currency in hundred-millions with a `B` suffix (`2.50B`).
pub fn format_hundred_millions(value: f64) -> String {
    format!("{}B", to_fixed(value / HUNDRED_MILLION, 2))
}

/// Period-over-period change string.
///
/// Percent metrics report the difference in percentage points; everything
/// else is scaled to `B`/`M`/`K` by magnitude. A positive difference gets an
/// explicit `+`.
pub fn format_change(diff: f64, percent: bool) -> String {
    let body = if percent {
        format!("{}%", to_fixed(diff * 100.0, 2))
    } else {
        let abs = diff.abs();
        if abs >= 1_000_000_000.0 {
            format!("{}B", to_fixed(diff / 1_000_000_000.0, 2))
        } else if abs >= 1_000_000.0 {
            format!("{}M", to_fixed(diff / 1_000_000.0, 2))
        } else if abs >= 1_000.0 {
            format!("{}K", to_fixed(diff / 1_000.0, 2))
        } else {
            to_fixed(diff, 2)
        }
    };
    if diff > 0.0 {
        format!("+{body}")
    } else {
        body
    }
}

/// Grouped display for raw statement amounts: below one million the value is
/// printed with thousands separators, above it is shown in millions (`1.50M`).
pub fn format_large_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{sign}{}M", group_thousands(&to_fixed(abs / 1_000_000.0, 2)))
    } else {
        format!("{sign}{}", group_thousands(&to_fixed(abs, 2)))
    }
}

fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// How a metric's raw value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    Percent,
    /// Percentage with a single decimal.
    PercentShort,
    Number,
    Days,
    HundredMillions,
    /// Always `-`; used for metrics that cannot be computed.
    Placeholder,
}

impl ValueFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            ValueFormat::Percent => format_percent(value),
            ValueFormat::PercentShort => format_percent_1dp(value),
            ValueFormat::Number => format_number(value),
            ValueFormat::Days => format_days(value),
            ValueFormat::HundredMillions => format_hundred_millions(value),
            ValueFormat::Placeholder => "-".to_string(),
        }
    }
}
