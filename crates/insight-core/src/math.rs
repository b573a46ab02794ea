//! Numeric primitives shared by the ratio, flag and chart modules.
//!
//! Every ratio in the engine is routed through [`safe_div`]: a zero
//! denominator yields `0`, never `NaN` or an infinity. Growth rates use
//! [`safe_growth`], whose denominator is the absolute prior value so that a
//! loss shrinking from -100 to -50 reads as +50%.

use crate::types::{Money, Rate};

/// `num / den`, or `0` when `den` is zero or the quotient is not finite.
pub fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let q = num / den;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

/// Sign-preserving growth: `(curr - prev) / |prev|`, `0` when `prev` is zero.
pub fn safe_growth(curr: f64, prev: f64) -> Rate {
    if prev != 0.0 {
        (curr - prev) / prev.abs()
    } else {
        0.0
    }
}

/// Two-point average; degrades to `current` when there is no prior value.
pub fn average(current: Money, previous: Option<Money>) -> Money {
    (current + previous.unwrap_or(current)) / 2.0
}

/// Absolute-tolerance comparison used by identity checks.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
        assert_eq!(safe_div(-5.0, 0.0), 0.0);
        assert_eq!(safe_div(f64::NAN, 0.0), 0.0);
        assert_eq!(safe_div(3.0, -0.0), 0.0);
    }

    #[test]
    fn test_safe_div_regular() {
        assert_eq!(safe_div(540.0, 1200.0), 0.45);
        assert_eq!(safe_div(-1.0, 4.0), -0.25);
    }

    #[test]
    fn test_safe_div_is_always_finite() {
        let samples = [
            (f64::MAX, 1e-300),
            (1.0, f64::MIN_POSITIVE),
            (f64::INFINITY, 2.0),
            (-7.5, 3.0),
        ];
        for (n, d) in samples {
            assert!(safe_div(n, d).is_finite(), "safe_div({n}, {d})");
        }
    }

    #[test]
    fn test_safe_growth_negative_base() {
        assert_eq!(safe_growth(-50.0, -100.0), 0.5);
        assert_eq!(safe_growth(-150.0, -100.0), -0.5);
    }

    #[test]
    fn test_safe_growth_positive_base() {
        assert!(approx_eq(safe_growth(1200.0, 1000.0), 0.2, 1e-12));
        assert!(approx_eq(safe_growth(260.0, 100.0), 1.6, 1e-12));
    }

    #[test]
    fn test_safe_growth_zero_base() {
        assert_eq!(safe_growth(500.0, 0.0), 0.0);
    }

    #[test]
    fn test_average_fallback() {
        assert_eq!(average(100.0, Some(50.0)), 75.0);
        assert_eq!(average(100.0, None), 100.0);
    }
}
