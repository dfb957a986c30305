//! # Numeric Input Coercion
//!
//! Every numeric field in the console funnels through the helpers in this
//! module. Raw text arrives from input widgets; bad input (empty, non-numeric,
//! negative where a negative makes no sense) falls back silently so live
//! recomputation is never interrupted by a half-typed value.
//!
//! Coercion rules:
//!
//! - dimensions and rates: `max(0, parsed)`, unparsable or non-finite → `0`
//! - per-piece quantities: integer `max(1, parsed)`, unparsable → `1`
//! - comparison rate: present only when the parsed value is strictly positive

/// Parse raw text as a non-negative number; unparsable or negative input
/// coerces to `0.0`.
pub fn coerce_non_negative(raw: &str) -> f64 {
    sanitize_non_negative(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Clamp an already-parsed number to the non-negative range. NaN and
/// infinities coerce to `0.0`.
pub fn sanitize_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Parse raw text as a piece count; unparsable input or anything below one
/// coerces to `1`.
pub fn coerce_quantity(raw: &str) -> u32 {
    sanitize_quantity(raw.trim().parse::<f64>().unwrap_or(1.0))
}

/// Truncate an already-parsed number to an integer piece count of at least
/// one.
pub fn sanitize_quantity(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    let truncated = value.trunc();
    if truncated < 1.0 {
        1
    } else if truncated >= u32::MAX as f64 {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Parse raw text as an optional comparison rate. Only a strictly positive
/// value yields a rate; zero, negative, or unparsable input means "no
/// comparison price".
pub fn coerce_comparison_rate(raw: &str) -> Option<f64> {
    sanitize_comparison_rate(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Narrow an already-parsed number to an optional comparison rate.
pub fn sanitize_comparison_rate(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
