//! Lexical classes and formatting for accumulator values.
//!
//! All accumulator state is text. Numeric operators re-parse their operands
//! on every evaluation, so the textual forms below decide which arithmetic
//! path an operation takes.

pub const TRUE: &str = "TRUE";
pub const FALSE: &str = "FALSE";

/// Returns true if `s` matches `-?[0-9]+`.
pub fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` matches `-?[0-9]+(\.[0-9]+)?`.
pub fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => {
            is_integer(whole) && !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => is_integer(s),
    }
}

/// Parse an integer operand. Out-of-range literals are rejected.
pub fn parse_integer(s: &str) -> Option<i64> {
    if !is_integer(s) {
        return None;
    }
    s.parse().ok()
}

pub fn parse_decimal(s: &str) -> Option<f64> {
    if !is_decimal(s) {
        return None;
    }
    s.parse().ok()
}

/// Format a decimal result. Non-finite values have no textual form.
///
/// Integral values keep a trailing `.0` so they stay distinguishable from
/// integer results.
pub fn format_decimal(x: f64) -> Option<String> {
    if !x.is_finite() {
        return None;
    }
    Some(format!("{x:?}"))
}

pub fn format_bool(b: bool) -> String {
    if b { TRUE } else { FALSE }.to_string()
}

/// Floored modulo: the result carries the sign of `b`.
pub fn floor_mod(a: i64, b: i64) -> Option<i64> {
    match b {
        0 => return None,
        -1 => return Some(0),
        _ => {}
    }
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        r.checked_add(b)
    } else {
        Some(r)
    }
}

/// Repeated multiplication, failing on a negative exponent or overflow.
pub fn int_pow(base: i64, exp: i64) -> Option<i64> {
    if exp < 0 {
        return None;
    }
    match base {
        0 => Some(if exp == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
        // Any other base overflows long before the exponent leaves u32.
        _ => base.checked_pow(u32::try_from(exp).ok()?),
    }
}

/// Round half toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let f = x.floor();
    // x - floor(x) is exact, unlike x + 0.5.
    if x - f >= 0.5 { f + 1.0 } else { f }
}

/// Convert an integer-valued float to `i64`, rejecting anything that does
/// not fit.
pub fn to_integer(x: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if x.is_finite() && x >= -LIMIT && x < LIMIT {
        Some(x as i64)
    } else {
        None
    }
}
