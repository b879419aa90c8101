//! Numbers, numeric strings and the string-to-number coercions used by the
//! folds and comparisons.

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

// 2^63 as f64, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// An integer or a float, the result of any numeric coercion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Converts to a float, rounding large integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Adds, staying integral until the sum overflows.
    #[must_use]
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.checked_add(b).map_or_else(|| Number::Float(self.as_f64() + other.as_f64()), Number::Int),
            _ => Number::Float(self.as_f64() + other.as_f64()),
        }
    }

    /// Multiplies, staying integral until the product overflows.
    #[must_use]
    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.checked_mul(b).map_or_else(|| Number::Float(self.as_f64() * other.as_f64()), Number::Int),
            _ => Number::Float(self.as_f64() * other.as_f64()),
        }
    }

    /// Exact numeric comparison. Integers and floats are compared without
    /// rounding; NaN sorts above every other number and equal to itself.
    #[must_use]
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
            (Number::Float(a), Number::Float(b)) => match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // Neither is NaN, and -0.0 == 0.0 here.
                (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            },
        }
    }

    /// Exact numeric equality; NaN equals nothing.
    #[must_use]
    pub fn numeric_eq(self, other: Number) -> bool {
        let nan = |n: Number| matches!(n, Number::Float(f) if f.is_nan());
        !nan(self) && !nan(other) && self.total_cmp(other) == Ordering::Equal
    }

    /// Truthiness: zero is false.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Number::Int(i) => i != 0,
            Number::Float(f) => f != 0.0,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    // In range, so the cast truncates toward zero without saturating.
    let whole = f as i64;
    i.cmp(&whole).then_with(|| {
        // `whole as f64` is exact: below 2^53 trivially, above it every float is whole.
        let rest = f - whole as f64;
        0.0_f64.partial_cmp(&rest).unwrap_or(Ordering::Equal)
    })
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).copied().is_some_and(is_whitespace) {
        i += 1;
    }
    i
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Scans a decimal literal at `start`; returns its end and whether it is
/// written as a float.
fn scan_number(bytes: &[u8], start: usize) -> Option<(usize, bool)> {
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    i = skip_digits(bytes, i);
    let mut digits = i - int_start;
    let mut is_float = false;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        let frac_digits = frac_end - (i + 1);
        if digits + frac_digits > 0 {
            digits += frac_digits;
            i = frac_end;
            is_float = true;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent_end = skip_digits(bytes, j);
        if exponent_end > j {
            i = exponent_end;
            is_float = true;
        }
    }
    Some((i, is_float))
}

fn to_number(literal: &str, is_float: bool) -> Number {
    if !is_float {
        if let Ok(i) = literal.parse() {
            return Number::Int(i);
        }
    }
    // Integers too large for i64 degrade to floats.
    Number::Float(literal.parse().unwrap_or(0.0))
}

/// Parses a whole numeric string: optional surrounding whitespace around a
/// signed decimal integer or float literal.
///
/// # Examples
///
/// ```
/// use wabi_dict::numeric::{Number, parse_numeric};
///
/// assert_eq!(parse_numeric(" 12 "), Some(Number::Int(12)));
/// assert_eq!(parse_numeric("1e3"), Some(Number::Float(1000.0)));
/// assert_eq!(parse_numeric("12abc"), None);
/// assert_eq!(parse_numeric(""), None);
/// ```
#[must_use]
pub fn parse_numeric(s: &str) -> Option<Number> {
    let bytes = s.as_bytes();
    let start = skip_whitespace(bytes, 0);
    let (end, is_float) = scan_number(bytes, start)?;
    if skip_whitespace(bytes, end) != bytes.len() {
        return None;
    }
    Some(to_number(&s[start..end], is_float))
}

/// Returns the number spelled by the leading numeric prefix of `s`, or
/// `Int(0)` when there is none.
///
/// # Examples
///
/// ```
/// use wabi_dict::numeric::{Number, numeric_prefix};
///
/// assert_eq!(numeric_prefix("3 apples"), Number::Int(3));
/// assert_eq!(numeric_prefix("2.5kg"), Number::Float(2.5));
/// assert_eq!(numeric_prefix("pad"), Number::Int(0));
/// ```
#[must_use]
pub fn numeric_prefix(s: &str) -> Number {
    let bytes = s.as_bytes();
    let start = skip_whitespace(bytes, 0);
    match scan_number(bytes, start) {
        Some((end, is_float)) => to_number(&s[start..end], is_float),
        None => Number::Int(0),
    }
}

/// Formats a float the way values are stringified: the shortest round-trip
/// digits, whole values without a fraction, exponent form outside
/// `[1e-4, 1e15)`.
///
/// # Examples
///
/// ```
/// use wabi_dict::numeric::format_float;
///
/// assert_eq!(format_float(2.0), "2");
/// assert_eq!(format_float(0.1), "0.1");
/// assert_eq!(format_float(1e20), "1.0E+20");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-INF");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return String::from("NAN");
    }
    if f.is_infinite() {
        return String::from(if f > 0.0 { "INF" } else { "-INF" });
    }
    let magnitude = if f < 0.0 { -f } else { f };
    if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        return exponent_form(f);
    }
    if f == (f as i64) as f64 {
        if f == 0.0 && f.is_sign_negative() {
            return String::from("-0");
        }
        return format!("{}", f as i64);
    }
    format!("{f}")
}

fn exponent_form(f: f64) -> String {
    let raw = format!("{f:e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    if mantissa.contains('.') {
        format!("{mantissa}E{sign}{digits}")
    } else {
        format!("{mantissa}.0E{sign}{digits}")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numeric_strings() {
        assert_eq!(parse_numeric("-5"), Some(Number::Int(-5)));
        assert_eq!(parse_numeric("+5"), Some(Number::Int(5)));
        assert_eq!(parse_numeric(".5"), Some(Number::Float(0.5)));
        assert_eq!(parse_numeric("5."), Some(Number::Float(5.0)));
        assert_eq!(parse_numeric("\t7\n"), Some(Number::Int(7)));
        assert_eq!(parse_numeric("9223372036854775808"), Some(Number::Float(I64_BOUND)));
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("1e"), None);
        assert_eq!(parse_numeric("0x1A"), None);
        assert_eq!(parse_numeric("1 2"), None);
    }

    #[test]
    fn prefixes() {
        assert_eq!(numeric_prefix("1e"), Number::Int(1));
        assert_eq!(numeric_prefix("1e2x"), Number::Float(100.0));
        assert_eq!(numeric_prefix("  -4.5 apples"), Number::Float(-4.5));
        assert_eq!(numeric_prefix(""), Number::Int(0));
        assert_eq!(numeric_prefix("-"), Number::Int(0));
    }

    #[test]
    fn overflow_promotes_to_float() {
        assert_eq!(Number::Int(i64::MAX).add(Number::Int(1)), Number::Float(I64_BOUND));
        assert_eq!(Number::Int(2).mul(Number::Int(3)), Number::Int(6));
        assert!(matches!(Number::Int(i64::MAX).mul(Number::Int(2)), Number::Float(_)));
        assert_eq!(Number::Int(1).add(Number::Float(0.5)), Number::Float(1.5));
    }

    #[test]
    fn int_float_comparison_is_exact() {
        // 2^53 + 1 has no float representation; it must still compare above 2^53.
        let big = (1_i64 << 53) + 1;
        assert_eq!(Number::Int(big).total_cmp(Number::Float(9_007_199_254_740_992.0)), Ordering::Greater);
        assert_eq!(Number::Int(3).total_cmp(Number::Float(3.5)), Ordering::Less);
        assert_eq!(Number::Int(-3).total_cmp(Number::Float(-3.5)), Ordering::Greater);
        assert_eq!(Number::Int(3).total_cmp(Number::Float(3.0)), Ordering::Equal);
        assert_eq!(Number::Int(i64::MAX).total_cmp(Number::Float(I64_BOUND)), Ordering::Less);
        assert_eq!(Number::Int(i64::MIN).total_cmp(Number::Float(-I64_BOUND)), Ordering::Equal);
        assert_eq!(Number::Int(0).total_cmp(Number::Float(f64::NAN)), Ordering::Less);
        assert!(!Number::Float(f64::NAN).numeric_eq(Number::Float(f64::NAN)));
        assert!(Number::Float(-0.0).numeric_eq(Number::Int(0)));
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(1e15), "1.0E+15");
        assert_eq!(format_float(1.25e-5), "1.25E-5");
        assert_eq!(format_float(f64::NAN), "NAN");
    }

    fn number_strategy() -> impl Strategy<Value = Number> {
        prop_oneof![
            any::<i64>().prop_map(Number::Int),
            (-1e20..1e20_f64).prop_map(Number::Float),
            Just(Number::Float(f64::NAN)),
        ]
    }

    proptest! {
        #[test]
        fn total_cmp_is_antisymmetric(a in number_strategy(), b in number_strategy()) {
            prop_assert_eq!(a.total_cmp(b), b.total_cmp(a).reverse());
        }

        #[test]
        fn total_cmp_is_transitive(a in number_strategy(), b in number_strategy(), c in number_strategy()) {
            if a.total_cmp(b) != Ordering::Greater && b.total_cmp(c) != Ordering::Greater {
                prop_assert_ne!(a.total_cmp(c), Ordering::Greater);
            }
        }

        #[test]
        fn printed_integers_parse_back(i in any::<i64>()) {
            prop_assert_eq!(parse_numeric(&alloc::format!("{i}")), Some(Number::Int(i)));
        }
    }
}
