use alloc::string::{String, ToString};
use core::fmt;

/// A dict or array key: an integer or a string.
///
/// Integer and string keys are always distinct, `Key::Int(1)` and
/// `Key::Str("1".into())` may coexist in a [`Dict`](crate::Dict). Only the
/// legacy [`Array`](crate::Array) folds canonical integer strings onto integer
/// keys, see [`Key::coerce_legacy`].
///
/// The derived ordering (all integers before all strings) is the storage order
/// of the key index and has nothing to do with [`SortMode::Keys`](crate::SortMode).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns the integer key, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Returns the string key, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Converts a string key holding a canonical decimal integer into an
    /// integer key.
    ///
    /// Canonical means what `i64::to_string` would produce: no sign other than
    /// a leading `-`, no leading zeros, no whitespace, no `-0`, and in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::Key;
    ///
    /// assert_eq!(Key::from("42").coerce_legacy(), Key::Int(42));
    /// assert_eq!(Key::from("-7").coerce_legacy(), Key::Int(-7));
    /// assert_eq!(Key::from("042").coerce_legacy(), Key::from("042"));
    /// assert_eq!(Key::from("+1").coerce_legacy(), Key::from("+1"));
    /// assert_eq!(Key::from("-0").coerce_legacy(), Key::from("-0"));
    /// ```
    #[must_use]
    pub fn coerce_legacy(self) -> Key {
        match self {
            Key::Str(s) => match canonical_int(&s) {
                Some(i) => Key::Int(i),
                None => Key::Str(s),
            },
            int @ Key::Int(_) => int,
        }
    }
}

fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let well_formed = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
    };
    if well_formed { s.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;

    #[test]
    fn integers_order_before_strings() {
        assert!(Key::Int(i64::MAX) < Key::from(""));
        assert!(Key::from("a") < Key::from("b"));
    }

    #[test]
    fn out_of_range_strings_stay_strings() {
        let huge = "9223372036854775808";
        assert_eq!(Key::from(huge).coerce_legacy(), Key::from(huge));
        assert_eq!(Key::from("-9223372036854775808").coerce_legacy(), Key::Int(i64::MIN));
        assert_eq!(Key::from("0").coerce_legacy(), Key::Int(0));
        assert_eq!(Key::from("1.0").coerce_legacy(), Key::from("1.0"));
        assert_eq!(Key::from(" 1").coerce_legacy(), Key::from(" 1"));
        assert_eq!(Key::from("-").coerce_legacy(), Key::from("-"));
    }

    proptest! {
        #[test]
        fn printed_integers_coerce_back(i in any::<i64>()) {
            prop_assert_eq!(Key::from(format!("{i}")).coerce_legacy(), Key::Int(i));
        }
    }
}
