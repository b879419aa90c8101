//! Value comparisons: loose equality, strict identity, and the total order
//! used by the sorts.
//!
//! # Loose equality
//!
//! `T(x)` is [`Value::is_truthy`]; "numeric" is [`parse_numeric`] succeeding.
//!
//! | left \ right | null | bool `b` | int `j` | float `g` | string `t` | container `c` |
//! |---|---|---|---|---|---|---|
//! | null | true | `!b` | `j == 0` | `g == 0.0` | `t == ""` | `c` empty |
//! | bool `a` | `!a` | `a == b` | `a == T(j)` | `a == T(g)` | `a == T(t)` | `a == T(c)` |
//! | int `i` | `i == 0` | `T(i) == b` | `i == j` | exact | `t` numeric and equal | false |
//! | float `f` | `f == 0.0` | `T(f) == b` | exact | `f == g` | `t` numeric and equal | false |
//! | string `s` | `s == ""` | `T(s) == b` | mirrored | mirrored | both numeric: by number, else bytes | false |
//! | container | empty | `T(c) == b` | false | false | false | same kind, see below |
//!
//! Two containers of the same kind are loosely equal when they have the same
//! length and every key of one maps to a loosely equal value in the other
//! (vecs compare position by position). Containers of different kinds are
//! never equal. NaN is equal to nothing.
//!
//! # Sort order
//!
//! null < `false` < `true` < numbers < non-numeric strings < containers.
//! Ints, floats and numeric strings share one class and compare exactly by
//! value, NaN last. Non-numeric strings compare bytewise, containers by length.
//! The order is total, so every sort here is a well-defined stable sort.

use core::cmp::Ordering;

use crate::numeric::{Number, parse_numeric};
use crate::{Array, Dict, Key, Sequence, Value};

/// Loose (`==`) equality following the table in the module docs.
///
/// # Examples
///
/// ```
/// use wabi_dict::Value;
/// use wabi_dict::compare::loose_eq;
///
/// assert!(loose_eq(&Value::Int(2), &Value::from("2")));
/// assert!(loose_eq(&Value::from("1e3"), &Value::from("1000")));
/// assert!(loose_eq(&Value::Bool(false), &Value::Int(0)));
/// assert!(!loose_eq(&Value::Bool(false), &Value::Int(1)));
/// assert!(!loose_eq(&Value::Int(0), &Value::from("not-found")));
/// assert!(!loose_eq(&Value::Null, &Value::from("0")));
/// ```
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == other.is_truthy(),
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
        (Value::Str(x), Value::Str(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(m), Some(n)) => m.numeric_eq(n),
            _ => x == y,
        },
        (Value::Str(s), other) | (other, Value::Str(s)) => match (parse_numeric(s), scalar_number(other)) {
            (Some(m), Some(n)) => m.numeric_eq(n),
            _ => false,
        },
        (Value::Array(x), Value::Array(y)) => array_loose_eq(x, y),
        (Value::Dict(x), Value::Dict(y)) => dict_loose_eq(x, y),
        (Value::Vec(x), Value::Vec(y)) => sequence_loose_eq(x, y),
        _ => match (scalar_number(a), scalar_number(b)) {
            (Some(m), Some(n)) => m.numeric_eq(n),
            _ => false,
        },
    }
}

fn scalar_number(v: &Value) -> Option<Number> {
    match v {
        Value::Int(i) => Some(Number::Int(*i)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

fn keyed_loose_eq<'a, 'b, I, F>(mut left: I, lookup: F, right_len: usize) -> bool
where
    I: ExactSizeIterator<Item = (&'a Key, &'a Value)>,
    F: Fn(&Key) -> Option<&'b Value>,
{
    left.len() == right_len && left.all(|(k, v)| lookup(k).is_some_and(|w| loose_eq(v, w)))
}

fn dict_loose_eq(x: &Dict, y: &Dict) -> bool {
    keyed_loose_eq(x.iter(), |k| y.get(k), y.len())
}

fn array_loose_eq(x: &Array, y: &Array) -> bool {
    keyed_loose_eq(x.iter(), |k| y.get(k), y.len())
}

fn sequence_loose_eq(x: &Sequence, y: &Sequence) -> bool {
    x.len() == y.len() && x.iter().zip(y.iter()).all(|(v, w)| loose_eq(v, w))
}

/// Strict (`===`) identity: same variant and same contents, containers in the
/// same order. Equivalent to `a == b`.
#[must_use]
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// Sort rank of a value or key; see the module docs.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Rank<'a> {
    Null,
    Bool(bool),
    Number(Number),
    Str(&'a str),
    Container(usize),
}

impl<'a> Rank<'a> {
    pub(crate) fn of_value(v: &'a Value) -> Self {
        match v {
            Value::Null => Rank::Null,
            Value::Bool(b) => Rank::Bool(*b),
            Value::Int(i) => Rank::Number(Number::Int(*i)),
            Value::Float(f) => Rank::Number(Number::Float(*f)),
            Value::Str(s) => Self::of_str(s),
            Value::Array(a) => Rank::Container(a.len()),
            Value::Dict(d) => Rank::Container(d.len()),
            Value::Vec(s) => Rank::Container(s.len()),
        }
    }

    pub(crate) fn of_key(k: &'a Key) -> Self {
        match k {
            Key::Int(i) => Rank::Number(Number::Int(*i)),
            Key::Str(s) => Self::of_str(s),
        }
    }

    fn of_str(s: &'a str) -> Self {
        parse_numeric(s).map_or(Rank::Str(s), Rank::Number)
    }

    const fn class(self) -> u8 {
        match self {
            Rank::Null => 0,
            Rank::Bool(_) => 1,
            Rank::Number(_) => 2,
            Rank::Str(_) => 3,
            Rank::Container(_) => 4,
        }
    }

    pub(crate) fn total_cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Rank::Bool(a), Rank::Bool(b)) => a.cmp(&b),
            (Rank::Number(a), Rank::Number(b)) => a.total_cmp(b),
            (Rank::Str(a), Rank::Str(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Rank::Container(a), Rank::Container(b)) => a.cmp(&b),
            _ => self.class().cmp(&other.class()),
        }
    }
}

/// The total order the value sorts use.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use wabi_dict::Value;
/// use wabi_dict::compare::sort_cmp;
///
/// assert_eq!(sort_cmp(&Value::from("10"), &Value::Int(9)), Ordering::Greater);
/// assert_eq!(sort_cmp(&Value::Int(5), &Value::from("apple")), Ordering::Less);
/// assert_eq!(sort_cmp(&Value::Null, &Value::Bool(false)), Ordering::Less);
/// ```
#[must_use]
pub fn sort_cmp(a: &Value, b: &Value) -> Ordering {
    Rank::of_value(a).total_cmp(Rank::of_value(b))
}

/// The total order the key sorts use: numeric keys (including numeric string
/// keys) by value, then other string keys bytewise.
///
/// Distinct keys never compare equal. Keys of equal rank, such as `1`, `"1"`
/// and `"1.0"`, fall back to the derived [`Ord`] of [`Key`].
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use wabi_dict::Key;
/// use wabi_dict::compare::key_cmp;
///
/// assert_eq!(key_cmp(&Key::from("10"), &Key::Int(9)), Ordering::Greater);
/// assert_eq!(key_cmp(&Key::Int(1), &Key::from("1")), Ordering::Less);
/// assert_eq!(key_cmp(&Key::from("1"), &Key::from("1.0")), Ordering::Less);
/// ```
#[must_use]
pub fn key_cmp(a: &Key, b: &Key) -> Ordering {
    Rank::of_key(a).total_cmp(Rank::of_key(b)).then_with(|| a.cmp(b))
}
