use alloc::string::{String, ToString};

use crate::numeric::{Number, format_float, numeric_prefix};
use crate::{Array, Dict, Key, Sequence};

/// Which of the three container flavors a value is.
///
/// The tags are mutually exclusive: an empty dict is never an array, and an
/// empty vec is never a dict.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContainerKind {
    /// A legacy array, with numeric-string key coercion.
    Array,
    /// An insertion-ordered [`Dict`].
    Dict,
    /// A dense [`Sequence`].
    Vec,
}

impl ContainerKind {
    /// The lowercase type name used by dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Array => "array",
            ContainerKind::Dict => "dict",
            ContainerKind::Vec => "vec",
        }
    }
}

/// A dynamically typed runtime value.
///
/// `PartialEq` is strict identity: same variant, same contents, and for
/// containers the same entries in the same order. Loose equality lives in
/// [`compare::loose_eq`](crate::compare::loose_eq).
///
/// # Examples
///
/// ```
/// use wabi_dict::{ContainerKind, Dict, Sequence, Value};
///
/// let v = Value::from(Sequence::from(["value1", "value2"]));
/// assert_eq!(v.container_kind(), Some(ContainerKind::Vec));
/// assert!(v.is_vec());
/// assert!(!Value::from(Dict::new()).is_array());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Array),
    Dict(Dict),
    Vec(Sequence),
}

impl Value {
    /// Classifies the value as one of the three container kinds, or `None` for
    /// scalars.
    #[must_use]
    pub const fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Value::Array(_) => Some(ContainerKind::Array),
            Value::Dict(_) => Some(ContainerKind::Dict),
            Value::Vec(_) => Some(ContainerKind::Vec),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    #[must_use]
    pub const fn is_vec(&self) -> bool {
        matches!(self, Value::Vec(_))
    }

    /// Number of entries if the value is a container.
    #[must_use]
    pub fn container_len(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(a.len()),
            Value::Dict(d) => Some(d.len()),
            Value::Vec(v) => Some(v.len()),
            _ => None,
        }
    }

    /// The type name used in dumps and error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
            Value::Vec(_) => "vec",
        }
    }

    /// Truthiness: null, `false`, zero, `""`, `"0"` and empty containers are
    /// false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty() && s != "0",
            _ => self.container_len().is_some_and(|len| len > 0),
        }
    }

    /// Numeric coercion used by `sum` and `product`.
    ///
    /// Strings contribute their leading numeric prefix. Containers have no
    /// numeric value and return `None`.
    #[must_use]
    pub fn to_number(&self) -> Option<Number> {
        match self {
            Value::Null => Some(Number::Int(0)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Str(s) => Some(numeric_prefix(s)),
            Value::Array(_) | Value::Dict(_) | Value::Vec(_) => None,
        }
    }

    /// String conversion. Containers convert to their capitalized kind name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::Value;
    ///
    /// assert_eq!(Value::Bool(true).to_php_string(), "1");
    /// assert_eq!(Value::Bool(false).to_php_string(), "");
    /// assert_eq!(Value::Float(3.0).to_php_string(), "3");
    /// ```
    #[must_use]
    pub fn to_php_string(&self) -> String {
        match self {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => String::from("1"),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Str(s) => s.clone(),
            Value::Array(_) => String::from("Array"),
            Value::Dict(_) => String::from("Dict"),
            Value::Vec(_) => String::from("Vec"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Vec(v)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
