use alloc::string::{String, ToString};
use core::fmt;

use crate::numeric::format_float;
use crate::{Key, Value};

/// Renders `value` the way `var_dump` prints it.
///
/// Container entries are indented two spaces per nesting level and every dump
/// ends with a newline.
///
/// # Examples
///
/// ```
/// use wabi_dict::{Dict, Value, var_dump};
///
/// let dict = Dict::from([(0, Value::from("value1")), (1, Value::Int(2))]);
/// assert_eq!(
///     var_dump(&dict.into()),
///     "dict(2) {\n  [0]=>\n  string(6) \"value1\"\n  [1]=>\n  int(2)\n}\n"
/// );
/// assert_eq!(var_dump(&Value::Null), "NULL\n");
/// ```
#[must_use]
pub fn var_dump(value: &Value) -> String {
    Dump(value).to_string()
}

/// A [`Display`](fmt::Display) adapter producing the same text as
/// [`var_dump`].
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a>(pub &'a Value);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, 0)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Null => f.write_str("NULL\n"),
        Value::Bool(b) => writeln!(f, "bool({b})"),
        Value::Int(i) => writeln!(f, "int({i})"),
        Value::Float(x) => writeln!(f, "float({})", format_float(*x)),
        Value::Str(s) => writeln!(f, "string({}) \"{s}\"", s.len()),
        Value::Array(a) => write_entries(f, "array", a.len(), a.iter(), depth),
        Value::Dict(d) => write_entries(f, "dict", d.len(), d.iter(), depth),
        Value::Vec(v) => {
            let keys = v.iter().enumerate().map(|(i, value)| (Entry::Index(i), value));
            write_entries(f, "vec", v.len(), keys, depth)
        }
    }
}

enum Entry<'a> {
    Key(&'a Key),
    Index(usize),
}

impl<'a> From<&'a Key> for Entry<'a> {
    fn from(key: &'a Key) -> Self {
        Entry::Key(key)
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Key(Key::Int(i)) => write!(f, "[{i}]"),
            Entry::Key(Key::Str(s)) => write!(f, "[\"{s}\"]"),
            Entry::Index(i) => write!(f, "[{i}]"),
        }
    }
}

fn write_entries<'a, K, I>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    len: usize,
    entries: I,
    depth: usize,
) -> fmt::Result
where
    K: Into<Entry<'a>>,
    I: Iterator<Item = (K, &'a Value)>,
{
    writeln!(f, "{name}({len}) {{")?;
    let indent = (depth + 1) * 2;
    for (key, value) in entries {
        let key: Entry<'a> = key.into();
        writeln!(f, "{:indent$}{key}=>", "")?;
        write!(f, "{:indent$}", "")?;
        write_value(f, value, depth + 1)?;
    }
    writeln!(f, "{:width$}}}", "", width = depth * 2)
}
