//! The array builtins, dispatched by name over dynamically typed arguments.
//!
//! Every builtin takes its arguments as a mutable slice of [`Value`]s. The
//! by-reference builtins (`array_pop`, `array_push`, `array_shift`,
//! `array_unshift` and the sorts) modify the first argument in place.
//! Arguments are checked before anything is modified, so a builtin that
//! returns an error leaves its arguments untouched.
//!
//! # Examples
//!
//! ```
//! use wabi_dict::{Dict, Value, builtins};
//!
//! let mut args = [Value::from(Dict::from_values([1, 2, 3])), Value::from("pushed")];
//! assert_eq!(builtins::call("array_push", &mut args)?, Value::Int(4));
//! assert_eq!(builtins::call("array_sum", &mut args[..1])?, Value::Int(6));
//!
//! let mut args = [Value::from("3"), args[0].clone()];
//! assert_eq!(builtins::call("array_search", &mut args)?, Value::Int(2));
//!
//! assert!(builtins::call("array_frobnicate", &mut []).is_err());
//! # Ok::<(), wabi_dict::Error>(())
//! ```

use alloc::string::ToString;
use core::mem;

use tracing::{debug, trace};

use crate::container::Container;
use crate::sort::{SortMode, SortOrder};
use crate::{Error, Result, Value};

/// The signature shared by all builtins.
pub type Builtin = fn(&mut [Value]) -> Result<Value>;

const CONTAINER: &str = "a container";
const NO_LIMIT: usize = usize::MAX;

/// Finds the builtin called `name`.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    let builtin: Builtin = match name {
        "array_count_values" => array_count_values,
        "array_pad" => array_pad,
        "array_pop" => array_pop,
        "array_product" => array_product,
        "array_push" => array_push,
        "array_reverse" => array_reverse,
        "array_search" => array_search,
        "array_shift" => array_shift,
        "array_sum" => array_sum,
        "array_unshift" => array_unshift,
        "count" => count,
        "in_array" => in_array,
        "sort" => sort,
        "rsort" => rsort,
        "asort" => asort,
        "arsort" => arsort,
        "ksort" => ksort,
        "krsort" => krsort,
        "is_array" => is_array,
        "is_dict" => is_dict,
        "is_vec" => is_vec,
        _ => return None,
    };
    Some(builtin)
}

/// Calls the builtin called `name` with `args`.
///
/// # Errors
///
/// [`Error::UnknownBuiltin`] if there is no such builtin, otherwise whatever
/// the builtin returns.
pub fn call(name: &str, args: &mut [Value]) -> Result<Value> {
    let Some(builtin) = lookup(name) else {
        debug!(name, "call to undefined builtin");
        return Err(Error::UnknownBuiltin(name.to_string()));
    };

    trace!(name, args = args.len(), "calling builtin");
    builtin(args).inspect_err(|error| debug!(name, %error, "builtin rejected its arguments"))
}

/// Runs `$body` with `$c` bound to the container at `$position` (one-based),
/// whichever kind it is.
macro_rules! with_container {
    ($function:expr, $args:expr, $position:expr, |$c:ident| $body:expr) => {
        match &$args[$position - 1] {
            Value::Array($c) => $body,
            Value::Dict($c) => $body,
            Value::Vec($c) => $body,
            other => return Err(invalid($function, $position, CONTAINER, other)),
        }
    };
}

fn check_arity(function: &'static str, args: &[Value], min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(Error::Arity {
            function,
            min,
            max,
            given: args.len(),
        })
    }
}

fn invalid(function: &'static str, position: usize, expected: &'static str, given: &Value) -> Error {
    Error::InvalidArgument {
        function,
        position,
        expected,
        given: given.type_name(),
    }
}

fn check_container(function: &'static str, args: &[Value], position: usize) -> Result<()> {
    let arg = &args[position - 1];
    if arg.container_kind().is_some() {
        Ok(())
    } else {
        Err(invalid(function, position, CONTAINER, arg))
    }
}

fn int_arg(function: &'static str, args: &[Value], position: usize) -> Result<i64> {
    match &args[position - 1] {
        Value::Int(i) => Ok(*i),
        other => Err(invalid(function, position, "int", other)),
    }
}

/// An optional trailing bool argument.
fn flag_arg(function: &'static str, args: &[Value], position: usize, default: bool) -> Result<bool> {
    match args.get(position - 1) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(invalid(function, position, "bool", other)),
    }
}

fn count_value(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Checks that `count` appends fit below the exhausted next integer key.
fn check_room(next_key: Option<i64>, count: usize) -> Result<()> {
    let Some(extra) = count.checked_sub(1) else {
        return Ok(());
    };
    let fits = next_key
        .zip(i64::try_from(extra).ok())
        .is_some_and(|(next, extra)| next.checked_add(extra).is_some());
    if fits { Ok(()) } else { Err(Error::NextKeyOccupied) }
}

fn count(args: &mut [Value]) -> Result<Value> {
    check_arity("count", args, 1, 1)?;
    Ok(with_container!("count", args, 1, |c| count_value(c.count())))
}

fn array_count_values(args: &mut [Value]) -> Result<Value> {
    check_arity("array_count_values", args, 1, 1)?;
    Ok(with_container!("array_count_values", args, 1, |c| Value::Dict(c.count_values())))
}

fn array_sum(args: &mut [Value]) -> Result<Value> {
    check_arity("array_sum", args, 1, 1)?;
    Ok(with_container!("array_sum", args, 1, |c| c.sum().into()))
}

fn array_product(args: &mut [Value]) -> Result<Value> {
    check_arity("array_product", args, 1, 1)?;
    Ok(with_container!("array_product", args, 1, |c| c.product().into()))
}

fn array_pad(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "array_pad";
    check_arity(NAME, args, 3, 3)?;
    check_container(NAME, args, 1)?;
    let size = int_arg(NAME, args, 2)?;
    let value = args[2].clone();

    match &args[0] {
        Value::Array(a) => a.pad(size, value).map(Value::Array),
        Value::Dict(d) => d.pad(size, value).map(Value::Dict),
        Value::Vec(v) => v.pad(size, value).map(Value::Vec),
        other => Err(invalid(NAME, 1, CONTAINER, other)),
    }
}

fn array_reverse(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "array_reverse";
    check_arity(NAME, args, 1, 2)?;
    check_container(NAME, args, 1)?;
    let preserve_keys = flag_arg(NAME, args, 2, true)?;

    let reversed = match &args[0] {
        Value::Array(a) => {
            let mut reversed = a.reverse();
            if !preserve_keys {
                reversed.renumber();
            }
            Value::Array(reversed)
        }
        Value::Dict(d) => {
            let mut reversed = d.reverse();
            if !preserve_keys {
                reversed.renumber();
            }
            Value::Dict(reversed)
        }
        Value::Vec(v) => Value::Vec(v.reverse()),
        other => return Err(invalid(NAME, 1, CONTAINER, other)),
    };
    Ok(reversed)
}

/// `array_search(needle, haystack, strict = false)`
fn array_search(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "array_search";
    check_arity(NAME, args, 2, 3)?;
    check_container(NAME, args, 2)?;
    let strict = flag_arg(NAME, args, 3, false)?;
    let needle = &args[0];

    let found = with_container!(NAME, args, 2, |c| if strict {
        c.search_strict(needle)
    } else {
        c.search(needle)
    });
    Ok(found.map_or(Value::Bool(false), Value::from))
}

/// `in_array(needle, haystack, strict = false)`
fn in_array(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "in_array";
    check_arity(NAME, args, 2, 3)?;
    check_container(NAME, args, 2)?;
    let strict = flag_arg(NAME, args, 3, false)?;
    let needle = &args[0];

    let found = with_container!(NAME, args, 2, |c| if strict {
        c.contains_strict(needle)
    } else {
        c.contains(needle)
    });
    Ok(Value::Bool(found))
}

fn array_pop(args: &mut [Value]) -> Result<Value> {
    check_arity("array_pop", args, 1, 1)?;
    let popped = match &mut args[0] {
        Value::Array(a) => a.pop(),
        Value::Dict(d) => d.pop(),
        Value::Vec(v) => v.pop(),
        other => return Err(invalid("array_pop", 1, CONTAINER, other)),
    };
    Ok(popped.into())
}

fn array_shift(args: &mut [Value]) -> Result<Value> {
    check_arity("array_shift", args, 1, 1)?;
    let shifted = match &mut args[0] {
        Value::Array(a) => a.shift(),
        Value::Dict(d) => d.shift(),
        Value::Vec(v) => v.shift(),
        other => return Err(invalid("array_shift", 1, CONTAINER, other)),
    };
    Ok(shifted.into())
}

/// `array_push(&container, values...)`
fn array_push(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "array_push";
    check_arity(NAME, args, 1, NO_LIMIT)?;
    let Some((target, values)) = args.split_first_mut() else {
        return Err(Error::Arity {
            function: NAME,
            min: 1,
            max: NO_LIMIT,
            given: 0,
        });
    };
    let values = values.iter().cloned();

    let len = match target {
        Value::Array(a) => {
            check_room(a.next_key(), values.len())?;
            a.push(values)?
        }
        Value::Dict(d) => {
            check_room(d.next_key(), values.len())?;
            d.push(values)?
        }
        Value::Vec(v) => v.push(values),
        other => return Err(invalid(NAME, 1, CONTAINER, other)),
    };
    Ok(count_value(len))
}

/// `array_unshift(&container, values...)`
fn array_unshift(args: &mut [Value]) -> Result<Value> {
    const NAME: &str = "array_unshift";
    check_arity(NAME, args, 1, NO_LIMIT)?;
    let Some((target, values)) = args.split_first_mut() else {
        return Err(Error::Arity {
            function: NAME,
            min: 1,
            max: NO_LIMIT,
            given: 0,
        });
    };
    let values = values.iter().cloned();

    let len = match target {
        Value::Array(a) => a.unshift(values),
        Value::Dict(d) => d.unshift(values),
        Value::Vec(v) => v.unshift(values),
        other => return Err(invalid(NAME, 1, CONTAINER, other)),
    };
    Ok(count_value(len))
}

fn sort_in_place(function: &'static str, args: &mut [Value], mode: SortMode) -> Result<Value> {
    check_arity(function, args, 1, 1)?;
    let target = &mut args[0];
    let sorted = match target {
        Value::Array(a) => a.sort(mode),
        Value::Dict(d) => d.sort(mode),
        Value::Vec(v) if !mode.preserves_keys() => v.sort(mode.order()),
        Value::Vec(v) => {
            debug!(function, len = v.len(), "promoting vec to dict for a key-preserving sort");
            let mut dict = mem::take(v).into_dict();
            let sorted = dict.sort(mode);
            *target = Value::Dict(dict);
            sorted
        }
        other => return Err(invalid(function, 1, CONTAINER, other)),
    };
    Ok(Value::Bool(sorted))
}

fn sort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("sort", args, SortMode::Values(SortOrder::Ascending))
}

fn rsort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("rsort", args, SortMode::Values(SortOrder::Descending))
}

fn asort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("asort", args, SortMode::Assoc(SortOrder::Ascending))
}

fn arsort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("arsort", args, SortMode::Assoc(SortOrder::Descending))
}

fn ksort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("ksort", args, SortMode::Keys(SortOrder::Ascending))
}

fn krsort(args: &mut [Value]) -> Result<Value> {
    sort_in_place("krsort", args, SortMode::Keys(SortOrder::Descending))
}

fn is_array(args: &mut [Value]) -> Result<Value> {
    check_arity("is_array", args, 1, 1)?;
    Ok(Value::Bool(args[0].is_array()))
}

fn is_dict(args: &mut [Value]) -> Result<Value> {
    check_arity("is_dict", args, 1, 1)?;
    Ok(Value::Bool(args[0].is_dict()))
}

fn is_vec(args: &mut [Value]) -> Result<Value> {
    check_arity("is_vec", args, 1, 1)?;
    Ok(Value::Bool(args[0].is_vec()))
}
