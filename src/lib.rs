//! Insertion-ordered dynamic containers for a scripting-language runtime.
//!
//! This crate provides the three container flavors of a PHP-style value
//! model, each carried by the [`Value`] variant of the same name:
//!
//! - [`Dict`] - an insertion-ordered map from [`Key`]s to values, keys taken
//!   exactly as given
//! - [`Array`] - the legacy flavor, which coerces canonical integer strings
//!   such as `"12"` to integer keys
//! - [`Sequence`] - a dense list indexed `0..len`
//!
//! On top of them sit the classic array builtins: counting, padding,
//! pushing, popping, searching, reducing and sorting. They are available as
//! typed methods (the read-only ones through the [`Container`] trait) and as
//! name-dispatched functions over [`Value`] arguments in [`builtins`].
//! [`var_dump`] renders any value in the familiar debug dump format.
//!
//! # Example
//!
//! ```
//! use wabi_dict::numeric::Number;
//! use wabi_dict::{Container, Dict, Key, SortMode, SortOrder, Value, var_dump};
//!
//! let mut dict = Dict::from_values([3, 1, 2]);
//! dict.insert("name", "wabi");
//!
//! // Searches use loose equality, so the string "2" finds the integer 2.
//! assert_eq!(dict.search(&Value::from("2")), Some(Key::Int(2)));
//! assert_eq!(dict.sum(), Number::Int(6));
//!
//! // Sorting by key keeps every value with its key.
//! dict.sort(SortMode::Keys(SortOrder::Descending));
//! assert_eq!(dict.first_key_value(), Some((&Key::from("name"), &Value::from("wabi"))));
//!
//! dict.remove(&Key::from("name"));
//! assert_eq!(
//!     var_dump(&dict.into()),
//!     "dict(3) {\n  [2]=>\n  int(2)\n  [1]=>\n  int(1)\n  [0]=>\n  int(3)\n}\n"
//! );
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Stable sorts** - Equal elements keep their insertion order in every mode
//! - **Total ordering** - Mixed-type values sort under one total order, so sorting never panics
//!
//! # Implementation
//!
//! `Dict` and `Array` store their entries in a slot arena threaded into a
//! doubly linked list that records insertion order, with a `BTreeMap` index
//! from key to slot. Removing an entry unlinks its slot and puts it on the
//! arena's free list for reuse.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod array;
mod container;
mod dump;
mod error;
mod key;
mod raw;
mod sequence;
mod sort;
mod value;

pub mod builtins;
pub mod compare;
pub mod dict;
pub mod numeric;

pub use array::Array;
pub use container::Container;
pub use dict::Dict;
pub use dump::{Dump, var_dump};
pub use error::{Error, Result};
pub use key::Key;
pub use sequence::Sequence;
pub use sort::{SortMode, SortOrder};
pub use value::{ContainerKind, Value};
