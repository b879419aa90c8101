use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::container::Container;
use crate::raw::{self, RawDict};
use crate::{ContainerKind, Key, Value};

mod capacity;
mod ops;

/// An insertion-ordered map from [`Key`]s to [`Value`]s.
///
/// Iteration, [`pop`](Dict::pop), [`shift`](Dict::shift) and the stable sorts
/// all follow insertion order. Re-inserting an existing key replaces its value
/// in place without moving it.
///
/// Keys are taken exactly as given: the string `"1"` and the integer `1` are
/// different keys. Use [`Array`](crate::Array) for legacy numeric-string key
/// coercion.
///
/// Integer keys for appended values come from the *next free integer key*,
/// one past the largest integer key inserted so far (and never below 0).
///
/// # Examples
///
/// ```
/// use wabi_dict::{Container, Dict, Key, Value};
///
/// let mut dict = Dict::new();
/// dict.insert("name", "wabi");
/// dict.insert(7, 1.5);
/// dict.push([Value::from("pushed")])?;
///
/// // `7` was the largest integer key, so the push landed on `8`.
/// assert_eq!(dict.get(&Key::Int(8)), Some(&Value::from("pushed")));
///
/// // Insertion order is kept.
/// let keys: Vec<_> = dict.keys().cloned().collect();
/// assert_eq!(keys, [Key::from("name"), Key::Int(7), Key::Int(8)]);
///
/// // The shared array operations come from `Container`.
/// assert_eq!(dict.search(&Value::Float(1.5)), Some(Key::Int(7)));
/// # Ok::<(), wabi_dict::Error>(())
/// ```
///
/// A `Dict` can be built from an array of pairs:
///
/// ```
/// use wabi_dict::Dict;
///
/// let sizes = Dict::from([("small", 1), ("medium", 2), ("large", 3)]);
/// assert_eq!(sizes.len(), 3);
/// ```
#[derive(Clone)]
pub struct Dict {
    raw: RawDict<Value>,
}

/// An iterator over the entries of a `Dict`, in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`Dict`].
///
/// [`iter`]: Dict::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    inner: raw::Iter<'a, Value>,
}

/// An iterator over the keys of a `Dict`.
///
/// This `struct` is created by the [`keys`] method on [`Dict`].
///
/// [`keys`]: Dict::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

/// An iterator over the values of a `Dict`.
///
/// This `struct` is created by the [`values`] method on [`Dict`].
///
/// [`values`]: Dict::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

/// An owning iterator over the entries of a `Dict`.
///
/// This `struct` is created by the [`into_iter`] method on [`Dict`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter {
    inner: raw::IntoIter<Value>,
}

impl Dict {
    /// Makes a new, empty `Dict`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::Dict;
    ///
    /// let dict = Dict::new();
    /// assert!(dict.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Dict { raw: RawDict::new() }
    }

    /// Makes a `Dict` holding `values` under the keys `0..n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let dict = Dict::from_values(["value1", "value2"]);
    /// assert_eq!(dict[&Key::Int(1)], Value::from("value2"));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut dict = Dict::new();
        // A fresh dict cannot exhaust its integer keys.
        for (i, value) in (0_i64..).zip(values) {
            dict.raw.insert(Key::Int(i), value.into());
        }
        dict
    }

    pub(crate) const fn from_raw(raw: RawDict<Value>) -> Self {
        Dict { raw }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The key the next [`push`](Dict::push) will use, or `None` once
    /// `i64::MAX` has been handed out.
    #[must_use]
    pub const fn next_key(&self) -> Option<i64> {
        self.raw.next_int()
    }

    /// Removes every entry and resets the next free integer key to 0.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value under `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let dict = Dict::from([(1, "a")]);
    /// assert_eq!(dict.get(&Key::Int(1)), Some(&Value::from("a")));
    /// assert_eq!(dict.get(&Key::from("1")), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.raw.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.raw.contains_key(key)
    }

    /// Inserts a value, returning the previous value under the same key.
    ///
    /// A new key goes to the end of the iteration order; an existing key keeps
    /// its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Value};
    ///
    /// let mut dict = Dict::new();
    /// assert_eq!(dict.insert("a", 1), None);
    /// dict.insert("b", 2);
    /// assert_eq!(dict.insert("a", 3), Some(Value::Int(1)));
    ///
    /// let values: Vec<_> = dict.values().cloned().collect();
    /// assert_eq!(values, [Value::Int(3), Value::Int(2)]);
    /// ```
    pub fn insert<K: Into<Key>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.raw.insert(key.into(), value.into())
    }

    /// Removes the entry under `key`, returning its value.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.raw.remove(key)
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&Key, &Value)> {
        self.raw.first()
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&Key, &Value)> {
        self.raw.last()
    }

    /// Gets an iterator over the entries, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let dict = Dict::from([(3, "c"), (1, "a")]);
    /// let mut iter = dict.iter();
    /// assert_eq!(iter.next(), Some((&Key::Int(3), &Value::from("c"))));
    /// assert_eq!(iter.next_back(), Some((&Key::Int(1), &Value::from("a"))));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.raw.iter())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_> {
        Values::new(self.iter())
    }
}

impl Container for Dict {
    type Values<'a> = Values<'a>;

    fn kind(&self) -> ContainerKind {
        ContainerKind::Dict
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn container_values(&self) -> Values<'_> {
        self.values()
    }

    fn key_at(&self, position: usize) -> Option<Key> {
        self.keys().nth(position).cloned()
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Default for Dict {
    fn default() -> Self {
        Dict::new()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Dict::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Dict {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl Index<&Key> for Dict {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Dict {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.raw.into_iter(),
        }
    }
}

impl<'a> Iter<'a> {
    pub(crate) const fn new(inner: raw::Iter<'a, Value>) -> Self {
        Iter { inner }
    }
}

impl<'a> Keys<'a> {
    pub(crate) const fn new(inner: Iter<'a>) -> Self {
        Keys { inner }
    }
}

impl<'a> Values<'a> {
    pub(crate) const fn new(inner: Iter<'a>) -> Self {
        Values { inner }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<&'a Key> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

impl Iterator for IntoIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
