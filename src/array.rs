use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

use crate::container::Container;
use crate::dict::{IntoIter, Iter, Keys, Values};
use crate::sort::SortMode;
use crate::{ContainerKind, Dict, Error, Key, Value};

/// A legacy array: an insertion-ordered map whose canonical integer string
/// keys are stored as integers.
///
/// `Array` wraps a [`Dict`] and differs from it in two places:
///
/// - every key passes through [`Key::coerce_legacy`], so `"1"` and `1` name
///   the same entry;
/// - [`shift`](Array::shift) has list semantics and renumbers the remaining
///   integer keys from 0.
///
/// # Examples
///
/// ```
/// use wabi_dict::{Array, Key, Value};
///
/// let mut array = Array::new();
/// array.insert("1", "one");
/// array.insert(1, "uno");
/// assert_eq!(array.len(), 1);
/// assert_eq!(array.get(&Key::Int(1)), Some(&Value::from("uno")));
///
/// let mut list = Array::from_values(["a", "b", "c"]);
/// assert_eq!(list.shift(), Some(Value::from("a")));
/// assert_eq!(list.get(&Key::Int(0)), Some(&Value::from("b")));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Array {
    dict: Dict,
}

impl Array {
    #[must_use]
    pub const fn new() -> Self {
        Array { dict: Dict::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            dict: Dict::with_capacity(capacity),
        }
    }

    /// Makes a list-shaped array holding `values` under the keys `0..n`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Array {
            dict: Dict::from_values(values),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.dict.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.dict.capacity()
    }

    /// The key the next [`push`](Array::push) will use.
    #[must_use]
    pub const fn next_key(&self) -> Option<i64> {
        self.dict.next_key()
    }

    pub fn clear(&mut self) {
        self.dict.clear();
    }

    /// Looks up `key` after legacy coercion.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match key {
            Key::Str(_) => self.dict.get(&key.clone().coerce_legacy()),
            Key::Int(_) => self.dict.get(key),
        }
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match key {
            Key::Str(_) => self.dict.get_mut(&key.clone().coerce_legacy()),
            Key::Int(_) => self.dict.get_mut(key),
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a value under the coerced key, returning the previous value.
    pub fn insert<K: Into<Key>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.dict.insert(key.into().coerce_legacy(), value)
    }

    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.dict.remove(&key.clone().coerce_legacy())
    }

    #[must_use]
    pub fn first_key_value(&self) -> Option<(&Key, &Value)> {
        self.dict.first_key_value()
    }

    #[must_use]
    pub fn last_key_value(&self) -> Option<(&Key, &Value)> {
        self.dict.last_key_value()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.dict.iter()
    }

    pub fn keys(&self) -> Keys<'_> {
        self.dict.keys()
    }

    pub fn values(&self) -> Values<'_> {
        self.dict.values()
    }

    /// Removes and returns the last value. Remaining keys are untouched.
    pub fn pop(&mut self) -> Option<Value> {
        self.dict.pop()
    }

    /// Removes and returns the first value, then renumbers the remaining
    /// integer keys from 0 and resets the next free integer key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Array, Key};
    ///
    /// let mut array = Array::from([(Key::Int(4), 1), (Key::from("s"), 2), (Key::Int(9), 3)]);
    /// array.shift();
    /// let keys: Vec<_> = array.keys().cloned().collect();
    /// assert_eq!(keys, [Key::from("s"), Key::Int(0)]);
    /// assert_eq!(array.next_key(), Some(1));
    /// ```
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.dict.pop_first()?;
        self.dict.renumber();
        Some(value)
    }

    /// Appends like [`Dict::push`].
    ///
    /// # Errors
    ///
    /// [`Error::NextKeyOccupied`] once the next integer key is exhausted.
    pub fn push<I>(&mut self, values: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.dict.push(values)
    }

    /// Prepends like [`Dict::unshift`].
    pub fn unshift<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.dict.unshift(values)
    }

    /// Pads like [`Dict::pad`].
    ///
    /// # Errors
    ///
    /// [`Error::PadTooLarge`] or [`Error::NextKeyOccupied`], as for
    /// [`Dict::pad`].
    pub fn pad<V: Into<Value>>(&self, size: i64, value: V) -> Result<Array, Error> {
        self.dict.pad(size, value).map(|dict| Array { dict })
    }

    /// Returns a copy in reverse order, every key staying with its value.
    #[must_use]
    pub fn reverse(&self) -> Array {
        Array {
            dict: self.dict.reverse(),
        }
    }

    /// Gives the integer keys their positions `0..` in iteration order.
    pub fn renumber(&mut self) {
        self.dict.renumber();
    }

    /// Sorts in place, stably. Always returns `true`.
    pub fn sort(&mut self, mode: SortMode) -> bool {
        self.dict.sort(mode)
    }

    /// Sorts the values with a custom comparator; see [`Dict::sort_by`].
    pub fn sort_by<F>(&mut self, keep_keys: bool, compare: F) -> bool
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.dict.sort_by(keep_keys, compare)
    }

    /// Sorts the entries by key with a custom comparator.
    pub fn sort_keys_by<F>(&mut self, compare: F) -> bool
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.dict.sort_keys_by(compare)
    }
}

impl Container for Array {
    type Values<'a> = Values<'a>;

    fn kind(&self) -> ContainerKind {
        ContainerKind::Array
    }

    fn count(&self) -> usize {
        self.dict.count()
    }

    fn container_values(&self) -> Values<'_> {
        self.dict.container_values()
    }

    fn key_at(&self, position: usize) -> Option<Key> {
        self.dict.key_at(position)
    }
}

impl From<Dict> for Array {
    /// Converts a dict, coercing its keys. Colliding keys keep the first
    /// position and the last value.
    fn from(dict: Dict) -> Self {
        dict.into_iter().collect()
    }
}

impl From<Array> for Dict {
    fn from(array: Array) -> Self {
        array.dict
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.dict, f)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Array {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut array = Array::new();
        array.extend(iter);
        array
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Array {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Array {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl Index<&Key> for Array {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        self.dict.into_iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_keys_reach_coerced_entries() {
        let mut array = Array::from([(Key::from("7"), "seven"), (Key::from("07"), "zero-seven")]);
        assert_eq!(array.len(), 2);
        assert!(array.contains_key(&Key::Int(7)));
        if let Some(value) = array.get_mut(&Key::from("7")) {
            *value = Value::from("SEVEN");
        }
        assert_eq!(array.remove(&Key::from("7")), Some(Value::from("SEVEN")));
        let keys: Vec<_> = array.keys().cloned().collect();
        assert_eq!(keys, [Key::from("07")]);
    }

    #[test]
    fn keeps_array_kind_through_wrapped_ops() {
        let mut array = Array::from_values([3, 1, 2]);
        assert_eq!(array.push([0]), Ok(4));
        array.sort(SortMode::Values(crate::SortOrder::Ascending));
        let padded = array.pad(-5, "pad").map(|a| a.reverse());
        assert_eq!(padded.as_ref().map(Container::kind), Ok(ContainerKind::Array));
        assert_eq!(padded.map(|a| a.len()), Ok(5));
        assert_eq!(Dict::from(array.clone()).kind(), ContainerKind::Dict);
        assert_eq!(array.values().cloned().collect::<Vec<_>>(), [0, 1, 2, 3].map(Value::Int));
    }
}
