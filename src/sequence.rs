use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::container::Container;
use crate::raw::PAD_LIMIT;
use crate::sort::{SortOrder, sort_values};
use crate::{ContainerKind, Dict, Error, Key, Value};

/// A dense, 0-indexed list of values.
///
/// Removing or inserting at the front shifts every index, so the keys of a
/// `Sequence` are always exactly `0..len`.
///
/// # Examples
///
/// ```
/// use wabi_dict::{Sequence, Value};
///
/// let mut vec = Sequence::from(["value1", "value2"]);
/// vec.unshift([0]);
/// assert_eq!(vec[0], Value::Int(0));
/// assert_eq!(vec.shift(), Some(Value::Int(0)));
/// assert_eq!(vec[0], Value::from("value1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    values: Vec<Value>,
}

impl Sequence {
    #[must_use]
    pub const fn new() -> Self {
        Sequence { values: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            values: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    /// Replaces the value at `index`, returning the old one, or `None` if
    /// `index` is out of bounds.
    pub fn set<V: Into<Value>>(&mut self, index: usize, value: V) -> Option<Value> {
        self.values.get_mut(index).map(|slot| core::mem::replace(slot, value.into()))
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.values.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Removes and returns the first value; every later index moves down by
    /// one.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn shift(&mut self) -> Option<Value> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.remove(0))
        }
    }

    /// Appends `values` and returns the new length.
    pub fn push<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self.len()
    }

    /// Prepends `values`, keeping their order, and returns the new length.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Sequence, Value};
    ///
    /// let mut vec = Sequence::from([3]);
    /// assert_eq!(vec.unshift([1, 2]), 3);
    /// assert_eq!(vec, Sequence::from([1, 2, 3]));
    /// ```
    pub fn unshift<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.splice(0..0, values.into_iter().map(Into::into));
        self.len()
    }

    /// Returns a copy padded to `|size|` values, appending for a positive
    /// `size` and prepending for a negative one.
    ///
    /// # Errors
    ///
    /// [`Error::PadTooLarge`] if more than 1 048 576 values would be added.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Sequence, Value};
    ///
    /// let vec = Sequence::from([1]);
    /// assert_eq!(vec.pad(-3, 0)?, Sequence::from([0, 0, 1]));
    /// assert_eq!(vec.pad(2, 0)?, Sequence::from([1, 0]));
    /// assert_eq!(vec.pad(-1, 0)?, vec);
    /// # Ok::<(), wabi_dict::Error>(())
    /// ```
    pub fn pad<V: Into<Value>>(&self, size: i64, value: V) -> Result<Sequence, Error> {
        let target = size.unsigned_abs();
        let len = self.len() as u64;
        if target <= len {
            return Ok(self.clone());
        }

        let missing = target - len;
        let count = usize::try_from(missing)
            .ok()
            .filter(|&count| count <= PAD_LIMIT)
            .ok_or(Error::PadTooLarge {
                requested: missing,
                limit: PAD_LIMIT,
            })?;

        let padding = iter::repeat_n(value.into(), count);
        let values = if size > 0 {
            self.values.iter().cloned().chain(padding).collect()
        } else {
            padding.chain(self.values.iter().cloned()).collect()
        };
        Ok(Sequence { values })
    }

    /// Returns a copy in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Sequence {
        self.values.iter().rev().cloned().collect()
    }

    /// Sorts the values in place, stably. Always returns `true`.
    pub fn sort(&mut self, order: SortOrder) -> bool {
        sort_values(&mut self.values, order);
        true
    }

    /// Sorts the values with a custom comparator, stably.
    pub fn sort_by<F>(&mut self, compare: F) -> bool
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.values.sort_by(compare);
        true
    }

    /// Converts into a [`Dict`] keyed by index.
    #[must_use]
    pub fn into_dict(self) -> Dict {
        Dict::from_values(self.values)
    }
}

impl Container for Sequence {
    type Values<'a> = slice::Iter<'a, Value>;

    fn kind(&self) -> ContainerKind {
        ContainerKind::Vec
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn container_values(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    fn key_at(&self, position: usize) -> Option<Key> {
        if position < self.len() {
            i64::try_from(position).ok().map(Key::Int)
        } else {
            None
        }
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl IndexMut<usize> for Sequence {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.values[index]
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Sequence {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Sequence {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for Sequence {
    fn from(arr: [V; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Sequence { values }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> slice::Iter<'a, Value> {
        self.values.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn shift_and_pop_on_empty() {
        let mut vec = Sequence::new();
        assert_eq!(vec.shift(), None);
        assert_eq!(vec.pop(), None);
    }

    #[test]
    fn key_at_is_the_index() {
        let vec = Sequence::from(["a", "b"]);
        assert_eq!(vec.key_at(1), Some(Key::Int(1)));
        assert_eq!(vec.key_at(2), None);
        assert_eq!(vec.kind(), ContainerKind::Vec);
    }

    #[test]
    fn set_replaces_in_bounds_only() {
        let mut vec = Sequence::from([1]);
        assert_eq!(vec.set(0, "x"), Some(Value::Int(1)));
        assert_eq!(vec.set(1, "y"), None);
        assert_eq!(vec.len(), 1);
    }

    #[test]
    fn into_dict_uses_indices() {
        let dict = Sequence::from(["a", "b"]).into_dict();
        assert_eq!(dict.get(&Key::Int(1)), Some(&Value::from("b")));
        assert_eq!(dict.next_key(), Some(2));
    }
}
