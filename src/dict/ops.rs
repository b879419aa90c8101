use core::cmp::Ordering;

use super::Dict;
use crate::sort::SortMode;
use crate::{Error, Key, Value};

impl Dict {
    /// Removes and returns the last value in insertion order.
    ///
    /// The remaining keys are untouched. If the popped key was the most
    /// recently issued integer key, the next push reuses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let mut dict = Dict::from_values([1, 2, 3]);
    /// assert_eq!(dict.pop(), Some(Value::Int(3)));
    /// assert_eq!(dict.next_key(), Some(2));
    /// assert_eq!(Dict::new().pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<Value> {
        self.pop_last().map(|(_, v)| v)
    }

    /// Removes and returns the first value in insertion order.
    ///
    /// A dict has map semantics: the remaining keys are not renumbered.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let mut dict = Dict::from_values([1, 2, 3]);
    /// assert_eq!(dict.shift(), Some(Value::Int(1)));
    /// assert_eq!(dict.first_key_value(), Some((&Key::Int(1), &Value::Int(2))));
    /// ```
    pub fn shift(&mut self) -> Option<Value> {
        self.pop_first().map(|(_, v)| v)
    }

    /// Removes and returns the first entry in insertion order.
    pub fn pop_first(&mut self) -> Option<(Key, Value)> {
        self.raw.pop_front()
    }

    /// Removes and returns the last entry in insertion order.
    pub fn pop_last(&mut self) -> Option<(Key, Value)> {
        self.raw.pop_back()
    }

    /// Appends `values` under fresh integer keys and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NextKeyOccupied`] once the next integer key is
    /// exhausted. Values before the failing one stay appended.
    pub fn push<I>(&mut self, values: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for value in values {
            self.raw.append(value.into())?;
        }
        Ok(self.len())
    }

    /// Prepends `values` under the keys `0..k`, renumbers the existing
    /// integer keys after them, and returns the new count. String keys keep
    /// their identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key};
    ///
    /// let mut dict = Dict::from([(Key::Int(5), 1), (Key::from("s"), 2)]);
    /// assert_eq!(dict.unshift(["first"]), 3);
    /// let keys: Vec<_> = dict.keys().cloned().collect();
    /// assert_eq!(keys, [Key::Int(0), Key::Int(1), Key::from("s")]);
    /// ```
    pub fn unshift<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.raw.renumber_with(values.into_iter().map(Into::into));
        self.len()
    }

    /// Returns a copy padded to `|size|` entries with copies of `value`.
    ///
    /// A positive `size` appends under fresh integer keys. A negative `size`
    /// prepends and renumbers every integer key from 0. If the dict already has
    /// at least `|size|` entries the copy is unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::PadTooLarge`] if more than 1 048 576 entries would be added,
    /// [`Error::NextKeyOccupied`] if appending runs out of integer keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, Value};
    ///
    /// let dict = Dict::from_values([1, 2]);
    /// let after = dict.pad(4, "pad")?;
    /// assert_eq!(after[&Key::Int(3)], Value::from("pad"));
    ///
    /// let before = dict.pad(-3, "pad")?;
    /// let values: Vec<_> = before.values().cloned().collect();
    /// assert_eq!(values, [Value::from("pad"), Value::Int(1), Value::Int(2)]);
    ///
    /// assert_eq!(dict.pad(1, "pad")?, dict);
    /// # Ok::<(), wabi_dict::Error>(())
    /// ```
    pub fn pad<V: Into<Value>>(&self, size: i64, value: V) -> Result<Dict, Error> {
        self.raw.padded(size, value.into()).map(Dict::from_raw)
    }

    /// Returns a copy with the iteration order reversed. Every key stays with
    /// its value.
    #[must_use]
    pub fn reverse(&self) -> Dict {
        Dict::from_raw(self.raw.reversed())
    }

    /// Gives the integer keys their positions `0..` in iteration order,
    /// leaving string keys alone.
    pub fn renumber(&mut self) {
        self.raw.renumber_with(core::iter::empty());
    }

    /// Sorts in place, stably. Always returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::{Dict, Key, SortMode, SortOrder, Value};
    ///
    /// let mut dict = Dict::from([("b", 1), ("a", 2)]);
    /// assert!(dict.sort(SortMode::Keys(SortOrder::Ascending)));
    /// assert_eq!(dict.first_key_value(), Some((&Key::from("a"), &Value::Int(2))));
    ///
    /// dict.sort(SortMode::Values(SortOrder::Descending));
    /// let keys: Vec<_> = dict.keys().cloned().collect();
    /// assert_eq!(keys, [Key::Int(0), Key::Int(1)]);
    /// ```
    pub fn sort(&mut self, mode: SortMode) -> bool {
        self.raw.sort(mode);
        true
    }

    /// Sorts the values with a custom comparator, stably. With `keep_keys`
    /// each value keeps its key, otherwise the keys become `0..n`.
    pub fn sort_by<F>(&mut self, keep_keys: bool, mut compare: F) -> bool
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.raw.sort_entries_by(!keep_keys, |(_, a), (_, b)| compare(a, b));
        true
    }

    /// Sorts the entries by key with a custom comparator, stably.
    pub fn sort_keys_by<F>(&mut self, mut compare: F) -> bool
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.raw.sort_entries_by(false, |(a, _), (b, _)| compare(a, b));
        true
    }
}
