use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::slot::{SlotId, Slots};
use crate::{Error, Key};

/// One stored entry, doubly linked in insertion order.
#[derive(Clone)]
struct Entry<V> {
    key: Key,
    value: V,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// The linked, insertion-ordered map backing `Dict` and `Array`.
#[derive(Clone)]
pub(crate) struct RawDict<V> {
    /// Entry storage; ids stay stable while the entry lives.
    entries: Slots<Entry<V>>,
    /// Key to entry lookup.
    index: BTreeMap<Key, SlotId>,
    /// First entry in insertion order.
    head: Option<SlotId>,
    /// Last entry in insertion order.
    tail: Option<SlotId>,
    /// Key the next append receives; `None` once `i64::MAX` has been used.
    next_int: Option<i64>,
}

impl<V> RawDict<V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Slots::new(),
            index: BTreeMap::new(),
            head: None,
            tail: None,
            next_int: Some(0),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slots::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) const fn next_int(&self) -> Option<i64> {
        self.next_int
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.next_int = Some(0);
    }

    pub(crate) fn get(&self, key: &Key) -> Option<&V> {
        self.index.get(key).map(|&id| &self.entries.get(id).value)
    }

    pub(crate) fn get_mut(&mut self, key: &Key) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        Some(&mut self.entries.get_mut(id).value)
    }

    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts or overwrites. An overwritten entry keeps its position.
    pub(crate) fn insert(&mut self, key: Key, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            return Some(core::mem::replace(&mut self.entries.get_mut(id).value, value));
        }

        if let (Key::Int(i), Some(next)) = (&key, self.next_int) {
            if *i >= next {
                self.next_int = i.checked_add(1);
            }
        }

        let id = self.entries.insert(Entry {
            key: key.clone(),
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.entries.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.index.insert(key, id);
        None
    }

    /// Appends under the next free integer key and returns that key.
    pub(crate) fn append(&mut self, value: V) -> Result<i64, Error> {
        let key = self.next_int.ok_or(Error::NextKeyOccupied)?;
        self.insert(Key::Int(key), value);
        Ok(key)
    }

    pub(crate) fn remove(&mut self, key: &Key) -> Option<V> {
        let id = self.index.remove(key)?;
        Some(self.unlink(id).1)
    }

    fn unlink(&mut self, id: SlotId) -> (Key, V) {
        let entry = self.entries.remove(id);
        match entry.prev {
            Some(prev) => self.entries.get_mut(prev).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entries.get_mut(next).prev = entry.prev,
            None => self.tail = entry.prev,
        }
        (entry.key, entry.value)
    }

    pub(crate) fn first(&self) -> Option<(&Key, &V)> {
        let entry = self.entries.get(self.head?);
        Some((&entry.key, &entry.value))
    }

    pub(crate) fn last(&self) -> Option<(&Key, &V)> {
        let entry = self.entries.get(self.tail?);
        Some((&entry.key, &entry.value))
    }

    pub(crate) fn pop_front(&mut self) -> Option<(Key, V)> {
        let id = self.head?;
        let (key, value) = self.unlink(id);
        self.index.remove(&key);
        Some((key, value))
    }

    /// Removes the last entry. Popping the most recently issued integer key
    /// hands that key out again on the next append.
    pub(crate) fn pop_back(&mut self) -> Option<(Key, V)> {
        let id = self.tail?;
        let (key, value) = self.unlink(id);
        self.index.remove(&key);
        if let Key::Int(i) = key {
            if i >= 0 && i.checked_add(1) == self.next_int {
                self.next_int = Some(i);
            }
        }
        Some((key, value))
    }

    /// Gives every integer key its position among the integer keys, starting
    /// at 0, after the `leading` values which take the first integer keys.
    /// String keys are kept.
    pub(crate) fn renumber_with<I: IntoIterator<Item = V>>(&mut self, leading: I) {
        let fresh = Self::with_capacity(self.len());
        let old = core::mem::replace(self, fresh);
        let mut next = 0_i64;
        for value in leading {
            self.insert(Key::Int(next), value);
            next += 1;
        }
        for (key, value) in old {
            match key {
                Key::Int(_) => {
                    self.insert(Key::Int(next), value);
                    next += 1;
                }
                key @ Key::Str(_) => {
                    self.insert(key, value);
                }
            }
        }
    }

    /// Replaces the contents with `entries`, in that order, keeping the next
    /// free integer key.
    pub(crate) fn relink(&mut self, entries: Vec<(Key, V)>) {
        let next_int = self.next_int;
        self.clear();
        for (key, value) in entries {
            self.insert(key, value);
        }
        self.next_int = next_int;
    }

    /// Removes every entry, returning them in insertion order.
    pub(crate) fn take_entries(&mut self) -> Vec<(Key, V)> {
        let mut entries = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop_front() {
            entries.push(entry);
        }
        entries
    }

    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            raw: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<V> Default for RawDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator in insertion order.
pub(crate) struct Iter<'a, V> {
    raw: &'a RawDict<V>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.raw.entries.get(self.front?);
        self.front = entry.next;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.raw.entries.get(self.back?);
        self.back = entry.prev;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Owning iterator in insertion order.
pub(crate) struct IntoIter<V> {
    raw: RawDict<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.raw.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.raw.tail?;
        let (key, value) = self.raw.unlink(id);
        self.raw.index.remove(&key);
        Some((key, value))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> IntoIterator for RawDict<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter { raw: self }
    }
}

impl<V> FromIterator<(Key, V)> for RawDict<V> {
    fn from_iter<T: IntoIterator<Item = (Key, V)>>(iter: T) -> Self {
        let mut raw = Self::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        raw
    }
}
