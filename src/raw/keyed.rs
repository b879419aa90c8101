use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter;

use super::RawDict;
use crate::sort::{SortMode, sort_entries};
use crate::{Error, Key, Value};

/// Most elements a single pad may add.
pub(crate) const PAD_LIMIT: usize = 1 << 20;

impl<V: Clone> RawDict<V> {
    pub(crate) fn padded(&self, size: i64, value: V) -> Result<Self, Error> {
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

        let mut padded = self.clone();
        if size > 0 {
            for _ in 0..count {
                padded.append(value.clone())?;
            }
        } else {
            padded.renumber_with(iter::repeat_n(value, count));
        }
        Ok(padded)
    }

    pub(crate) fn reversed(&self) -> Self {
        let mut entries: Vec<(Key, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.reverse();
        let mut reversed = self.clone();
        reversed.relink(entries);
        reversed
    }
}

impl<V> RawDict<V> {
    /// Stable sort of whole entries; `renumber` replaces the keys with `0..n`.
    pub(crate) fn sort_entries_by<F>(&mut self, renumber: bool, compare: F)
    where
        F: FnMut(&(Key, V), &(Key, V)) -> Ordering,
    {
        let mut entries = self.take_entries();
        entries.sort_by(compare);
        if renumber {
            self.renumber_with(entries.into_iter().map(|(_, v)| v));
        } else {
            self.relink(entries);
        }
    }
}

impl RawDict<Value> {
    pub(crate) fn sort(&mut self, mode: SortMode) {
        let mut entries = self.take_entries();
        sort_entries(&mut entries, mode);
        if mode.preserves_keys() {
            self.relink(entries);
        } else {
            self.renumber_with(entries.into_iter().map(|(_, v)| v));
        }
    }
}
