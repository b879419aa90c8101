use core::cmp::Ordering;

use crate::compare::{Rank, key_cmp};
use crate::{Key, Value};

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// What a sort orders by, and what happens to the keys.
///
/// | mode | builtin | keys afterwards |
/// |---|---|---|
/// | `Values(Ascending)` | `sort` | renumbered `0..n` |
/// | `Values(Descending)` | `rsort` | renumbered `0..n` |
/// | `Assoc(Ascending)` | `asort` | kept with their values |
/// | `Assoc(Descending)` | `arsort` | kept with their values |
/// | `Keys(Ascending)` | `ksort` | kept |
/// | `Keys(Descending)` | `krsort` | kept |
///
/// All modes are stable: entries that compare equal keep their relative
/// order, in both directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortMode {
    Values(SortOrder),
    Assoc(SortOrder),
    Keys(SortOrder),
}

impl SortMode {
    /// Whether the mode keeps each value paired with its key.
    #[must_use]
    pub const fn preserves_keys(self) -> bool {
        !matches!(self, SortMode::Values(_))
    }

    pub(crate) const fn order(self) -> SortOrder {
        match self {
            SortMode::Values(order) | SortMode::Assoc(order) | SortMode::Keys(order) => order,
        }
    }
}

/// Stable sort of keyed entries by value rank or key rank.
pub(crate) fn sort_entries(entries: &mut [(Key, Value)], mode: SortMode) {
    let order = mode.order();
    match mode {
        SortMode::Values(_) | SortMode::Assoc(_) => {
            entries.sort_by(|(_, a), (_, b)| order.apply(Rank::of_value(a).total_cmp(Rank::of_value(b))));
        }
        SortMode::Keys(_) => {
            entries.sort_by(|(a, _), (b, _)| order.apply(key_cmp(a, b)));
        }
    }
}

/// Stable sort of bare values.
pub(crate) fn sort_values(values: &mut [Value], order: SortOrder) {
    values.sort_by(|a, b| order.apply(Rank::of_value(a).total_cmp(Rank::of_value(b))));
}
