use alloc::vec::Vec;
use core::mem;
use core::num::NonZero;

#[cfg(test)]
type RawSlotId = u16;
#[cfg(not(test))]
type RawSlotId = u32;

/// Stable identifier of an occupied slot. Offset by one so `Option<SlotId>` is free.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct SlotId(NonZero<RawSlotId>);

impl SlotId {
    pub(crate) const MAX: usize = (RawSlotId::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`SlotId::from_index()` - `index` > `SlotId::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as RawSlotId) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    // Vacant slots form an intrusive free list.
    Vacant(Option<SlotId>),
}

/// Slot storage with an intrusive free list; ids stay valid until released.
#[derive(Clone)]
pub(crate) struct Slots<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<SlotId>,
    occupied: usize,
}

impl<T> Slots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn insert(&mut self, element: T) -> SlotId {
        self.occupied += 1;
        if let Some(id) = self.free_head {
            let slot = &mut self.slots[id.index()];
            let Slot::Vacant(next_free) = *slot else {
                panic!("`Slots::insert()` - free list points at an occupied slot!");
            };
            self.free_head = next_free;
            *slot = Slot::Occupied(element);
            id
        } else {
            assert!(
                self.slots.len() <= SlotId::MAX,
                "`Slots::insert()` - storage is at maximum capacity ({})",
                SlotId::MAX + 1
            );
            self.slots.push(Slot::Occupied(element));
            SlotId::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> &T {
        match &self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Slots::get()` - `id` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> &mut T {
        match &mut self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Slots::get_mut()` - `id` is vacant!"),
        }
    }

    pub(crate) fn remove(&mut self, id: SlotId) -> T {
        let slot = mem::replace(&mut self.slots[id.index()], Slot::Vacant(self.free_head));
        match slot {
            Slot::Occupied(element) => {
                self.free_head = Some(id);
                self.occupied -= 1;
                element
            }
            Slot::Vacant(next_free) => {
                self.slots[id.index()] = Slot::Vacant(next_free);
                panic!("`Slots::remove()` - `id` is vacant!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // `SlotId` must keep the niche so links cost no extra space.
    assert_eq_size!(SlotId, Option<SlotId>);
    assert_eq_size!(SlotId, RawSlotId);

    #[test]
    #[should_panic(expected = "`SlotId::from_index()` - `index` > `SlotId::MAX`!")]
    fn invalid_slot_id() {
        let _ = SlotId::from_index(SlotId::MAX + 1);
    }

    #[test]
    #[should_panic(expected = "`Slots::get()` - `id` is vacant!")]
    fn get_after_remove_panics() {
        let mut slots = Slots::new();
        let id = slots.insert(1_u32);
        slots.remove(id);
        let _ = slots.get(id);
    }

    #[test]
    fn vacated_slots_are_reused_last_in_first_out() {
        let mut slots = Slots::with_capacity(4);
        assert_eq!(slots.capacity(), 4);
        let a = slots.insert('a');
        let b = slots.insert('b');
        slots.remove(a);
        slots.remove(b);
        assert_eq!(slots.insert('c'), b);
        assert_eq!(slots.insert('d'), a);
        assert_eq!(slots.len(), 2);
    }

    proptest! {
        #[test]
        fn slot_id_round_trip(index in 0..=SlotId::MAX) {
            prop_assert_eq!(SlotId::from_index(index).index(), index);
        }

        #[test]
        fn slots_behave_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(SlotId, u32)> = Vec::new();
            let mut slots: Slots<u32> = Slots::new();

            for operation in operations {
                match operation {
                    Operation::Insert(value) => {
                        let id = slots.insert(value);
                        model.push((id, value));
                    }
                    Operation::Overwrite(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *slots.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Remove(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (id, expected) = model.swap_remove(index);
                        prop_assert_eq!(slots.remove(id), expected);
                    }
                    Operation::Clear => {
                        slots.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(slots.len(), model.len());
                for &(id, value) in &model {
                    prop_assert_eq!(*slots.get(id), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(u32),
        Overwrite(usize, u32),
        Remove(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Insert),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Overwrite(which, value)),
            8 => any::<usize>().prop_map(Operation::Remove),
            1 => Just(Operation::Clear),
        ]
    }
}
