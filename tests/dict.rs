use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wabi_dict::compare::loose_eq;
use wabi_dict::{Array, Container, Dict, Key, SortMode, SortOrder, Value};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Keys drawn from a small range so that collisions are common. Numeric
/// strings share a rank with the integer keys they spell.
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => (-20i64..40).prop_map(Key::Int),
        2 => "[a-c]{1,2}".prop_map(Key::Str),
        1 => "[0-9]{1,2}".prop_map(Key::Str),
        1 => "[0-9]\\.0".prop_map(Key::Str),
    ]
}

/// Scalars without NaN, so that `==` is reflexive.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..5).prop_map(Value::Int),
        (-6i32..6).prop_map(|i| Value::Float(f64::from(i) / 2.0)),
        "[0-3a ]{0,3}".prop_map(Value::Str),
    ]
}

/// Keys that include numeric strings, canonical or not.
fn legacy_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-20i64..40).prop_map(Key::Int),
        "-?0?[0-9]{1,2}".prop_map(Key::Str),
        "[a-c]{1,2}".prop_map(Key::Str),
    ]
}

fn dict_strategy() -> impl Strategy<Value = Dict> {
    proptest::collection::vec((key_strategy(), value_strategy()), 0..64).prop_map(|entries| entries.into_iter().collect())
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum DictOp {
    Insert(Key, Value),
    Remove(Key),
    Get(Key),
    Push(Value),
    Pop,
    Shift,
}

fn dict_op_strategy() -> impl Strategy<Value = DictOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| DictOp::Insert(k, v)),
        2 => key_strategy().prop_map(DictOp::Remove),
        2 => key_strategy().prop_map(DictOp::Get),
        2 => value_strategy().prop_map(DictOp::Push),
        1 => Just(DictOp::Pop),
        1 => Just(DictOp::Shift),
    ]
}

/// Insertion-ordered reference model with the same next-key rules.
#[derive(Default)]
struct Model {
    entries: Vec<(Key, Value)>,
    next: i64,
}

impl Model {
    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(i) = self.position(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        if let Key::Int(i) = key {
            self.next = self.next.max(i + 1);
        }
        self.entries.push((key, value));
        None
    }

    fn pop(&mut self) -> Option<Value> {
        let (key, value) = self.entries.pop()?;
        if matches!(key, Key::Int(i) if i >= 0 && i + 1 == self.next) {
            self.next -= 1;
        }
        Some(value)
    }
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both a `Dict` and the model
    /// and asserts identical results at every step.
    #[test]
    fn dict_ops_match_model(ops in proptest::collection::vec(dict_op_strategy(), TEST_SIZE)) {
        let mut dict = Dict::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                DictOp::Insert(k, v) => {
                    prop_assert_eq!(dict.insert(k.clone(), v.clone()), model.insert(k, v));
                }
                DictOp::Remove(k) => {
                    let expected = model.position(&k).map(|i| model.entries.remove(i).1);
                    prop_assert_eq!(dict.remove(&k), expected);
                }
                DictOp::Get(k) => {
                    let expected = model.position(&k).map(|i| &model.entries[i].1);
                    prop_assert_eq!(dict.get(&k), expected);
                }
                DictOp::Push(v) => {
                    prop_assert_eq!(dict.push([v.clone()]), Ok(model.entries.len() + 1));
                    model.insert(Key::Int(model.next), v);
                }
                DictOp::Pop => {
                    prop_assert_eq!(dict.pop(), model.pop());
                }
                DictOp::Shift => {
                    let expected = (!model.entries.is_empty()).then(|| model.entries.remove(0).1);
                    prop_assert_eq!(dict.shift(), expected);
                }
            }
            prop_assert_eq!(dict.len(), model.entries.len());
            prop_assert_eq!(dict.next_key(), Some(model.next));
        }

        let entries: Vec<_> = dict.into_iter().collect();
        prop_assert_eq!(entries, model.entries);
    }

    #[test]
    fn count_values_adds_up_to_count(dict in dict_strategy()) {
        let total: i64 = dict
            .count_values()
            .values()
            .map(|count| match count {
                Value::Int(n) => *n,
                other => panic!("count must be an int, got {other:?}"),
            })
            .sum();
        prop_assert_eq!(total, dict.count() as i64);
    }

    #[test]
    fn pad_reaches_the_requested_size(dict in dict_strategy(), size in -100i64..100) {
        let padded = dict.pad(size, "pad").unwrap();
        prop_assert_eq!(padded.len(), dict.len().max(size.unsigned_abs() as usize));
    }

    #[test]
    fn reverse_twice_is_identity(dict in dict_strategy()) {
        prop_assert_eq!(dict.reverse().reverse(), dict);
    }

    #[test]
    fn search_finds_a_loosely_equal_value(dict in dict_strategy(), needle in value_strategy()) {
        match dict.search(&needle) {
            Some(key) => prop_assert!(loose_eq(&dict[&key], &needle)),
            None => prop_assert!(dict.values().all(|v| !loose_eq(v, &needle))),
        }
        prop_assert_eq!(dict.contains(&needle), dict.search(&needle).is_some());
    }

    #[test]
    fn key_sorts_are_exact_reverses(dict in dict_strategy()) {
        let mut ascending = dict.clone();
        let mut descending = dict.clone();
        prop_assert!(ascending.sort(SortMode::Keys(SortOrder::Ascending)));
        prop_assert!(descending.sort(SortMode::Keys(SortOrder::Descending)));

        let up: Vec<_> = ascending.iter().collect();
        let mut down: Vec<_> = descending.iter().collect();
        down.reverse();
        prop_assert_eq!(up, down);
    }

    /// Entries that sort equal keep their insertion order, in both directions.
    #[test]
    fn value_sorts_are_stable(dict in dict_strategy(), descending in any::<bool>()) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let mut sorted = dict.clone();
        sorted.sort(SortMode::Assoc(order));

        let position = |key: &Key| dict.keys().position(|k| k == key);
        let entries: Vec<_> = sorted.iter().collect();
        for pair in entries.windows(2) {
            let (ka, va) = pair[0];
            let (kb, vb) = pair[1];
            if wabi_dict::compare::sort_cmp(va, vb).is_eq() {
                prop_assert!(position(ka) < position(kb));
            }
        }
    }

    /// After a value sort the keys are exactly `0..n`.
    #[test]
    fn value_sort_renumbers(dict in dict_strategy()) {
        let mut sorted = dict.clone();
        sorted.sort(SortMode::Values(SortOrder::Descending));
        let keys: Vec<_> = sorted.keys().cloned().collect();
        let expected: Vec<_> = (0..dict.len() as i64).map(Key::Int).collect();
        prop_assert_eq!(keys, expected);
    }

    /// `Array` agrees with `Dict` once its keys are coerced.
    #[test]
    fn array_matches_dict_on_coerced_keys(entries in proptest::collection::vec((legacy_key_strategy(), value_strategy()), 0..64)) {
        let array: Array = entries.iter().cloned().collect();
        let dict: Dict = entries.into_iter().map(|(k, v)| (k.coerce_legacy(), v)).collect();
        prop_assert_eq!(Dict::from(array), dict);
    }
}

#[test]
fn sum_and_product_of_one_to_five() {
    let dict = Dict::from([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(Value::from(dict.sum()), Value::Int(15));
    assert_eq!(Value::from(dict.product()), Value::Int(120));
}

#[test]
fn search_uses_loose_equality() {
    let dict = Dict::from([(0, 1), (1, 2), (2, 3)]);
    assert_eq!(dict.search(&Value::from("2")), Some(Key::Int(1)));
    assert_eq!(dict.search(&Value::Bool(false)), None);
    assert_eq!(dict.search_strict(&Value::from("2")), None);
    assert_eq!(dict.search_strict(&Value::Int(2)), Some(Key::Int(1)));
}

#[test]
fn dict_keys_are_not_coerced() {
    let mut dict = Dict::new();
    dict.insert("1", "string");
    dict.insert(1, "int");
    assert_eq!(dict.len(), 2);

    let mut array = Array::new();
    array.insert("1", "string");
    array.insert(1, "int");
    assert_eq!(array.len(), 1);
    assert_eq!(array[&Key::from("1")], Value::from("int"));
}

#[test]
fn shift_semantics_differ_between_dict_and_array() {
    let mut dict = Dict::from_values(["a", "b", "c"]);
    dict.shift();
    let keys: Vec<_> = dict.keys().cloned().collect();
    assert_eq!(keys, [Key::Int(1), Key::Int(2)]);
    assert_eq!(dict.next_key(), Some(3));

    let mut array = Array::from_values(["a", "b", "c"]);
    array.shift();
    let keys: Vec<_> = array.keys().cloned().collect();
    assert_eq!(keys, [Key::Int(0), Key::Int(1)]);
    assert_eq!(array.next_key(), Some(2));
}

#[test]
fn exhausted_next_key() {
    let mut dict = Dict::new();
    dict.insert(i64::MAX, "last");
    assert_eq!(dict.next_key(), None);
    assert_eq!(dict.push(["more"]), Err(wabi_dict::Error::NextKeyOccupied));
    assert_eq!(dict.len(), 1);
}

#[test]
fn count_values_merges_int_and_numeric_string_forms() {
    let dict = Dict::from_values([Value::Int(1), Value::from("1"), Value::Bool(true)]);
    let counts: Vec<_> = dict.count_values().into_iter().collect();
    assert_eq!(counts, [(Key::Int(1), Value::Int(3))]);
}
