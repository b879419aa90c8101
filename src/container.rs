use crate::compare::{loose_eq, strict_eq};
use crate::numeric::Number;
use crate::{ContainerKind, Dict, Key, Value};

/// Read-only operations shared by [`Array`](crate::Array), [`Dict`] and
/// [`Sequence`](crate::Sequence).
///
/// Implementors provide the entry count, the values in iteration order and
/// the key at a position; everything else is derived from those.
///
/// # Examples
///
/// ```
/// use wabi_dict::numeric::Number;
/// use wabi_dict::{Container, Key, Sequence, Value};
///
/// let numbers = Sequence::from([1, 2, 3, 4, 5]);
/// assert_eq!(numbers.sum(), Number::Int(15));
/// assert_eq!(numbers.product(), Number::Int(120));
/// assert_eq!(numbers.search(&Value::from("2")), Some(Key::Int(1)));
/// assert!(!numbers.contains(&Value::Bool(false)));
/// ```
pub trait Container {
    /// Iterator over the values in iteration order.
    type Values<'a>: Iterator<Item = &'a Value>
    where
        Self: 'a;

    /// Which of the three container kinds this is.
    fn kind(&self) -> ContainerKind;

    /// Number of entries.
    fn count(&self) -> usize;

    /// Values in iteration order.
    fn container_values(&self) -> Self::Values<'_>;

    /// Key of the entry at `position` in iteration order.
    fn key_at(&self, position: usize) -> Option<Key>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Maps each distinct value to how often it occurs, in first-occurrence
    /// order.
    ///
    /// Each value counts under its string conversion, with canonical integer
    /// strings coerced to integer keys. So `1`, `"1"`, `true` and `1.0` share
    /// the bucket `1`, while `"01"` keeps its own string bucket. The counts
    /// always add up to [`count`](Container::count).
    fn count_values(&self) -> Dict {
        let mut counts = Dict::new();
        for value in self.container_values() {
            let key = Key::Str(value.to_php_string()).coerce_legacy();
            match counts.get_mut(&key) {
                Some(Value::Int(n)) => *n += 1,
                _ => {
                    counts.insert(key, Value::Int(1));
                }
            }
        }
        counts
    }

    /// Sum of the values' numeric coercions; containers are skipped.
    fn sum(&self) -> Number {
        self.container_values()
            .filter_map(Value::to_number)
            .fold(Number::Int(0), Number::add)
    }

    /// Product of the values' numeric coercions; containers are skipped.
    fn product(&self) -> Number {
        self.container_values()
            .filter_map(Value::to_number)
            .fold(Number::Int(1), Number::mul)
    }

    /// Left fold over the values in iteration order.
    fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &Value) -> A,
    {
        self.container_values().fold(initial, f)
    }

    /// Key of the first value loosely equal to `needle`.
    fn search(&self, needle: &Value) -> Option<Key> {
        let position = self.container_values().position(|v| loose_eq(v, needle))?;
        self.key_at(position)
    }

    /// Key of the first value identical to `needle`.
    fn search_strict(&self, needle: &Value) -> Option<Key> {
        let position = self.container_values().position(|v| strict_eq(v, needle))?;
        self.key_at(position)
    }

    /// Whether any value is loosely equal to `needle`.
    fn contains(&self, needle: &Value) -> bool {
        self.container_values().any(|v| loose_eq(v, needle))
    }

    /// Whether any value is identical to `needle`.
    fn contains_strict(&self, needle: &Value) -> bool {
        self.container_values().any(|v| strict_eq(v, needle))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{Array, Sequence};
    use proptest::prelude::*;

    #[test]
    fn count_values_buckets_by_string_form() {
        let values = Sequence::from([Value::Int(1), Value::from("1"), Value::Bool(true), Value::Float(1.0), Value::Null]);
        let counts = values.count_values();
        let entries: alloc::vec::Vec<_> = counts.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            entries,
            [(Key::Int(1), Value::Int(4)), (Key::from(""), Value::Int(1))]
        );
    }

    #[test]
    fn count_values_keeps_non_canonical_strings_apart() {
        let values = Sequence::from([Value::from("01"), Value::Int(1), Value::from("-3"), Value::Int(-3)]);
        let entries: alloc::vec::Vec<_> = values.count_values().into_iter().collect();
        assert_eq!(
            entries,
            [
                (Key::from("01"), Value::Int(1)),
                (Key::Int(1), Value::Int(1)),
                (Key::Int(-3), Value::Int(2)),
            ]
        );
    }

    #[test]
    fn folds_coerce_strings_and_skip_containers() {
        let values = Sequence::from([Value::from("3 apples"), Value::Bool(true), Value::from(Dict::new()), Value::Float(0.5)]);
        assert_eq!(values.sum(), Number::Float(4.5));
        assert_eq!(values.product(), Number::Float(1.5));
        assert_eq!(Sequence::from([Value::from("pad")]).product(), Number::Int(0));
        assert_eq!(Sequence::new().sum(), Number::Int(0));
        assert_eq!(Sequence::new().product(), Number::Int(1));
    }

    #[test]
    fn search_false_only_matches_falsy_values() {
        let values = Array::from_values([1, 2, 3]);
        assert_eq!(values.search(&Value::Bool(false)), None);
        let with_zero = Array::from_values([1, 0]);
        assert_eq!(with_zero.search(&Value::Bool(false)), Some(Key::Int(1)));
        assert_eq!(with_zero.search_strict(&Value::Bool(false)), None);
        assert!(with_zero.contains_strict(&Value::Int(0)));
        assert!(!with_zero.contains_strict(&Value::from("0")));
    }

    #[test]
    fn search_returns_string_keys() {
        let dict = Dict::from([(Key::from("a"), Value::Int(1)), (Key::from("b"), Value::Int(2))]);
        assert_eq!(dict.search(&Value::from("2")), Some(Key::from("b")));
        assert_eq!(dict.search(&Value::from("not-found")), None);
        assert_eq!(dict.reduce(0, |acc, v| acc + i64::from(matches!(v, Value::Int(_)))), 2);
    }

    fn values_strategy() -> impl Strategy<Value = Sequence> {
        let value = prop_oneof![
            (-3_i64..3).prop_map(Value::Int),
            prop_oneof![Just("a"), Just("1"), Just("")].prop_map(Value::from),
            any::<bool>().prop_map(Value::Bool),
            Just(Value::Null),
            Just(Value::Float(1.0)),
        ];
        prop::collection::vec(value, 0..64).prop_map(Sequence::from_iter)
    }

    proptest! {
        #[test]
        fn counts_add_up_to_count(values in values_strategy()) {
            let total: i64 = values
                .count_values()
                .values()
                .map(|v| match v {
                    Value::Int(n) => *n,
                    _ => 0,
                })
                .sum();
            prop_assert_eq!(usize::try_from(total).unwrap(), values.count());
        }

        #[test]
        fn search_finds_a_loosely_equal_value(values in values_strategy(), needle in -3_i64..3) {
            let needle = Value::Int(needle);
            match values.search(&needle) {
                Some(Key::Int(i)) => {
                    let i = usize::try_from(i).unwrap();
                    prop_assert!(loose_eq(&values[i], &needle));
                    prop_assert!(values.iter().take(i).all(|v| !loose_eq(v, &needle)));
                }
                Some(key) => prop_assert!(false, "unexpected key {key:?}"),
                None => prop_assert!(!values.contains(&needle)),
            }
        }
    }
}
