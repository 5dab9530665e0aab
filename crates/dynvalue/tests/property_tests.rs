//! Property-based tests for operator and container invariants.
//!
//! These use proptest to check:
//! 1. Floor division and modulo agree with floor semantics and divisor sign
//! 2. Negative indices address the same element as their positive form
//! 3. Appending then reading index -1 returns the appended value, and an
//!    index computed by arithmetic addresses the same element as an integer
//! 4. A full slice is structurally equal to, but not an alias of, its source

use dynvalue::*;
use proptest::prelude::*;

// -- Value Generation Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(inner, 0..4).prop_map(Value::tuple),
        ]
    })
}

fn list_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(scalar_strategy(), 1..16)
}

proptest! {
    #[test]
    fn floor_div_matches_floor(a in -10_000i64..10_000, b in -100i64..100) {
        prop_assume!(b != 0);
        let q = ops::floor_div(&Value::Int(a), &Value::Int(b)).unwrap();
        prop_assert_eq!(q.as_float().unwrap(), (a as f64 / b as f64).floor());
    }

    #[test]
    fn modulo_takes_divisor_sign(a in -10_000i64..10_000, b in -100i64..100) {
        prop_assume!(b != 0);
        let r = ops::modulo(&Value::Int(a), &Value::Int(b)).unwrap().as_float().unwrap();
        prop_assert!(r == 0.0 || (r > 0.0) == (b > 0));
        prop_assert!(r.abs() < (b as f64).abs());
    }

    #[test]
    fn negative_index_equivalence(items in list_strategy(), seed in any::<usize>()) {
        let len = items.len();
        let i = (seed % len) as i64;
        let list = Value::list(items);
        let handle = list.as_list().unwrap();
        let forward = handle.get(i).unwrap();
        let backward = handle.get(i - len as i64).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn computed_index_matches_int_index(items in list_strategy(), seed in any::<usize>()) {
        let len = items.len() as i64;
        let i = (seed % items.len()) as i64;
        let list = Value::list(items);
        let computed = ops::sub(&Value::Int(i), &Value::Int(len)).unwrap();
        prop_assert!(computed.is_float());
        prop_assert_eq!(
            get_item(&list, &computed).unwrap(),
            get_item(&list, &Value::Int(i)).unwrap()
        );
    }

    #[test]
    fn append_then_last(x in value_strategy()) {
        let list = Value::list(vec![]);
        append(&list, x.clone()).unwrap();
        let last = list.as_list().unwrap().get(-1).unwrap();
        prop_assert_eq!(last, x);
    }

    #[test]
    fn full_slice_is_equal_copy(items in list_strategy()) {
        let len = items.len() as i64;
        let list = Value::list(items);
        let copy = list.as_list().unwrap().slice(0, len, 1).unwrap();
        prop_assert!(!copy.is_alias_of(&list));
        prop_assert_eq!(copy, list);
    }

    #[test]
    fn zero_step_always_fails(items in list_strategy(), start in -20i64..20, stop in -20i64..20) {
        let list = Value::list(items);
        prop_assert_eq!(
            list.as_list().unwrap().slice(start, stop, 0).unwrap_err(),
            RuntimeError::InvalidStep
        );
    }

    #[test]
    fn equality_is_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn range_len_matches_iteration(start in -50i64..50, stop in -50i64..50, step in -7i64..7) {
        prop_assume!(step != 0);
        let range = Range::new(start, stop, step).unwrap();
        prop_assert_eq!(range.len(), Some(range.iter().count()));
    }
}
