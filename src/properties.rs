// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomized checks of the container laws, plus an operation-sequence model
//! test against `alloc::vec::Vec`.

use crate::FixedVector;
use alloc::vec::Vec;
use proptest::prelude::*;

const CAP: usize = 8;

fn contents() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..=CAP)
}

fn build(values: &[i32]) -> FixedVector<i32, CAP> {
    FixedVector::from_copy_slice(values)
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize, i32),
    Assign(usize, i32),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0..=CAP, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        (0..CAP).prop_map(Op::Erase),
        (0..=CAP, 0..=CAP).prop_map(|(a, b)| Op::EraseRange(a.min(b), a.max(b))),
        (0..=CAP, any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
        (0..=CAP, any::<i32>()).prop_map(|(n, x)| Op::Assign(n, x)),
        Just(Op::Clear),
    ]
}

/// Applies `op` to both containers, skipping it where a precondition fails.
fn apply(v: &mut FixedVector<i32, CAP>, model: &mut Vec<i32>, op: Op) {
    match op {
        Op::Push(x) if model.len() < CAP => {
            v.push_back(x);
            model.push(x);
        }
        Op::Pop if !model.is_empty() => {
            assert_eq!(Some(v.pop_back()), model.pop());
        }
        Op::Insert(i, x) if i <= model.len() && model.len() < CAP => {
            assert_eq!(*v.insert(i, x).get(), x);
            model.insert(i, x);
        }
        Op::Erase(i) if i < model.len() => {
            v.erase(i);
            model.remove(i);
        }
        Op::EraseRange(a, b) if b <= model.len() => {
            v.erase_range(a..b);
            model.drain(a..b);
        }
        Op::Resize(n, x) => {
            v.resize(n, x);
            model.resize(n, x);
        }
        Op::Assign(n, x) => {
            v.assign(n, x);
            model.clear();
            model.resize(n, x);
        }
        Op::Clear => {
            v.clear();
            model.clear();
        }
        _ => {}
    }
}

proptest! {
    /// Length stays within `[0, N]` and the contents track a `Vec` model.
    #[test]
    fn length_bound_holds_under_any_operation_sequence(ops in prop::collection::vec(op(), 0..64)) {
        let mut v: FixedVector<i32, CAP> = FixedVector::new();
        let mut model = Vec::new();
        for op in ops {
            apply(&mut v, &mut model, op);
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert_eq!(v.end() - v.begin(), model.len() as isize);
        }
    }

    #[test]
    fn literal_reads_back_in_order(values in contents()) {
        let v = build(&values);
        prop_assert_eq!(v.len(), values.len());
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v[i], *x);
        }
        let walked: Vec<i32> = v.begin().iter().copied().collect();
        prop_assert_eq!(walked, values);
    }

    #[test]
    fn push_then_pop_restores_prefix(values in contents(), extra in prop::collection::vec(any::<i32>(), 0..=CAP)) {
        let mut v = build(&values);
        let k = extra.len().min(v.spare_capacity());
        for x in &extra[..k] {
            v.push_back(*x);
        }
        for x in extra[..k].iter().rev() {
            prop_assert_eq!(v.pop_back(), *x);
        }
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn insert_then_erase_restores_contents(values in prop::collection::vec(any::<i32>(), 0..CAP), at in 0..CAP, x in any::<i32>()) {
        let mut v = build(&values);
        let i = at.min(values.len());
        v.insert(i, x);
        prop_assert_eq!(v.len(), values.len() + 1);
        prop_assert_eq!(v[i], x);
        v.erase(i);
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn grow_then_shrink_preserves_prefix(values in contents(), m in 0..=CAP, fill in any::<i32>()) {
        let mut v = build(&values);
        let original = values.len();
        let grown = m.max(original);
        v.resize(grown, fill);
        prop_assert!(v[original..].iter().all(|&y| y == fill));
        v.resize(original, fill);
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn clone_from_equal_value_is_noop(values in contents()) {
        let mut v = build(&values);
        let same = v.clone();
        v.clone_from(&same);
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn swap_exchanges_contents(a in contents(), b in contents()) {
        let mut va = build(&a);
        let mut vb = build(&b);
        va.swap_with(&mut vb);
        prop_assert_eq!(va.as_slice(), b.as_slice());
        prop_assert_eq!(vb.as_slice(), a.as_slice());
        prop_assert_eq!(va.capacity(), CAP);
    }

    #[test]
    fn move_across_capacities_keeps_order(values in contents()) {
        let mut source = build(&values);
        let mut wide: FixedVector<i32, 16> = FixedVector::new();
        wide.move_from(&mut source);
        prop_assert!(source.is_empty());
        prop_assert_eq!(wide.as_slice(), values.as_slice());
    }
}

#[test]
fn capacity_four_scenarios() {
    let mut v: FixedVector<i32, 4> = crate::fixed_vector![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert!(!v.is_full());
    v.push_back(4);
    assert_eq!(v, [1, 2, 3, 4]);
    assert!(v.is_full());

    v.erase(1);
    assert_eq!(v, [1, 3, 4]);
    v.insert(1, 9);
    assert_eq!(v, [1, 9, 3, 4]);
    assert!(v.is_full());

    v.assign(2, 7);
    assert_eq!(v, [7, 7]);
    assert_eq!(v.len(), 2);

    let caught = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
        let mut full: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3, 4]);
        full.push_back(5);
    }));
    assert!(caught.is_err());
}
