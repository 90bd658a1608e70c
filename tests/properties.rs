//! Model-based tests driving `List` and `Vec` through the same operation
//! sequences, plus structural checks over the raw handle walks.

use proptest::prelude::*;
use slotlist::{List, ListError};

#[derive(Debug, Clone)]
enum Op {
    PushBack(u32),
    PushFront(u32),
    InsertAt(usize, u32),
    Set(usize, u32),
    RemoveAt(usize),
    RemoveFirst(u32),
    PopFront,
    PopBack,
    Clear,
    Sort,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::PushBack),
        2 => any::<u32>().prop_map(Op::PushFront),
        2 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        1 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => any::<usize>().prop_map(Op::RemoveAt),
        1 => (0u32..8).prop_map(Op::RemoveFirst),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        1 => Just(Op::Clear),
        1 => Just(Op::Sort),
    ]
}

/// Walks the chain through handles in both directions and checks that the
/// walks mirror each other and agree with the reported length.
fn assert_structure(list: &List<u32>) {
    let mut forward = Vec::new();
    let mut node = list.head_node();
    while let Some(n) = node {
        forward.push(*list.value(n).unwrap());
        node = list.next_node(n);
    }

    let mut backward = Vec::new();
    let mut node = list.tail_node();
    while let Some(n) = node {
        backward.push(*list.value(n).unwrap());
        node = list.prev_node(n);
    }

    assert_eq!(forward.len(), list.len());
    assert_eq!(backward.len(), list.len());
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward, list.to_vec());
    assert_eq!(list.is_empty(), list.head_node().is_none());
    assert_eq!(list.is_empty(), list.tail_node().is_none());
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut list: List<u32> = List::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    list.push_back(v);
                    model.push(v);
                }
                Op::PushFront(v) => {
                    list.push_front(v);
                    model.insert(0, v);
                }
                Op::InsertAt(i, v) => {
                    let i = i % (model.len() + 1);
                    list.insert_at(i, v).unwrap();
                    model.insert(i, v);
                }
                Op::Set(i, v) => {
                    if model.is_empty() {
                        prop_assert_eq!(
                            list.set(i, v),
                            Err(ListError::IndexOutOfBounds { index: i, len: 0 })
                        );
                    } else {
                        let i = i % model.len();
                        let old = list.set(i, v).unwrap();
                        prop_assert_eq!(old, model[i]);
                        model[i] = v;
                    }
                }
                Op::RemoveAt(i) => {
                    if model.is_empty() {
                        prop_assert!(list.remove_at(i).is_err());
                    } else {
                        let i = i % model.len();
                        let removed = list.remove_at(i).unwrap();
                        prop_assert_eq!(removed, model.remove(i));
                    }
                }
                Op::RemoveFirst(v) => {
                    match model.iter().position(|&m| m == v) {
                        Some(i) => {
                            prop_assert_eq!(list.remove_first_by(&v, |a, b| a == b), Ok(v));
                            model.remove(i);
                        }
                        None => prop_assert_eq!(
                            list.remove_first_by(&v, |a, b| a == b),
                            Err(ListError::NotFound)
                        ),
                    }
                }
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
                Op::PopBack => {
                    prop_assert_eq!(list.pop_back(), model.pop());
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
                Op::Sort => {
                    list.sort();
                    model.sort_unstable();
                }
            }

            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.to_vec(), model);
        assert_structure(&list);
    }

    #[test]
    fn slice_round_trip(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let list = List::from_slice(&values);
        prop_assert_eq!(list.to_vec(), values);
        assert_structure(&list);
    }

    #[test]
    fn sort_matches_vec_sort(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let mut list = List::from_slice(&values);
        list.sort();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(list.to_vec(), expected);
        assert_structure(&list);
    }

    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(any::<u32>(), 0..48)) {
        let mut list = List::from_slice(&values);
        list.sort();
        let once = list.to_vec();
        list.sort();
        prop_assert_eq!(list.to_vec(), once);
    }

    #[test]
    fn backward_enumeration_keeps_absolute_positions(
        values in prop::collection::vec(any::<u32>(), 0..48),
    ) {
        let list = List::from_slice(&values);

        let backward: Vec<_> = list.iter().enumerate().rev().map(|(i, &v)| (i, v)).collect();
        let mut expected: Vec<_> = values.into_iter().enumerate().collect();
        expected.reverse();
        prop_assert_eq!(backward, expected);
    }

    #[test]
    fn position_by_agrees_with_vec(
        values in prop::collection::vec(0u32..8, 0..48),
        needle in 0u32..8,
    ) {
        let list = List::from_slice(&values);
        match values.iter().position(|&v| v == needle) {
            Some(i) => prop_assert_eq!(list.position_by(&needle, |a, b| a == b), Ok(i)),
            None => prop_assert_eq!(
                list.position_by(&needle, |a, b| a == b),
                Err(ListError::NotFound)
            ),
        }
    }

    #[test]
    fn insert_slice_at_matches_vec_splice(
        base in prop::collection::vec(any::<u32>(), 0..32),
        extra in prop::collection::vec(any::<u32>(), 0..16),
        index in any::<usize>(),
    ) {
        let index = index % (base.len() + 1);
        let mut list = List::from_slice(&base);
        list.insert_slice_at(index, &extra).unwrap();

        let mut expected = base;
        expected.splice(index..index, extra);
        prop_assert_eq!(list.to_vec(), expected);
        assert_structure(&list);
    }
}
