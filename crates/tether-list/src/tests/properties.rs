// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use tether_alloc::support::test_utils::MockAllocator;
use tether_test_utils::{DropTracker, apply_permutation, index_permutations};

use crate::ForwardList;

fn mock_list(values: &[u8], alloc: &MockAllocator<u8>) -> ForwardList<u8, MockAllocator<u8>> {
    ForwardList::try_from_iter_in(values.iter().copied(), alloc.clone())
        .expect("Failed to try_from_iter_in(..)")
}

fn to_vec(list: &ForwardList<u8, MockAllocator<u8>>) -> Vec<u8> {
    list.iter().copied().collect()
}

proptest! {
    #[test]
    fn prop_push_pop_length_law(ops in prop::collection::vec(prop::option::of(any::<u8>()), 0..96)) {
        let alloc = MockAllocator::default();
        let mut list = ForwardList::new_in(alloc.clone());
        let mut model: Vec<u8> = Vec::new();
        let mut expected_len = 0usize;

        for op in ops {
            match op {
                Some(value) => {
                    list.push_front(value).expect("Failed to push_front(..)");
                    model.push(value);
                    expected_len += 1;
                }
                None => {
                    list.pop_front();
                    model.pop();
                    expected_len = expected_len.saturating_sub(1);
                }
            }

            prop_assert_eq!(list.len(), expected_len);
            prop_assert_eq!(alloc.live_blocks(), expected_len);
        }

        let mut front_to_back = model.clone();
        front_to_back.reverse();
        prop_assert_eq!(to_vec(&list), front_to_back);
        prop_assert_eq!(alloc.construct_count(), alloc.destroy_count() + expected_len);
    }

    #[test]
    fn prop_take_front_is_lifo(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let alloc = MockAllocator::default();
        let mut list = ForwardList::new_in(alloc.clone());

        for &value in &values {
            list.push_front(value).expect("Failed to push_front(..)");
        }

        let mut taken = Vec::new();
        while let Some(value) = list.take_front() {
            taken.push(value);
        }
        taken.reverse();

        prop_assert_eq!(taken, values);
        prop_assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn prop_reverse_is_involution(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let alloc = MockAllocator::default();
        let mut list = mock_list(&values, &alloc);

        list.reverse();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(to_vec(&list), expected);

        list.reverse();
        prop_assert_eq!(to_vec(&list), values);
    }

    #[test]
    fn prop_try_clone_is_reversed(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let alloc = MockAllocator::default();
        let list = mock_list(&values, &alloc);

        let mut copy = list.try_clone().expect("Failed to try_clone()");
        copy.reverse();

        prop_assert_eq!(copy, list);
    }

    #[test]
    fn prop_merge_is_sorted_and_complete(
        mut a in prop::collection::vec(any::<u8>(), 0..48),
        mut b in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        a.sort_unstable();
        b.sort_unstable();

        let alloc = MockAllocator::default();
        let mut left = mock_list(&a, &alloc);
        let mut right = mock_list(&b, &alloc);

        left.merge(&mut right);

        let mut expected = [a, b].concat();
        expected.sort_unstable();

        prop_assert!(right.is_empty());
        prop_assert_eq!(to_vec(&left), expected);
        prop_assert_eq!(alloc.destroy_count(), 0);
    }

    #[test]
    fn prop_remove_if_keeps_survivors(
        values in prop::collection::vec(any::<u8>(), 0..64),
        modulus in 1..8u8,
    ) {
        let alloc = MockAllocator::default();
        let mut list = mock_list(&values, &alloc);

        let removed = list.remove_if(|value| value % modulus == 0);

        let survivors: Vec<u8> = values.iter().copied().filter(|value| value % modulus != 0).collect();
        prop_assert_eq!(removed, values.len() - survivors.len());
        prop_assert_eq!(to_vec(&list), survivors);
        prop_assert_eq!(alloc.live_blocks(), list.len());
    }

    #[test]
    fn prop_unique_matches_dedup(values in prop::collection::vec(0..4u8, 0..64)) {
        let alloc = MockAllocator::default();
        let mut list = mock_list(&values, &alloc);

        let removed = list.unique();

        let mut expected = values.clone();
        expected.dedup();
        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(to_vec(&list), expected);
    }

    #[test]
    fn prop_resize_keeps_tail(
        values in prop::collection::vec(any::<u8>(), 0..32),
        count in 0..48usize,
    ) {
        let alloc = MockAllocator::default();
        let mut list = mock_list(&values, &alloc);

        list.resize(count, 0).expect("Failed to resize(..)");

        let kept = values.len().min(count);
        let mut expected = vec![0u8; count - kept];
        expected.extend_from_slice(&values[values.len() - kept..]);
        prop_assert_eq!(to_vec(&list), expected);
        prop_assert_eq!(alloc.live_blocks(), count);
    }
}

// =============================================================================
// Drop accounting across every insertion order
// =============================================================================

#[test]
fn test_every_insertion_order_drops_each_value_once() {
    for permutation in index_permutations(5) {
        let tracker = DropTracker::new();
        let values: Vec<u32> = (0..5).collect();
        let order = apply_permutation(&values, &permutation);

        let mut list = ForwardList::new();
        for id in order {
            list.push_front(tracker.track(id))
                .expect("Failed to push_front(..)");
        }

        list.remove_if(|counter| counter.id() % 2 == 0);
        assert_eq!(tracker.drops(), 3);

        list.reverse();
        list.unique();
        assert_eq!(tracker.drops(), 3);

        drop(list);
        assert_eq!(tracker.drops(), 5);
    }
}

#[test]
fn test_every_merge_interleaving_is_sorted() {
    for permutation in index_permutations(6) {
        let values: Vec<u32> = (0..6).collect();
        let order = apply_permutation(&values, &permutation);

        let (left, right) = order.split_at(3);
        let mut left = left.to_vec();
        let mut right = right.to_vec();
        left.sort_unstable();
        right.sort_unstable();

        let mut a: ForwardList<u32> = left.into_iter().collect();
        let mut b: ForwardList<u32> = right.into_iter().collect();
        a.merge(&mut b);

        assert!(a.iter().eq(&values));
    }
}
