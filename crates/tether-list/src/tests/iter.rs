// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ForwardList;

// =============================================================================
// begin() / end()
// =============================================================================

#[test]
fn test_begin_equals_end_when_empty() {
    let list: ForwardList<u32> = ForwardList::new();

    assert_eq!(list.begin(), list.end());
    assert!(list.begin().is_end());
    assert_eq!(list.begin().get(), None);
}

#[test]
fn test_begin_references_front() {
    let list: ForwardList<u32> = ForwardList::from([4, 5]);

    let begin = list.begin();
    assert!(!begin.is_end());
    assert_eq!(begin.get(), Some(&4));
    assert_ne!(begin, list.end());
}

// =============================================================================
// advance()
// =============================================================================

#[test]
fn test_advance_walks_to_end() {
    let list: ForwardList<u32> = ForwardList::from([1, 2, 3]);
    let mut handle = list.begin();
    let mut seen = Vec::new();

    while handle != list.end() {
        seen.push(*handle.get().expect("Failed to get()"));
        handle.advance();
    }

    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_advance_end_stays_end() {
    let list: ForwardList<u32> = ForwardList::from([1]);
    let mut handle = list.end();

    handle.advance().advance();

    assert!(handle.is_end());
    assert_eq!(handle, list.end());
}

#[test]
fn test_handles_compare_by_node() {
    let list: ForwardList<u32> = ForwardList::from([7, 7]);

    let first = list.begin();
    let mut second = list.begin();
    second.advance();

    // Equal values, different nodes.
    assert_eq!(first.get(), second.get());
    assert_ne!(first, second);

    let mut again = first.clone();
    again.advance();
    assert_eq!(again, second);
}

// =============================================================================
// Iter / IterMut / IntoIter
// =============================================================================

#[test]
fn test_iter_yields_in_order() {
    let list: ForwardList<u32> = ForwardList::from([3, 1, 2]);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!((&list).into_iter().count(), 3);
}

#[test]
fn test_iter_is_fused() {
    let list: ForwardList<u32> = ForwardList::from([1]);
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_mut_updates_values() {
    let mut list: ForwardList<u32> = ForwardList::from([1, 2, 3]);

    for value in list.iter_mut() {
        *value *= 10;
    }
    for value in &mut list {
        *value += 1;
    }

    assert!(list.iter().eq(&[11, 21, 31]));
}

#[test]
fn test_into_iter_moves_values() {
    let list: ForwardList<String> =
        ForwardList::from([String::from("a"), String::from("b")]);

    let values: Vec<String> = list.into_iter().collect();

    assert_eq!(values, vec!["a", "b"]);
}

#[test]
fn test_into_iter_drops_remaining() {
    let tracker = tether_test_utils::DropTracker::new();
    let list: ForwardList<_> = (0..4).map(|id| tracker.track(id)).collect();

    let mut iter = list.into_iter();
    let first = iter.next().expect("Failed to next()");
    assert_eq!(first.id(), 0);
    assert_eq!(tracker.drops(), 0);

    drop(iter);
    assert_eq!(tracker.drops(), 3);

    drop(first);
    assert_eq!(tracker.drops(), 4);
}

#[test]
fn test_iter_debug() {
    let list: ForwardList<u32> = ForwardList::from([1, 2]);

    let mut handle = list.begin();
    assert_eq!(format!("{handle:?}"), "Iter(Some(1))");

    handle.advance().advance();
    assert_eq!(format!("{handle:?}"), "Iter(None)");
}
