// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Node storage and the owning chain handle.
//!
//! A [`Node`] owns nothing beyond its value: its successor link is a
//! [`Chain`], and whoever holds a chain owns every node reachable from it.
//! Chains are neither `Copy` nor `Clone`. [`Chain::take`] is the only way to
//! hand one over and it empties the source, so no node is reachable from two
//! places.

use core::mem;
use core::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// Unit of chain storage: one value plus one successor link.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Chain<T>,
}

impl<T> Node<T> {
    /// Moves the successor link out, leaving this node at the end of its chain.
    pub(crate) fn take_next(&mut self) -> Chain<T> {
        self.next.take()
    }

    /// Pointer to the value slot of `node`, without creating a reference.
    pub(crate) fn value_ptr(node: NonNull<Node<T>>) -> NonNull<T> {
        // SAFETY: field projection of a non-null pointer is non-null.
        unsafe { NonNull::new_unchecked(&raw mut (*node.as_ptr()).value) }
    }

    /// Pointer to the successor slot of `node`, without creating a reference.
    pub(crate) fn next_ptr(node: NonNull<Node<T>>) -> *mut Chain<T> {
        // SAFETY: only computes an address inside the node's allocation.
        unsafe { &raw mut (*node.as_ptr()).next }
    }
}

/// Owning handle to a (possibly empty) sequence of nodes.
///
/// Dropping a chain does not free anything; the list base is responsible for
/// walking it through the allocator.
pub(crate) struct Chain<T> {
    first: Link<T>,
}

impl<T> Chain<T> {
    pub(crate) const fn empty() -> Self {
        Self { first: None }
    }

    pub(crate) const fn from_node(node: NonNull<Node<T>>) -> Self {
        Self { first: Some(node) }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// First node of the chain, if any. The chain keeps ownership.
    pub(crate) fn first(&self) -> Link<T> {
        self.first
    }

    /// Transfers the whole chain out, leaving `self` empty.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Last node of the chain. O(length).
    ///
    /// # Safety
    ///
    /// Every node reachable from `self` must be live.
    pub(crate) unsafe fn last(&self) -> Link<T> {
        let mut last = self.first?;

        // SAFETY: the caller guarantees every reachable node is live.
        while let Some(next) = unsafe { (*last.as_ptr()).next.first } {
            last = next;
        }

        Some(last)
    }
}
