// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Traversal handles.
//!
//! Handles reference nodes without owning them. They borrow the list they
//! came from, so no structural change can happen while one is alive.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use tether_alloc::Allocator;

use crate::list::ForwardList;
use crate::node::{Link, Node};

/// Forward-only, non-owning handle into a [`ForwardList`].
///
/// A handle either references a node or is the "end" handle, which
/// references nothing. Two handles are equal iff they reference the same
/// node; all end handles are equal.
///
/// `Iter` is also an [`Iterator`] over shared references, yielding the
/// referenced value and then advancing (post-advance).
///
/// # Example
///
/// ```rust
/// use tether_list::ForwardList;
///
/// let list: ForwardList<u32> = ForwardList::from([1, 2]);
///
/// let mut handle = list.begin();
/// assert_eq!(handle.get(), Some(&1));
///
/// handle.advance();
/// assert_eq!(handle.get(), Some(&2));
///
/// handle.advance();
/// assert_eq!(handle, list.end());
/// ```
pub struct Iter<'a, T> {
    node: Link<T>,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(node: Link<T>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    /// Returns the referenced value, or `None` for the end handle.
    pub fn get(&self) -> Option<&'a T> {
        // SAFETY: the list is borrowed for 'a, so the node is live and not mutated.
        self.node.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Moves to the successor node (pre-advance). Advancing the end handle
    /// leaves it at the end.
    pub fn advance(&mut self) -> &mut Self {
        if let Some(node) = self.node {
            // SAFETY: the list is borrowed for 'a, so the node is live.
            self.node = unsafe { (*node.as_ptr()).next.first() };
        }
        self
    }

    /// Returns `true` for the end handle.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.node)
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.get()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: `Iter` behaves like `&T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: `Iter` behaves like `&T`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Forward iterator over mutable references.
pub struct IterMut<'a, T> {
    node: Link<T>,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(node: Link<T>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.node?;

        // SAFETY: the list is mutably borrowed for 'a and every node is
        // yielded at most once, so the references never alias.
        unsafe {
            self.node = (*node.as_ptr()).next.first();
            Some(&mut (*node.as_ptr()).value)
        }
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").finish_non_exhaustive()
    }
}

// SAFETY: `IterMut` behaves like `&mut T`.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: `IterMut` behaves like `&mut T`.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// Owning iterator, taking values from the front.
pub struct IntoIter<T, A: Allocator<T>> {
    list: ForwardList<T, A>,
}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    pub(crate) fn new(list: ForwardList<T, A>) -> Self {
        Self { list }
    }
}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.take_front()
    }
}

impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
