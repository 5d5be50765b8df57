// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use tether_alloc::{AllocError, Allocator};

use crate::list::ForwardList;
use crate::node::{Chain, Link, Node};

/// A mutable position in a [`ForwardList`].
///
/// A cursor starts *before the front*: a position with no node of its own
/// whose successor is the head. Every edit happens after the cursor, which
/// is the only direction a singly linked chain can be rewired in O(1).
///
/// The cursor borrows the list mutably, so nothing else can restructure the
/// chain while it is alive.
///
/// # Example
///
/// ```rust
/// use tether_list::ForwardList;
///
/// let mut a: ForwardList<u32> = ForwardList::from([1, 2, 3]);
/// let mut b: ForwardList<u32> = ForwardList::from([9, 8]);
///
/// let mut cursor = a.cursor_front_mut();
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&mut 2));
///
/// cursor.splice_after(&mut b);
///
/// assert!(b.is_empty());
/// assert!(a.iter().eq(&[1, 2, 9, 8, 3]));
/// ```
pub struct CursorMut<'a, T, A: Allocator<T>> {
    current: Link<T>,
    list: &'a mut ForwardList<T, A>,
}

impl<'a, T, A: Allocator<T>> CursorMut<'a, T, A> {
    pub(crate) fn new(list: &'a mut ForwardList<T, A>) -> Self {
        Self {
            current: None,
            list,
        }
    }

    /// Slot holding the chain that follows the cursor.
    fn next_slot(&mut self) -> *mut Chain<T> {
        match self.current {
            None => &raw mut self.list.base_mut().head,
            Some(node) => Node::next_ptr(node),
        }
    }

    /// Returns `true` while the cursor sits before the front.
    pub fn is_before_front(&self) -> bool {
        self.current.is_none()
    }

    /// Value of the node under the cursor, `None` before the front.
    pub fn current(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed by the cursor; the node is live.
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Value of the node after the cursor.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let slot = self.next_slot();

        // SAFETY: `slot` belongs to the mutably borrowed list.
        unsafe { (*slot).first() }.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Advances to the next node. Returns `false`, without moving, when the
    /// cursor is already on the last node (or the list is empty).
    pub fn move_next(&mut self) -> bool {
        let slot = self.next_slot();

        // SAFETY: `slot` belongs to the mutably borrowed list.
        match unsafe { (*slot).first() } {
            Some(next) => {
                self.current = Some(next);
                true
            }
            None => false,
        }
    }

    /// Inserts `value` right after the cursor. The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the node cannot be allocated; the list is
    /// unchanged.
    pub fn insert_after(&mut self, value: T) -> Result<(), AllocError> {
        let node = self.list.base().create_node(value)?;
        let slot = self.next_slot();

        // SAFETY: `node` is fresh and detached; `slot` belongs to the list.
        unsafe {
            (*node.as_ptr()).next = (*slot).take();
            *slot = Chain::from_node(node);
        }

        Ok(())
    }

    /// Unlinks and destroys the node after the cursor. Returns `false` when
    /// there is no such node.
    pub fn remove_after(&mut self) -> bool {
        let slot = self.next_slot();

        // SAFETY: `slot` belongs to the list; the unlinked node is owned here
        // until `destroy_node` releases it.
        unsafe {
            let Some(node) = (*slot).first() else {
                return false;
            };
            *slot = (*node.as_ptr()).take_next();
            self.list.base().destroy_node(node);
        }

        true
    }

    /// Unlinks the node after the cursor and returns its value.
    pub fn take_after(&mut self) -> Option<T> {
        let slot = self.next_slot();

        // SAFETY: `slot` belongs to the list; the unlinked node is owned here
        // until `take_node` releases it.
        unsafe {
            let node = (*slot).first()?;
            *slot = (*node.as_ptr()).take_next();
            Some(self.list.base().take_node(node))
        }
    }

    /// Moves all of `other`'s nodes to follow the cursor, leaving `other`
    /// empty. Before the front, they become the new head.
    ///
    /// O(length of `other`), to find its tail. No value is copied.
    ///
    /// # Panics
    ///
    /// Panics if the two allocators compare unequal.
    pub fn splice_after(&mut self, other: &mut ForwardList<T, A>) {
        assert!(
            self.list.allocator() == other.allocator(),
            "splice_after between lists with unequal allocators"
        );

        let incoming = other.base_mut().head.take();

        // SAFETY: `incoming` was owned by `other`, so all its nodes are live.
        let Some(tail) = (unsafe { incoming.last() }) else {
            return;
        };

        let slot = self.next_slot();

        // SAFETY: `tail` is the last node of `incoming`, now owned here;
        // `slot` belongs to the list.
        unsafe {
            (*tail.as_ptr()).next = (*slot).take();
            *slot = incoming;
        }

        log::trace!("spliced chain into forward list");
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: the list is mutably borrowed by the cursor; the node is live.
        let current = self.current.map(|node| unsafe { &(*node.as_ptr()).value });

        f.debug_struct("CursorMut")
            .field("current", &current)
            .finish_non_exhaustive()
    }
}
