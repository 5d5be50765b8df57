// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ListBase - head chain + allocator, node lifecycle as a unit.

use core::mem;
use core::ptr::{self, NonNull};

use tether_alloc::{AllocError, Allocator};

use crate::node::{Chain, Node};

/// Owns the head chain and the allocator of a forward list.
///
/// Every node in `head` was produced by [`ListBase::create_node`] on this
/// base (or one with an equal allocator), so it can be torn down by
/// [`ListBase::destroy_node`]. [`ListBase::clear`] is the single path that
/// releases a whole chain; `Drop` goes through it.
///
/// Duplication is not offered here: only the container knows how to copy
/// values.
pub(crate) struct ListBase<T, A: Allocator<T>> {
    pub(crate) head: Chain<T>,
    alloc: A,
}

impl<T, A: Allocator<T>> ListBase<T, A> {
    pub(crate) fn new_in(alloc: A) -> Self {
        Self {
            head: Chain::empty(),
            alloc,
        }
    }

    /// Element allocator. Node memory comes from its rebind.
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn node_allocator(&self) -> A::Rebind<Node<T>> {
        self.alloc.rebind()
    }

    /// Raw memory for one node. Nothing inside is initialized.
    pub(crate) fn allocate_node(&self) -> Result<NonNull<Node<T>>, AllocError> {
        self.node_allocator().allocate(1)
    }

    /// Releases raw node memory.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListBase::allocate_node`] on a base with an
    /// equal allocator, its value must already be destroyed or moved out, and
    /// it must be unreachable from any chain.
    pub(crate) unsafe fn deallocate_node(&self, node: NonNull<Node<T>>) {
        // SAFETY: forwarded from the caller; nodes are always allocated one at a time.
        unsafe { self.node_allocator().deallocate(node, 1) };
    }

    /// Allocates a node and moves `value` into it. The node is not linked.
    pub(crate) fn create_node(&self, value: T) -> Result<NonNull<Node<T>>, AllocError> {
        self.create_node_with(|| value)
    }

    /// Allocates a node and builds its value in place from `f`.
    ///
    /// If allocation fails, `f` is never called. If `f` panics, the node
    /// memory is released before unwinding continues.
    pub(crate) fn create_node_with<F>(&self, f: F) -> Result<NonNull<Node<T>>, AllocError>
    where
        F: FnOnce() -> T,
    {
        let node = self.allocate_node()?;
        let guard = RawNodeGuard { base: self, node };

        // SAFETY: `node` is freshly allocated storage for one `Node<T>`.
        unsafe {
            self.alloc.construct_with(Node::value_ptr(node), f);
            Node::next_ptr(node).write(Chain::empty());
        }

        mem::forget(guard);
        Ok(node)
    }

    /// Destroys the node's value and releases its memory.
    ///
    /// The node's successor link is discarded, not followed.
    ///
    /// # Safety
    ///
    /// `node` must have been produced by [`ListBase::create_node`] on a base
    /// with an equal allocator, must hold a live value, and must be
    /// unreachable from any chain.
    pub(crate) unsafe fn destroy_node(&self, node: NonNull<Node<T>>) {
        // SAFETY: forwarded from the caller.
        unsafe {
            self.alloc.destroy(Node::value_ptr(node));
            self.deallocate_node(node);
        }
    }

    /// Moves the value out of the node and releases its memory.
    ///
    /// # Safety
    ///
    /// Same as [`ListBase::destroy_node`].
    pub(crate) unsafe fn take_node(&self, node: NonNull<Node<T>>) -> T {
        // SAFETY: forwarded from the caller; the value is read exactly once.
        unsafe {
            let value = ptr::read(Node::value_ptr(node).as_ptr());
            self.deallocate_node(node);
            value
        }
    }

    /// Links a detached node in front of the head.
    ///
    /// # Safety
    ///
    /// `node` must be a live node from [`ListBase::create_node`] that no
    /// chain currently reaches.
    pub(crate) unsafe fn link_front(&mut self, node: NonNull<Node<T>>) {
        let rest = self.head.take();

        // SAFETY: the caller guarantees `node` is live and detached.
        unsafe { (*node.as_ptr()).next = rest };

        self.head = Chain::from_node(node);
    }

    /// Detaches the head node. The caller becomes its owner.
    pub(crate) fn unlink_front(&mut self) -> Option<NonNull<Node<T>>> {
        let node = self.head.first()?;

        // SAFETY: `node` is owned by `self.head`.
        self.head = unsafe { (*node.as_ptr()).take_next() };

        Some(node)
    }

    /// Destroys every node reachable from the head and resets it.
    ///
    /// Calling this on an empty base is a no-op.
    pub(crate) fn clear(&mut self) {
        let mut rest = self.head.take();
        let mut destroyed = 0usize;

        while let Some(node) = rest.first() {
            // SAFETY: `rest` owns `node`; it is detached before being destroyed.
            unsafe {
                rest = (*node.as_ptr()).take_next();
                self.destroy_node(node);
            }
            destroyed += 1;
        }

        if destroyed > 0 {
            log::trace!("forward list cleared: {destroyed} nodes destroyed");
        }
    }

    /// Transfers the chain and a copy of the allocator into a new base,
    /// leaving `self` empty.
    pub(crate) fn take(&mut self) -> Self {
        Self {
            head: self.head.take(),
            alloc: self.alloc.clone(),
        }
    }

    /// Exchanges head and allocator. No node is touched.
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.alloc, &mut other.alloc);
    }
}

impl<T, A: Allocator<T>> Drop for ListBase<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Releases a node whose value was never constructed.
struct RawNodeGuard<'a, T, A: Allocator<T>> {
    base: &'a ListBase<T, A>,
    node: NonNull<Node<T>>,
}

impl<T, A: Allocator<T>> Drop for RawNodeGuard<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: the node came from `allocate_node` and holds no value.
        unsafe { self.base.deallocate_node(self.node) };
    }
}
