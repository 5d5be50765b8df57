// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::fmt;

use tether_alloc::{AllocError, Allocator, StdAllocator};

use crate::base::ListBase;
use crate::cursor::CursorMut;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::node::{Chain, Node};

/// Singly linked sequence over a pluggable allocator.
///
/// The list is either empty or owns one acyclic chain of nodes, every one of
/// which it created itself. All memory goes through `A`: node storage via
/// `A::Rebind<Node<T>>`, values via `A` directly.
///
/// # Surprising contracts
///
/// - [`ForwardList::try_clone`] (and `Clone`) rebuild the copy by
///   front-insertion, so **the copy iterates in reverse order**.
/// - [`ForwardList::unique`] only collapses *adjacent* equal elements.
/// - [`ForwardList::resize`] truncates and pads at the **front**.
///
/// # Example
///
/// ```rust
/// use tether_list::{AllocError, ForwardList};
///
/// fn example() -> Result<(), AllocError> {
///     let mut list = ForwardList::new();
///     list.push_front(1u32)?;
///     list.push_front(2u32)?;
///
///     assert_eq!(list.front(), Some(&2));
///     assert!(list.iter().eq(&[2, 1]));
///
///     let copy = list.try_clone()?;
///     assert!(copy.iter().eq(&[1, 2]));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ForwardList<T, A: Allocator<T> = StdAllocator<T>> {
    base: ListBase<T, A>,
}

impl<T> ForwardList<T> {
    /// Creates an empty list on the global heap.
    pub fn new() -> Self {
        Self::new_in(StdAllocator::new())
    }
}

impl<T, A: Allocator<T>> ForwardList<T, A> {
    /// Creates an empty list that allocates through `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            base: ListBase::new_in(alloc),
        }
    }

    pub(crate) fn base(&self) -> &ListBase<T, A> {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut ListBase<T, A> {
        &mut self.base
    }

    /// Returns the element allocator.
    pub fn allocator(&self) -> &A {
        self.base.allocator()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.base.head.is_empty()
    }

    /// Counts the elements. O(n): the list does not store its length.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first element.
    pub fn front(&self) -> Option<&T> {
        self.begin().get()
    }

    /// Returns the first element mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().next()
    }

    /// Handle to the first node, or the end handle if empty.
    pub fn begin(&self) -> Iter<'_, T> {
        Iter::new(self.base.head.first())
    }

    /// The end handle. It references no node.
    pub fn end(&self) -> Iter<'_, T> {
        Iter::new(None)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin()
    }

    /// Iterates front to back over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.base.head.first())
    }

    /// Cursor positioned before the first node.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut::new(self)
    }

    /// Prepends `value`. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the node cannot be allocated. The list is
    /// unchanged and `value` is dropped.
    pub fn push_front(&mut self, value: T) -> Result<(), AllocError> {
        let node = self.base.create_node(value)?;

        // SAFETY: `node` is fresh and detached.
        unsafe { self.base.link_front(node) };

        Ok(())
    }

    /// Prepends a value built in place by `f`.
    ///
    /// `f` runs only once node memory is secured.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the node cannot be allocated. The list is
    /// unchanged and `f` is not called.
    pub fn emplace_front<F>(&mut self, f: F) -> Result<(), AllocError>
    where
        F: FnOnce() -> T,
    {
        let node = self.base.create_node_with(f)?;

        // SAFETY: `node` is fresh and detached.
        unsafe { self.base.link_front(node) };

        Ok(())
    }

    /// Destroys the first element. No-op on an empty list.
    ///
    /// The value is torn down through the allocator; use
    /// [`ForwardList::take_front`] to keep it.
    pub fn pop_front(&mut self) {
        if let Some(node) = self.base.unlink_front() {
            // SAFETY: `node` was just detached from our own chain.
            unsafe { self.base.destroy_node(node) };
        }
    }

    /// Unlinks the first element and returns it by value.
    ///
    /// The value is moved out, so the allocator releases the node memory but
    /// never sees a `destroy` for it.
    pub fn take_front(&mut self) -> Option<T> {
        let node = self.base.unlink_front()?;

        // SAFETY: `node` was just detached from our own chain.
        Some(unsafe { self.base.take_node(node) })
    }

    /// Destroys every element.
    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if a node cannot be allocated; the clones
    /// already inserted stay in the list.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), AllocError>
    where
        T: Clone,
    {
        self.clear();

        for _ in 0..count {
            self.push_front(value.clone())?;
        }

        Ok(())
    }

    /// Resizes to `count` elements, padding with clones of `value`.
    ///
    /// See [`ForwardList::resize_with`].
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), AllocError>
    where
        T: Clone,
    {
        self.resize_with(count, || value.clone())
    }

    /// Resizes to `count` elements, padding with `T::default()`.
    ///
    /// See [`ForwardList::resize_with`].
    pub fn resize_default(&mut self, count: usize) -> Result<(), AllocError>
    where
        T: Default,
    {
        self.resize_with(count, T::default)
    }

    /// Resizes to `count` elements.
    ///
    /// A longer list loses elements from the **front**; a shorter one gains
    /// values from `f`, also at the front. O(current length) to measure.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if a padding node cannot be allocated; padding
    /// already inserted stays in the list.
    pub fn resize_with<F>(&mut self, count: usize, mut f: F) -> Result<(), AllocError>
    where
        F: FnMut() -> T,
    {
        let len = self.len();

        if len > count {
            for _ in count..len {
                if let Some(node) = self.base.unlink_front() {
                    // SAFETY: `node` was just detached from our own chain.
                    unsafe { self.base.destroy_node(node) };
                }
            }
        } else {
            for _ in len..count {
                self.emplace_front(&mut f)?;
            }
        }

        Ok(())
    }

    /// Exchanges contents and allocators with `other`. O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.base.swap(&mut other.base);
    }

    /// Moves every node into a new list, leaving `self` empty.
    ///
    /// The new list gets a copy of the allocator; no node is copied.
    pub fn take(&mut self) -> Self {
        Self {
            base: self.base.take(),
        }
    }

    /// Merges the ascending list `other` into this ascending list.
    ///
    /// `other` is left empty and no value is copied. On equal elements,
    /// this list's element comes first. Neither list is checked for being
    /// sorted; unsorted input yields an unspecified but complete interleaving.
    pub fn merge(&mut self, other: &mut Self)
    where
        T: PartialOrd,
    {
        self.merge_by(other, |a, b| a.partial_cmp(b));
    }

    /// Merges `other` into this list using `compare`.
    ///
    /// An element of `other` is placed before an element of `self` only when
    /// `compare(theirs, ours)` is `Some(Ordering::Less)`.
    ///
    /// If `compare` panics, every node stays owned by one of the two lists:
    /// the part not yet merged remains in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two allocators compare unequal.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        assert!(
            self.base.allocator() == other.base.allocator(),
            "merge between lists with unequal allocators"
        );

        let incoming = &mut other.base.head;
        let mut slot: *mut Chain<T> = &raw mut self.base.head;

        // SAFETY: `slot` always points at our head or at the successor slot
        // of one of our nodes; every node reached is owned by `self` or by
        // `other`, both held exclusively here. A node leaves `other` only
        // once it is linked into `self`.
        unsafe {
            while let Some(theirs) = incoming.first() {
                let Some(ours) = (*slot).first() else {
                    *slot = incoming.take();
                    break;
                };

                let before = compare(&(*theirs.as_ptr()).value, &(*ours.as_ptr()).value)
                    == Some(Ordering::Less);

                if before {
                    *incoming = (*theirs.as_ptr()).take_next();
                    (*theirs.as_ptr()).next = (*slot).take();
                    *slot = Chain::from_node(theirs);
                    slot = Node::next_ptr(theirs);
                } else {
                    slot = Node::next_ptr(ours);
                }
            }
        }
    }

    /// Destroys every element equal to `value`. Returns how many were removed.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|item| item == value)
    }

    /// Destroys every element for which `pred` holds, keeping the relative
    /// order of the rest. Returns how many were removed.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut slot: *mut Chain<T> = &raw mut self.base.head;

        // SAFETY: `slot` points at our head or at the successor slot of a
        // surviving node; a matching node is unlinked before it is destroyed.
        unsafe {
            while let Some(node) = (*slot).first() {
                if pred(&(*node.as_ptr()).value) {
                    *slot = (*node.as_ptr()).take_next();
                    self.base.destroy_node(node);
                    removed += 1;
                } else {
                    slot = Node::next_ptr(node);
                }
            }
        }

        removed
    }

    /// Reverses the chain in place. O(n) time, O(1) space.
    pub fn reverse(&mut self) {
        let mut rest = self.base.head.take();
        let mut reversed = Chain::empty();

        while let Some(node) = rest.first() {
            // SAFETY: `rest` owns `node`; it moves to the front of `reversed`.
            unsafe {
                rest = (*node.as_ptr()).take_next();
                (*node.as_ptr()).next = reversed;
            }
            reversed = Chain::from_node(node);
        }

        self.base.head = reversed;
    }

    /// Destroys each element equal to its immediate predecessor.
    ///
    /// Only *adjacent* duplicates collapse: `[1, 1, 2, 1]` becomes
    /// `[1, 2, 1]`. Returns how many were removed.
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|prev, next| prev == next)
    }

    /// Like [`ForwardList::unique`], with `same(kept, candidate)` deciding
    /// equality.
    pub fn unique_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Some(mut kept) = self.base.head.first() else {
            return 0;
        };
        let mut removed = 0;

        // SAFETY: `kept` is always a live node of our chain; a duplicate is
        // unlinked from it before being destroyed.
        unsafe {
            while let Some(candidate) = (*kept.as_ptr()).next.first() {
                if same(&(*kept.as_ptr()).value, &(*candidate.as_ptr()).value) {
                    (*kept.as_ptr()).next = (*candidate.as_ptr()).take_next();
                    self.base.destroy_node(candidate);
                    removed += 1;
                } else {
                    kept = candidate;
                }
            }
        }

        removed
    }

    /// Copies the list by front-inserting a clone of each element.
    ///
    /// **The copy iterates in reverse order** relative to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if a node cannot be allocated; the partial copy
    /// is released.
    pub fn try_clone(&self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut copy = Self::new_in(self.allocator().clone());

        for value in self.iter() {
            copy.push_front(value.clone())?;
        }

        Ok(copy)
    }

    /// Builds a list holding the items of `iter` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if a node cannot be allocated; the partial list
    /// is released.
    pub fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new_in(alloc);
        let mut tail: *mut Chain<T> = &raw mut list.base.head;

        for value in iter {
            let node = list.base.create_node(value)?;

            // SAFETY: `tail` is the empty last slot of `list`'s chain.
            unsafe {
                *tail = Chain::from_node(node);
                tail = Node::next_ptr(node);
            }
        }

        Ok(list)
    }
}

/// Diverts an allocation failure inside an infallible trait method.
fn alloc_failure(err: AllocError) -> ! {
    match err.layout() {
        Some(layout) => alloc::alloc::handle_alloc_error(layout),
        None => panic!("{err}"),
    }
}

impl<T, A: Allocator<T> + Default> Default for ForwardList<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator<T>> Clone for ForwardList<T, A> {
    /// Order-reversing copy; see [`ForwardList::try_clone`].
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| alloc_failure(err))
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for ForwardList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: Allocator<T>> PartialEq for ForwardList<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator<T>> Eq for ForwardList<T, A> {}

impl<T, A: Allocator<T> + Default> FromIterator<T> for ForwardList<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::try_from_iter_in(iter, A::default()).unwrap_or_else(|err| alloc_failure(err))
    }
}

impl<T, A: Allocator<T> + Default, const N: usize> From<[T; N]> for ForwardList<T, A> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, A: Allocator<T>> IntoIterator for ForwardList<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a ForwardList<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut ForwardList<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// SAFETY: the list owns its nodes exclusively, like `Box<T>` chains.
unsafe impl<T: Send, A: Allocator<T> + Send> Send for ForwardList<T, A> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for ForwardList<T, A> {}
