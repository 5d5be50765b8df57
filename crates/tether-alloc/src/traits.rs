// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::{self, NonNull};

use crate::error::AllocError;

/// Memory capability for a single element type.
///
/// An allocator hands out raw, uninitialized storage and, separately, builds
/// and tears down values inside storage it (or an equal allocator) handed
/// out. Keeping the two steps apart is what lets a container swap the memory
/// source without touching its own logic.
///
/// # Rebinding
///
/// Containers rarely allocate the element type itself: a list allocates
/// nodes. [`Allocator::rebind`] produces the same allocator for another
/// element type, so a list parameterized by `A: Allocator<T>` can obtain an
/// `A::Rebind<Node<T>>` for node memory while constructing values through
/// `A` itself.
///
/// # Equality
///
/// Two allocators compare equal iff storage obtained from one can be released
/// through the other. Containers that move storage between instances
/// (merge, splice, swap) rely on this.
///
/// # Example
///
/// ```rust
/// use tether_alloc::{AllocError, Allocator, StdAllocator};
///
/// fn example() -> Result<(), AllocError> {
///     let alloc = StdAllocator::<u64>::new();
///     let ptr = alloc.allocate(1)?;
///
///     unsafe {
///         alloc.construct(ptr, 42);
///         assert_eq!(*ptr.as_ptr(), 42);
///         alloc.destroy(ptr);
///         alloc.deallocate(ptr, 1);
///     }
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub trait Allocator<T>: Clone + PartialEq {
    /// The same allocator for element type `U`.
    type Rebind<U>: Allocator<U>;

    /// Returns an allocator for `U` sharing this allocator's memory source.
    fn rebind<U>(&self) -> Self::Rebind<U>;

    /// Allocates uninitialized storage for `n` contiguous elements.
    ///
    /// Zero-sized requests return a dangling, well-aligned pointer.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the memory system cannot satisfy
    /// the request and [`AllocError::CapacityOverflow`] if `n` elements do not
    /// fit a valid layout.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases storage previously returned by [`Allocator::allocate`].
    ///
    /// # Safety
    ///
    /// - `ptr` must come from `allocate(n)` on this allocator or one equal to it.
    /// - `n` must be the count passed to that `allocate` call.
    /// - Any value in the storage must already have been destroyed or moved out.
    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize);

    /// Moves `value` into uninitialized storage.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes and properly aligned. Whatever was in
    /// the storage is overwritten without being dropped.
    unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: the caller guarantees `ptr` is valid for writes.
        unsafe { ptr.as_ptr().write(value) };
    }

    /// Builds a value in place from `f`.
    ///
    /// This is the multi-argument form of [`Allocator::construct`]: the
    /// closure captures the constructor arguments.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::construct`].
    unsafe fn construct_with<F>(&self, ptr: NonNull<T>, f: F)
    where
        F: FnOnce() -> T,
    {
        // SAFETY: forwarded from the caller.
        unsafe { self.construct(ptr, f()) };
    }

    /// Runs the value's drop glue without releasing storage.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live, initialized `T` that is not used afterwards.
    unsafe fn destroy(&self, ptr: NonNull<T>) {
        // SAFETY: the caller guarantees `ptr` holds a live value.
        unsafe { ptr::drop_in_place(ptr.as_ptr()) };
    }
}
