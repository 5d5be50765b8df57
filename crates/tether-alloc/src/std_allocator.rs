// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! StdAllocator - global heap, no pooling.

use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// Computes the layout of `n` contiguous `T`.
///
/// # Errors
///
/// Returns [`AllocError::CapacityOverflow`] if the total size exceeds `isize::MAX`.
pub fn array_layout<T>(n: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow { count: n })
}

/// Stateless allocator backed by the global heap.
///
/// Every call maps directly onto `alloc::alloc::{alloc, dealloc}`; nothing is
/// cached between calls. All instances compare equal, for every element type.
///
/// # Example
///
/// ```rust
/// use tether_alloc::{Allocator, StdAllocator};
///
/// let bytes = StdAllocator::<u8>::new();
/// let words: StdAllocator<u64> = bytes.rebind();
/// let also_words = StdAllocator::<u64>::from(&bytes);
///
/// assert_eq!(words, also_words);
/// ```
pub struct StdAllocator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> StdAllocator<T> {
    /// Creates a new `StdAllocator`.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for StdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StdAllocator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StdAllocator<T> {}

impl<T> PartialEq for StdAllocator<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for StdAllocator<T> {}

impl<T> fmt::Debug for StdAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdAllocator").finish()
    }
}

impl<T, U> From<&StdAllocator<U>> for StdAllocator<T> {
    fn from(_other: &StdAllocator<U>) -> Self {
        Self::new()
    }
}

impl<T> Allocator<T> for StdAllocator<T> {
    type Rebind<U> = StdAllocator<U>;

    fn rebind<U>(&self) -> StdAllocator<U> {
        StdAllocator::from(self)
    }

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = array_layout::<T>(n)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(raw.cast::<T>()).ok_or_else(|| {
            log::debug!(
                "allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            );
            AllocError::OutOfMemory { layout }
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // `allocate(n)` succeeded for this `n`, so the layout is valid.
        let Ok(layout) = array_layout::<T>(n) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY: the caller guarantees `ptr` came from `allocate(n)`.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}
