// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::std_allocator::{StdAllocator, array_layout};
use crate::traits::Allocator;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`StdAllocator`]).
    #[default]
    None,
    /// Every `allocate` fails.
    FailAlways,
    /// Fail `allocate` on the Nth call (1-indexed: 1 = first call fails).
    ///
    /// Calls are counted across every clone and rebind.
    FailAtNthAllocate(usize),
}

#[derive(Default)]
struct MockState {
    behaviour: Cell<MockAllocatorBehaviour>,
    allocate_count: Cell<usize>,
    deallocate_count: Cell<usize>,
    construct_count: Cell<usize>,
    destroy_count: Cell<usize>,
    live_blocks: Cell<usize>,
}

fn bump(cell: &Cell<usize>) -> usize {
    let next = cell.get() + 1;
    cell.set(next);
    next
}

/// Mock allocator for testing.
///
/// Wraps [`StdAllocator`] and records every call. Clones and rebinds share a
/// single record, so a container that rebinds internally is still fully
/// accounted for through the handle the test holds. Failures can be injected
/// via [`MockAllocatorBehaviour`].
///
/// # Example
///
/// ```rust
/// use tether_alloc::Allocator;
/// use tether_alloc::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
///
/// let alloc = MockAllocator::<u32>::new(MockAllocatorBehaviour::FailAtNthAllocate(2));
/// let nodes: MockAllocator<[u32; 4]> = alloc.rebind();
///
/// let ptr = alloc.allocate(1).expect("Failed to allocate(..)");
/// assert!(nodes.allocate(1).is_err());
///
/// unsafe { alloc.deallocate(ptr, 1) };
/// assert_eq!(nodes.allocate_count(), 2);
/// assert_eq!(nodes.live_blocks(), 0);
/// ```
pub struct MockAllocator<T> {
    inner: StdAllocator<T>,
    state: Rc<MockState>,
}

impl<T> MockAllocator<T> {
    /// Creates a new mock allocator with the specified behavior.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        let state = MockState::default();
        state.behaviour.set(behaviour);

        Self {
            inner: StdAllocator::new(),
            state: Rc::new(state),
        }
    }

    /// Changes the mock behavior at runtime, for every clone and rebind.
    pub fn change_behaviour(&self, behaviour: MockAllocatorBehaviour) {
        self.state.behaviour.set(behaviour);
    }

    /// Resets all call counters. Live blocks are not reset.
    pub fn reset_count(&self) {
        self.state.allocate_count.set(0);
        self.state.deallocate_count.set(0);
        self.state.construct_count.set(0);
        self.state.destroy_count.set(0);
    }

    /// Number of `allocate` calls, failed ones included.
    pub fn allocate_count(&self) -> usize {
        self.state.allocate_count.get()
    }

    /// Number of `deallocate` calls.
    pub fn deallocate_count(&self) -> usize {
        self.state.deallocate_count.get()
    }

    /// Number of values constructed.
    pub fn construct_count(&self) -> usize {
        self.state.construct_count.get()
    }

    /// Number of values destroyed.
    pub fn destroy_count(&self) -> usize {
        self.state.destroy_count.get()
    }

    /// Blocks allocated and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.state.live_blocks.get()
    }
}

impl<T> Default for MockAllocator<T> {
    fn default() -> Self {
        Self::new(MockAllocatorBehaviour::None)
    }
}

impl<T> Clone for MockAllocator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for MockAllocator<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Eq for MockAllocator<T> {}

impl<T> fmt::Debug for MockAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockAllocator")
            .field("behaviour", &self.state.behaviour.get())
            .field("allocate_count", &self.allocate_count())
            .field("deallocate_count", &self.deallocate_count())
            .field("live_blocks", &self.live_blocks())
            .finish()
    }
}

impl<T> Allocator<T> for MockAllocator<T> {
    type Rebind<U> = MockAllocator<U>;

    fn rebind<U>(&self) -> MockAllocator<U> {
        MockAllocator {
            inner: self.inner.rebind(),
            state: Rc::clone(&self.state),
        }
    }

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let call = bump(&self.state.allocate_count);

        let fail = match self.state.behaviour.get() {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthAllocate(nth) => call == nth,
        };

        if fail {
            let layout = array_layout::<T>(n)?;
            return Err(AllocError::OutOfMemory { layout });
        }

        let ptr = self.inner.allocate(n)?;
        bump(&self.state.live_blocks);

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        bump(&self.state.deallocate_count);
        self.state
            .live_blocks
            .set(self.state.live_blocks.get().saturating_sub(1));

        // SAFETY: forwarded from the caller.
        unsafe { self.inner.deallocate(ptr, n) };
    }

    unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        bump(&self.state.construct_count);

        // SAFETY: forwarded from the caller.
        unsafe { self.inner.construct(ptr, value) };
    }

    unsafe fn destroy(&self, ptr: NonNull<T>) {
        bump(&self.state.destroy_count);

        // SAFETY: forwarded from the caller.
        unsafe { self.inner.destroy(ptr) };
    }
}
