// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tether_list
//!
//! Singly linked forward list with explicit node ownership over a pluggable
//! [`Allocator`].
//!
//! ## Layers
//!
//! - **Node**: one value plus one successor link. Owns nothing; belongs to
//!   whichever list's chain reaches it.
//! - **List base**: owns the head chain and the allocator. Creates and
//!   destroys nodes as a unit (raw node memory + value construction) and is
//!   the only place a whole chain is released.
//! - **[`ForwardList`]**: element-level operations (push/pop, merge, splice,
//!   reverse, unique, remove) and copy/move semantics.
//! - **Handles**: [`Iter`] / [`IterMut`] traverse without owning;
//!   [`CursorMut`] edits after a position.
//!
//! ## Ownership transfer
//!
//! `merge`, `splice_after`, `swap` and `take` move nodes between lists by
//! relinking only: the source list is left empty and no value is copied or
//! reallocated. Transfers require the two lists' allocators to compare equal.
//!
//! ## Example
//!
//! ```rust
//! use tether_list::{AllocError, ForwardList};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut odd: ForwardList<u32> = ForwardList::from([1, 3, 5]);
//!     let mut even: ForwardList<u32> = ForwardList::from([2, 3, 4]);
//!
//!     odd.merge(&mut even);
//!     assert!(odd.iter().eq(&[1, 2, 3, 3, 4, 5]));
//!     assert!(even.is_empty());
//!
//!     assert_eq!(odd.unique(), 1);
//!     odd.reverse();
//!     assert!(odd.iter().eq(&[5, 4, 3, 2, 1]));
//!
//!     odd.push_front(6)?;
//!     assert_eq!(odd.front(), Some(&6));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Allocation failures
//!
//! Every allocating operation returns [`AllocError`] instead of aborting. A
//! failed insertion leaves the list as it was: the new node is either fully
//! linked or never linked.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod base;
mod cursor;
mod iter;
mod list;
mod node;

pub use cursor::CursorMut;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;

pub use tether_alloc::{AllocError, Allocator, StdAllocator};
