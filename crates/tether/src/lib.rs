// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A forward list whose every node goes through your allocator.</em></p>
//!
//! ---
//!
//! Tether is a singly linked list built on a small allocator capability.
//! Every byte of node memory and every value construction and destruction
//! is routed through an [`Allocator`](alloc::Allocator), so the container
//! can be audited, fault-injected or pointed at a custom pool.
//!
//! # Features
//!
//! - **Explicit ownership**: each node owns its successor; moving a chain
//!   leaves the source empty, never shared
//! - **Fallible allocation**: every inserting operation returns
//!   `Result<_, AllocError>` and leaves the list consistent on failure
//! - **Zero-copy transfers**: `splice_after`, `merge`, `reverse` and
//!   `take` rewire links without touching values
//! - **Rebinding allocators**: one element allocator, node storage obtained
//!   via `Allocator::rebind`
//! - **`no_std` compatible**: only `alloc` is required
//!
//! # Quick Start
//!
//! ```rust
//! use tether::collections::ForwardList;
//! use tether::alloc::AllocError;
//!
//! fn main() -> Result<(), AllocError> {
//!     let mut list = ForwardList::new();
//!     for value in [3u32, 1, 2] {
//!         list.push_front(value)?;
//!     }
//!     assert!(list.iter().eq(&[2, 1, 3]));
//!
//!     let mut other: ForwardList<u32> = ForwardList::from([0, 4]);
//!     list.remove(&2);
//!     list.merge(&mut other);
//!     assert!(list.iter().eq(&[0, 1, 3, 4]));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Contracts worth knowing
//!
//! - `try_clone` / `Clone` build the copy by front-insertion: **the copy
//!   is reversed**.
//! - `resize` truncates and pads at the **front**.
//! - `unique` only collapses *adjacent* equal elements.
//! - `len` is O(n): the list does not store its length.
//!
//! # Testing
//!
//! With the `test-utils` feature, a counting allocator with failure
//! injection is available:
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use tether::collections::ForwardList;
//! use tether::support::test_utils::alloc::{MockAllocator, MockAllocatorBehaviour};
//!
//! let alloc = MockAllocator::<u32>::new(MockAllocatorBehaviour::FailAtNthAllocate(2));
//! let mut list = ForwardList::new_in(alloc.clone());
//!
//! assert!(list.push_front(1).is_ok());  // 1st allocation succeeds
//! assert!(list.push_front(2).is_err()); // 2nd fails, list unchanged
//! assert_eq!(alloc.live_blocks(), 1);
//! # }
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


pub mod collections;
pub mod support;

pub use tether_alloc as alloc;
pub use tether_list as list;
