// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tether_alloc
//!
//! Pluggable memory capability for the Tether containers.
//!
//! An [`Allocator<T>`] does two separate jobs:
//!
//! - **Raw memory**: [`Allocator::allocate`] / [`Allocator::deallocate`] hand out
//!   and release uninitialized storage for `n` elements.
//! - **Value lifecycle**: [`Allocator::construct`] / [`Allocator::destroy`] build
//!   and tear down a value inside storage without touching the memory itself.
//!
//! Containers compose the two: they ask for raw node memory, then construct
//! the element in place. Replacing the allocator (arena, pool, accounting
//! mock) changes the memory source and nothing else.
//!
//! ## Core Types
//!
//! - [`Allocator`]: the capability trait, with [`Allocator::rebind`] to move
//!   between element types
//! - [`StdAllocator`]: stateless allocator over the global heap
//! - [`AllocError`]: resource exhaustion, propagated to the caller
//!
//! ## Example
//!
//! ```rust
//! use tether_alloc::{AllocError, Allocator, StdAllocator};
//!
//! fn example() -> Result<(), AllocError> {
//!     let alloc = StdAllocator::<String>::new();
//!     let slots = alloc.allocate(2)?;
//!
//!     unsafe {
//!         let second = slots.add(1);
//!         alloc.construct(slots, String::from("first"));
//!         alloc.construct_with(second, || "second".repeat(2));
//!
//!         assert_eq!(*second.as_ptr(), "secondsecond");
//!
//!         alloc.destroy(slots);
//!         alloc.destroy(second);
//!         alloc.deallocate(slots, 2);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Test Utilities
//!
//! Enable the `test-utils` feature for [`MockAllocator`](support::test_utils::MockAllocator),
//! which counts every call and can inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! tether-alloc = { version = "*", features = ["test-utils"] }
//! ```
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

mod error;
mod std_allocator;
mod traits;

pub mod support;

pub use error::AllocError;
pub use std_allocator::{StdAllocator, array_layout};
pub use traits::Allocator;
