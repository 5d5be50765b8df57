// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tether-alloc.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when requesting memory from an [`Allocator`](crate::Allocator).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The underlying memory system could not satisfy the request.
    #[error("out of memory: failed to allocate {} bytes (align {})", .layout.size(), .layout.align())]
    OutOfMemory {
        /// Layout of the request that failed.
        layout: Layout,
    },

    /// The requested element count does not fit in a valid `Layout`.
    #[error("capacity overflow: {count} elements exceed isize::MAX bytes")]
    CapacityOverflow {
        /// Number of elements requested.
        count: usize,
    },
}

impl AllocError {
    /// Returns the layout of the failed request, if one could be computed.
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Self::OutOfMemory { layout } => Some(*layout),
            Self::CapacityOverflow { .. } => None,
        }
    }
}
