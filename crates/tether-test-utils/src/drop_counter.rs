// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Shared record of how many [`DropCounter`] values have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    /// Creates a tracker with no drops recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value that bumps this tracker when dropped.
    pub fn track(&self, id: u32) -> DropCounter {
        DropCounter {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Element type that records its own drop in a [`DropTracker`].
///
/// Clones share the tracker, so each clone counts as its own drop.
/// Equality and ordering look at `id` only.
#[derive(Debug, Clone)]
pub struct DropCounter {
    id: u32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Identifier given at creation.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DropCounter {}

impl PartialOrd for DropCounter {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DropCounter {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
