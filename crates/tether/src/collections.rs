// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Collections module that re-exports the list types from tether-list

pub use tether_list::{CursorMut, ForwardList, IntoIter, Iter, IterMut};
