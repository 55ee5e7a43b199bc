// SPDX-License-Identifier: MPL-2.0
//! Bounded storage behind [`GalleryLog`](super::GalleryLog).

use std::collections::VecDeque;

/// Buffer capacity bounds (16 to 4096 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    pub const DEFAULT: usize = 256;
}

/// Capacity of a loader's event log, clamped to valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

/// Event ring: once full, each new event drops the oldest one.
#[derive(Debug, Clone)]
pub(crate) struct EventRing<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> EventRing<T> {
    pub(crate) fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.data.back()
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}
