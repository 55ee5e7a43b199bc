// SPDX-License-Identifier: MPL-2.0
//! Lightbox cursor.
//!
//! Tracks which loaded item the lightbox shows. Navigation wraps around in
//! both directions.

/// Open/closed state and current index of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    index: Option<usize>,
}

impl ViewerState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// Current index, `None` while closed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Opens at `index`. Returns the index shown, `None` if out of range.
    pub fn open(&mut self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        self.index = Some(index);
        self.index
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    /// Moves forward, wrapping to the first item after the last.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| (current + 1) % len)
    }

    /// Moves backward, wrapping to the last item before the first.
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| (current + len - 1) % len)
    }

    fn step(&mut self, len: usize, advance: impl FnOnce(usize) -> usize) -> Option<usize> {
        let current = self.index?;
        if len == 0 {
            self.index = None;
            return None;
        }
        // Items may have been reset underneath an open viewer
        let current = current.min(len - 1);
        self.index = Some(advance(current));
        self.index
    }
}

/// Indices of the `count` items after `index`, in circular order.
///
/// Never yields `index` itself and never yields an index twice, so short
/// lists produce fewer than `count` entries.
#[must_use]
pub fn circular_successors(index: usize, len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (1..=count.min(len - 1))
        .map(|k| (index + k) % len)
        .collect()
}
