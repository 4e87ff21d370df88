// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide index bookkeeping.

/// Current slide position within a fixed number of slides.
///
/// The index is always clamped: `index < total` when there is at least one
/// slide, and `index == 0` when there are none. Navigation never wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CarouselState {
    index: usize,
    total: usize,
}

impl CarouselState {
    /// Creates a state for `total` slides, positioned on the first one.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    /// Returns the current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the index of the last slide, or `0` when empty.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Steps back one slide, stopping at the first.
    ///
    /// Returns `true` if the index changed.
    pub fn previous(&mut self) -> bool {
        self.set_index(self.index.saturating_sub(1))
    }

    /// Steps forward one slide, stopping at the last.
    ///
    /// Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        self.set_index(self.index.saturating_add(1))
    }

    /// Moves directly to `index`, clamped into `0..total`.
    ///
    /// Returns `true` if the index changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.set_index(index)
    }

    /// Resting horizontal track offset for the current index, in pixels.
    ///
    /// Each slide occupies exactly `width`, so slide `i` rests at `-i * width`.
    #[must_use]
    pub fn offset(&self, width: f64) -> f64 {
        self.drag_offset(width, 0.0)
    }

    /// Track offset while a drag of `delta` pixels is in progress.
    #[must_use]
    pub fn drag_offset(&self, width: f64, delta: f64) -> f64 {
        // Slide counts stay far below 2^53, so the conversion is exact.
        let index = self.index as f64;
        -index * width + delta
    }

    fn set_index(&mut self, index: usize) -> bool {
        let clamped = index.min(self.last_index());
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }
}
