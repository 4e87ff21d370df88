// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering seam between [`Carousel`](crate::Carousel) and its host.

use crate::drag::PointerId;

/// Host surface a [`Carousel`](crate::Carousel) drives.
///
/// Implementations own the actual elements (root, track, indicator markers)
/// and apply the visual effects. A DOM implementation maps these onto
/// `clientWidth`, `style.transform`, `style.transition`, `aria-current` and
/// pointer capture.
pub trait CarouselView {
    /// Current rendered width of the carousel root, in pixels.
    fn width(&self) -> f64;

    /// Translates the track horizontally by `offset` pixels.
    fn set_track_offset(&mut self, offset: f64);

    /// Enables or suspends the track's transition animation.
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Marks indicator `index` as current or clears it.
    ///
    /// Hosts without indicators ignore this.
    fn set_indicator_current(&mut self, index: usize, current: bool);

    /// Routes further events for `pointer` to the carousel root.
    fn capture_pointer(&mut self, pointer: PointerId) {
        let _ = pointer;
    }

    /// Undoes [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, pointer: PointerId) {
        let _ = pointer;
    }
}
