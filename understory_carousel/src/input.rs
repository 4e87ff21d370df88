// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent input vocabulary for a carousel.
//!
//! Hosts translate their native events into [`CarouselInput`] and feed them to
//! [`Carousel::handle`](crate::Carousel::handle). Calling the individual
//! `Carousel` methods directly is equivalent.

use kurbo::Point;

use crate::drag::PointerId;

/// Keys a focused carousel responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// `ArrowLeft`: previous slide.
    Left,
    /// `ArrowRight`: next slide.
    Right,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value to a navigation key.
    ///
    /// ```
    /// use understory_carousel::input::NavKey;
    ///
    /// assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Left));
    /// assert_eq!(NavKey::from_key("Enter"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// One discrete event delivered to a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// The viewport changed size; re-render at the new width.
    Resize,
    /// The previous control was activated.
    Previous,
    /// The next control was activated.
    Next,
    /// An indicator was activated.
    JumpTo(usize),
    /// A navigation key was pressed while the root had focus.
    Key(NavKey),
    /// A pointer went down over the track.
    PointerDown(PointerId, Point),
    /// A pointer moved.
    PointerMove(PointerId, Point),
    /// A pointer was released.
    PointerUp(PointerId, Point),
    /// The host cancelled a pointer.
    PointerCancel(PointerId),
    /// Focus left the window; any drag in progress is abandoned.
    Blur,
}
