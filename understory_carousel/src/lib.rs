// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless state for a horizontally sliding carousel.
//!
//! A carousel shows one slide at a time out of a fixed sequence. The track
//! holding every slide is translated by `-index * width` so that the current
//! slide fills the root. Users move between slides with previous/next
//! controls, arrow keys, indicator markers, or by dragging the track.
//!
//! This crate owns the interaction logic only:
//!
//! - [`state`]: the clamped slide index and the offset arithmetic.
//! - [`drag`]: the pointer drag session and the swipe commit threshold.
//! - [`indicator`]: indicator labels and "current" flags.
//! - [`input`]: a host-independent event vocabulary.
//! - [`config`]: selectors describing the markup a host binds to.
//! - [`CarouselView`]: the seam a host implements to apply transforms,
//!   transitions, indicator state and pointer capture.
//! - [`Carousel`]: the controller tying these together.
//!
//! It does not touch any DOM or rendering backend. `understory_carousel_web`
//! implements [`CarouselView`] over `web-sys` elements and wires browser events.
//!
//! ## Example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselView, CommitThreshold};
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct Track {
//!     offset: f64,
//!     current: Vec<bool>,
//! }
//!
//! impl CarouselView for Track {
//!     fn width(&self) -> f64 { 300.0 }
//!     fn set_track_offset(&mut self, offset: f64) { self.offset = offset; }
//!     fn set_transition_enabled(&mut self, _enabled: bool) {}
//!     fn set_indicator_current(&mut self, index: usize, current: bool) {
//!         if self.current.len() <= index {
//!             self.current.resize(index + 1, false);
//!         }
//!         self.current[index] = current;
//!     }
//! }
//!
//! let mut carousel = Carousel::new(Track::default(), 5, CommitThreshold::default());
//! carousel.next();
//! carousel.next();
//! assert_eq!(carousel.view().offset, -600.0);
//!
//! // A short drag snaps back instead of changing slides.
//! carousel.pointer_down(1, Point::new(150.0, 10.0));
//! carousel.pointer_move(1, Point::new(120.0, 10.0));
//! assert_eq!(carousel.view().offset, -630.0);
//! carousel.pointer_up(1, Point::new(120.0, 10.0));
//! assert_eq!(carousel.index(), 2);
//! assert_eq!(carousel.view().offset, -600.0);
//! assert_eq!(carousel.view().current, [false, false, true, false, false]);
//! ```
//!
//! ## Empty carousels
//!
//! A carousel with no slides is valid: the index stays at `0`, the offset is
//! always `0`, navigation does nothing, and no indicators are touched.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`CarouselConfig`] and
//!   [`CommitThreshold`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod carousel;
pub mod config;
pub mod drag;
pub mod indicator;
pub mod input;
pub mod state;
mod view;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use drag::{CommitThreshold, DragOutcome, DragSession, PointerId};
pub use input::{CarouselInput, NavKey};
pub use state::CarouselState;
pub use view::CarouselView;
