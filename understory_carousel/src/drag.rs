// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gesture tracking: horizontal drag deltas and the commit decision.
//!
//! ## Usage
//!
//! 1) Begin a session on pointer down with [`DragSession::start`].
//! 2) On each pointer move, call [`DragSession::update`] to get the horizontal
//!    offset from the start position.
//! 3) On pointer up, call [`DragSession::finish`] to end the session and get
//!    the final delta, then ask [`CommitThreshold::outcome`] whether it counts
//!    as a slide change.
//! 4) If the pointer is lost, [`DragSession::cancel`] ends the session without
//!    a delta.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::drag::{CommitThreshold, DragOutcome, DragSession};
//!
//! let mut drag = DragSession::default();
//! drag.start(1, Point::new(200.0, 40.0));
//! assert_eq!(drag.update(1, Point::new(150.0, 44.0)), Some(-50.0));
//!
//! let delta = drag.finish(1, Point::new(100.0, 44.0)).unwrap();
//! assert_eq!(delta, -100.0);
//! assert!(!drag.is_dragging());
//!
//! // 18% of 300px is 54px, under the 80px cap.
//! let threshold = CommitThreshold::default();
//! assert_eq!(threshold.outcome(delta, 300.0), DragOutcome::Next);
//! assert_eq!(threshold.outcome(-50.0, 300.0), DragOutcome::SnapBack);
//! ```

use kurbo::Point;

/// Identifier of the pointer driving a drag, as reported by the host.
pub type PointerId = i32;

/// Tracks a single pointer drag over the track.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer that started the session.
    pub pointer: Option<PointerId>,
    /// Start position of the drag.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragSession {
    /// Starts a new session for `pointer` at `pos`, replacing any previous one.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move, returning the horizontal offset from the start.
    ///
    /// Returns `None` when no session is active or `pointer` is not the one
    /// that started it.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<f64> {
        let start = self.start_for(pointer)?;
        self.last_pos = Some(pos);
        Some(pos.x - start.x)
    }

    /// Ends the session, returning the final horizontal offset from the start.
    ///
    /// Returns `None` (and leaves the session untouched) when no session is
    /// active or `pointer` did not start it.
    pub fn finish(&mut self, pointer: PointerId, pos: Point) -> Option<f64> {
        let start = self.start_for(pointer)?;
        self.cancel();
        Some(pos.x - start.x)
    }

    /// Ends the session without reporting a delta.
    ///
    /// Returns the pointer that owned the session, if any.
    pub fn cancel(&mut self) -> Option<PointerId> {
        let pointer = self.pointer.take();
        self.start_pos = None;
        self.last_pos = None;
        pointer
    }

    /// Returns `true` if a session is active and `pointer` started it.
    pub fn is_driven_by(&self, pointer: PointerId) -> bool {
        self.start_for(pointer).is_some()
    }

    /// Returns `true` while a session is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Horizontal offset of the last recorded position from the start.
    pub fn current_delta(&self) -> Option<f64> {
        Some(self.last_pos?.x - self.start_pos?.x)
    }

    fn start_for(&self, pointer: PointerId) -> Option<Point> {
        if self.pointer == Some(pointer) {
            self.start_pos
        } else {
            None
        }
    }
}

/// What a released drag does to the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left past the threshold: advance one slide.
    Next,
    /// Dragged right past the threshold: go back one slide.
    Previous,
    /// Below the threshold: return to the resting position.
    SnapBack,
}

/// Minimum drag distance that counts as an intentional slide change.
///
/// The effective threshold is `min(max_px, width_fraction * width)`, so
/// narrow carousels need proportionally shorter swipes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommitThreshold {
    /// Upper bound on the threshold, in pixels.
    pub max_px: f64,
    /// Fraction of the carousel width used below the cap.
    pub width_fraction: f64,
}

impl Default for CommitThreshold {
    fn default() -> Self {
        Self {
            max_px: 80.0,
            width_fraction: 0.18,
        }
    }
}

impl CommitThreshold {
    /// Threshold in pixels for a carousel `width` pixels wide.
    #[must_use]
    pub fn resolve(&self, width: f64) -> f64 {
        self.max_px.min(width * self.width_fraction)
    }

    /// Classifies a released drag of `delta` pixels.
    ///
    /// Only a distance strictly greater than the threshold commits.
    #[must_use]
    pub fn outcome(&self, delta: f64, width: f64) -> DragOutcome {
        let distance = if delta < 0.0 { -delta } else { delta };
        if distance > self.resolve(width) {
            if delta < 0.0 {
                DragOutcome::Next
            } else {
                DragOutcome::Previous
            }
        } else {
            DragOutcome::SnapBack
        }
    }
}
