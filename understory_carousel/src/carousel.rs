// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::drag::{CommitThreshold, DragOutcome, DragSession, PointerId};
use crate::indicator;
use crate::input::{CarouselInput, NavKey};
use crate::state::CarouselState;
use crate::view::CarouselView;

/// One carousel instance driving a host view.
///
/// Every navigation re-renders: the track offset is recomputed from the view's
/// current width and the indicators are refreshed, even when the index did not
/// change (for example "previous" on the first slide).
#[derive(Debug)]
pub struct Carousel<V> {
    view: V,
    state: CarouselState,
    drag: DragSession,
    threshold: CommitThreshold,
}

impl<V: CarouselView> Carousel<V> {
    /// Creates a carousel over `total` slides and renders the first one.
    pub fn new(view: V, total: usize, threshold: CommitThreshold) -> Self {
        let mut this = Self {
            view,
            state: CarouselState::new(total),
            drag: DragSession::default(),
            threshold,
        };
        this.render();
        this
    }

    /// Returns the index state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Returns the current slide index.
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Returns the number of slides.
    pub fn total(&self) -> usize {
        self.state.total()
    }

    /// Returns the configured drag commit threshold.
    pub fn threshold(&self) -> CommitThreshold {
        self.threshold
    }

    /// Returns `true` while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns the host view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the host view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the carousel, returning the host view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Dispatches one input event.
    pub fn handle(&mut self, input: CarouselInput) {
        match input {
            CarouselInput::Resize => self.resize(),
            CarouselInput::Previous => self.previous(),
            CarouselInput::Next => self.next(),
            CarouselInput::JumpTo(index) => self.jump_to(index),
            CarouselInput::Key(key) => self.key(key),
            CarouselInput::PointerDown(pointer, pos) => self.pointer_down(pointer, pos),
            CarouselInput::PointerMove(pointer, pos) => {
                self.pointer_move(pointer, pos);
            }
            CarouselInput::PointerUp(pointer, pos) => {
                self.pointer_up(pointer, pos);
            }
            CarouselInput::PointerCancel(pointer) => {
                self.pointer_cancel(pointer);
            }
            CarouselInput::Blur => {
                self.cancel_drag();
            }
        }
    }

    /// Goes back one slide, stopping at the first.
    pub fn previous(&mut self) {
        self.state.previous();
        self.navigated();
    }

    /// Advances one slide, stopping at the last.
    pub fn next(&mut self) {
        self.state.next();
        self.navigated();
    }

    /// Moves directly to slide `index` (clamped into range).
    pub fn jump_to(&mut self, index: usize) {
        self.state.jump_to(index);
        self.navigated();
    }

    /// Handles a navigation key pressed while the root has focus.
    pub fn key(&mut self, key: NavKey) {
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
        }
    }

    /// Re-applies the resting offset after the viewport changed size.
    pub fn resize(&mut self) {
        self.update_offset();
    }

    /// Begins a drag session for `pointer` at `pos`.
    ///
    /// Suspends the track transition so the track follows the pointer
    /// directly, and captures the pointer on the root.
    pub fn pointer_down(&mut self, pointer: PointerId, pos: Point) {
        if let Some(previous) = self.drag.cancel() {
            self.view.release_pointer(previous);
        }
        self.drag.start(pointer, pos);
        self.view.set_transition_enabled(false);
        self.view.capture_pointer(pointer);
    }

    /// Moves the track along with an active drag.
    ///
    /// Returns `false` when no drag by `pointer` is in progress.
    pub fn pointer_move(&mut self, pointer: PointerId, pos: Point) -> bool {
        let Some(delta) = self.drag.update(pointer, pos) else {
            return false;
        };
        let offset = self.state.drag_offset(self.view.width(), delta);
        log::trace!("carousel drag delta {delta}, offset {offset}");
        self.view.set_track_offset(offset);
        true
    }

    /// Ends an active drag, committing a slide change if it went far enough.
    ///
    /// Returns `None` when no drag by `pointer` is in progress.
    pub fn pointer_up(&mut self, pointer: PointerId, pos: Point) -> Option<DragOutcome> {
        let delta = self.drag.finish(pointer, pos)?;
        self.view.set_transition_enabled(true);
        self.view.release_pointer(pointer);

        let outcome = self.threshold.outcome(delta, self.view.width());
        log::debug!("carousel drag released at delta {delta}: {outcome:?}");
        match outcome {
            DragOutcome::Next => self.next(),
            DragOutcome::Previous => self.previous(),
            DragOutcome::SnapBack => self.update_offset(),
        }
        Some(outcome)
    }

    /// Abandons the active drag if `pointer` is the one driving it.
    ///
    /// Cancels for any other pointer are ignored. Returns `true` if a drag
    /// was abandoned.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        if !self.drag.is_driven_by(pointer) {
            return false;
        }
        self.cancel_drag()
    }

    /// Abandons an active drag without committing it, whichever pointer
    /// drives it.
    ///
    /// Used when the window loses focus, so a lost pointer-up cannot leave
    /// the carousel stuck mid-drag. Returns `true` if a drag was in progress.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(pointer) = self.drag.cancel() else {
            return false;
        };
        log::debug!("carousel drag cancelled");
        self.view.set_transition_enabled(true);
        self.view.release_pointer(pointer);
        self.update_offset();
        true
    }

    /// Applies the offset and indicator state for the current index.
    pub fn render(&mut self) {
        self.update_offset();
        self.refresh_indicators();
    }

    /// Translates the track to the current index's resting position.
    pub fn update_offset(&mut self) {
        let offset = self.state.offset(self.view.width());
        self.view.set_track_offset(offset);
    }

    /// Marks the current index's indicator and clears the rest.
    pub fn refresh_indicators(&mut self) {
        for (i, current) in indicator::current_flags(self.state.total(), self.state.index()) {
            self.view.set_indicator_current(i, current);
        }
    }

    fn navigated(&mut self) {
        log::debug!(
            "carousel at slide {} of {}",
            self.state.index() + 1,
            self.state.total()
        );
        self.render();
    }
}
