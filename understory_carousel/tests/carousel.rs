// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_carousel` controller.
//!
//! These drive `Carousel` against a recording view and check the observable
//! effects: the track offset, the transition toggle, indicator state, and
//! pointer capture.

use kurbo::Point;
use understory_carousel::{
    Carousel, CarouselInput, CarouselView, CommitThreshold, DragOutcome, NavKey, PointerId,
};

#[derive(Debug)]
struct RecordingView {
    width: f64,
    offset: Option<f64>,
    transition: bool,
    current: Vec<bool>,
    captured: Option<PointerId>,
    offset_writes: usize,
}

impl RecordingView {
    fn new(width: f64, indicators: usize) -> Self {
        Self {
            width,
            offset: None,
            transition: true,
            current: vec![false; indicators],
            captured: None,
            offset_writes: 0,
        }
    }

    fn current_indicators(&self) -> Vec<usize> {
        self.current
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }
}

impl CarouselView for RecordingView {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_track_offset(&mut self, offset: f64) {
        self.offset = Some(offset);
        self.offset_writes += 1;
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        self.current[index] = current;
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        assert_eq!(self.captured, Some(pointer), "released a pointer that was not captured");
        self.captured = None;
    }
}

fn carousel(total: usize, width: f64) -> Carousel<RecordingView> {
    Carousel::new(
        RecordingView::new(width, total),
        total,
        CommitThreshold::default(),
    )
}

fn at(x: f64) -> Point {
    Point::new(x, 100.0)
}

fn drag(c: &mut Carousel<RecordingView>, from: f64, to: f64) -> Option<DragOutcome> {
    c.pointer_down(1, at(from));
    c.pointer_move(1, at(to));
    c.pointer_up(1, at(to))
}

#[test]
fn construction_renders_first_slide() {
    let c = carousel(3, 400.0);
    assert_eq!(c.index(), 0);
    assert_eq!(c.view().offset, Some(0.0));
    assert_eq!(c.view().current_indicators(), [0]);
    assert!(!c.is_dragging());
}

#[test]
fn offset_is_negative_index_times_width() {
    let mut c = carousel(6, 320.0);
    for i in 0..6 {
        c.jump_to(i);
        assert_eq!(c.view().offset, Some(-(i as f64) * 320.0));
    }
}

#[test]
fn bounds_are_idempotent_but_still_render() {
    let mut c = carousel(3, 100.0);
    let writes = c.view().offset_writes;
    c.previous();
    assert_eq!(c.index(), 0);
    assert_eq!(c.view().offset_writes, writes + 1);

    c.jump_to(2);
    c.next();
    c.next();
    assert_eq!(c.index(), 2);
    assert_eq!(c.view().offset, Some(-200.0));
}

#[test]
fn next_then_previous_composes_under_clamping() {
    let total = 4;
    for n in 0..7 {
        for m in 0..7 {
            let mut c = carousel(total, 10.0);
            for _ in 0..n {
                c.next();
            }
            for _ in 0..m {
                c.previous();
            }
            let expected = n.min(total - 1).saturating_sub(m);
            assert_eq!(c.index(), expected, "n = {n}, m = {m}");
        }
    }
}

#[test]
fn exactly_one_indicator_is_current() {
    let mut c = carousel(5, 300.0);
    let moves = [
        CarouselInput::Next,
        CarouselInput::JumpTo(4),
        CarouselInput::Previous,
        CarouselInput::Key(NavKey::Left),
        CarouselInput::JumpTo(0),
        CarouselInput::Key(NavKey::Right),
    ];
    for input in moves {
        c.handle(input);
        assert_eq!(c.view().current_indicators(), [c.index()], "after {input:?}");
    }
}

#[test]
fn arrow_keys_navigate() {
    let mut c = carousel(3, 100.0);
    c.key(NavKey::Right);
    c.key(NavKey::Right);
    assert_eq!(c.index(), 2);
    c.key(NavKey::Left);
    assert_eq!(c.index(), 1);
}

#[test]
fn resize_reapplies_offset_with_new_width() {
    let mut c = carousel(3, 300.0);
    c.next();
    c.view_mut().width = 500.0;
    c.handle(CarouselInput::Resize);
    assert_eq!(c.view().offset, Some(-500.0));
    assert_eq!(c.index(), 1);
}

#[test]
fn drag_follows_pointer_without_transition() {
    let mut c = carousel(3, 300.0);
    c.next();

    c.pointer_down(9, at(200.0));
    assert!(c.is_dragging());
    assert!(!c.view().transition);
    assert_eq!(c.view().captured, Some(9));

    assert!(c.pointer_move(9, at(230.0)));
    assert_eq!(c.view().offset, Some(-270.0));
    assert!(c.pointer_move(9, at(150.0)));
    assert_eq!(c.view().offset, Some(-350.0));
    assert_eq!(c.index(), 1);
}

#[test]
fn long_left_drag_commits_next() {
    let mut c = carousel(3, 300.0);
    assert_eq!(drag(&mut c, 250.0, 190.0), Some(DragOutcome::Next));
    assert_eq!(c.index(), 1);
    assert_eq!(c.view().offset, Some(-300.0));
    assert!(c.view().transition);
    assert_eq!(c.view().captured, None);
    assert!(!c.is_dragging());
}

#[test]
fn long_right_drag_commits_previous() {
    let mut c = carousel(3, 300.0);
    c.jump_to(2);
    assert_eq!(drag(&mut c, 10.0, 70.0), Some(DragOutcome::Previous));
    assert_eq!(c.index(), 1);
    assert_eq!(c.view().current_indicators(), [1]);
}

#[test]
fn committed_drag_is_still_clamped() {
    let mut c = carousel(2, 300.0);
    assert_eq!(drag(&mut c, 10.0, 200.0), Some(DragOutcome::Previous));
    assert_eq!(c.index(), 0);
    assert_eq!(c.view().offset, Some(0.0));
}

#[test]
fn threshold_caps_at_eighty_pixels_on_wide_carousels() {
    let mut c = carousel(3, 1000.0);
    assert_eq!(drag(&mut c, 500.0, 419.0), Some(DragOutcome::Next));
    assert_eq!(drag(&mut c, 500.0, 420.0), Some(DragOutcome::SnapBack));
    assert_eq!(c.index(), 1);
}

#[test]
fn short_drag_snaps_back() {
    let mut c = carousel(3, 300.0);
    c.next();
    assert_eq!(drag(&mut c, 100.0, 60.0), Some(DragOutcome::SnapBack));
    assert_eq!(c.index(), 1);
    assert_eq!(c.view().offset, Some(-300.0));
    assert!(c.view().transition);
}

#[test]
fn moves_and_releases_without_a_drag_are_ignored() {
    let mut c = carousel(3, 300.0);
    let writes = c.view().offset_writes;
    assert!(!c.pointer_move(1, at(10.0)));
    assert_eq!(c.pointer_up(1, at(10.0)), None);
    assert_eq!(c.view().offset_writes, writes);
}

#[test]
fn foreign_pointer_does_not_end_the_drag() {
    let mut c = carousel(3, 300.0);
    c.pointer_down(1, at(200.0));
    assert!(!c.pointer_move(2, at(0.0)));
    assert_eq!(c.pointer_up(2, at(0.0)), None);
    assert!(c.is_dragging());
    assert_eq!(c.pointer_up(1, at(100.0)), Some(DragOutcome::Next));
}

#[test]
fn cancel_restores_resting_state() {
    let mut c = carousel(4, 300.0);
    c.jump_to(2);
    c.pointer_down(3, at(200.0));
    c.pointer_move(3, at(20.0));
    assert_eq!(c.view().offset, Some(-780.0));

    c.handle(CarouselInput::PointerCancel(3));

    assert!(!c.is_dragging());
    assert!(c.view().transition);
    assert_eq!(c.view().captured, None);
    assert_eq!(c.view().offset, Some(-600.0));
    assert_eq!(c.index(), 2);

    // The stale release after a cancel does nothing.
    assert_eq!(c.pointer_up(3, at(20.0)), None);
    assert!(!c.cancel_drag());
}

#[test]
fn cancel_from_another_pointer_keeps_the_drag() {
    let mut c = carousel(3, 300.0);
    c.pointer_down(1, at(200.0));
    c.pointer_move(1, at(150.0));

    c.handle(CarouselInput::PointerCancel(7));
    assert!(c.is_dragging());
    assert!(!c.view().transition);
    assert_eq!(c.view().captured, Some(1));
    assert_eq!(c.view().offset, Some(-50.0));
    assert!(!c.pointer_cancel(7));

    assert_eq!(c.pointer_up(1, at(100.0)), Some(DragOutcome::Next));
    assert_eq!(c.index(), 1);
}

#[test]
fn blur_abandons_any_drag() {
    let mut c = carousel(3, 300.0);
    c.next();
    c.pointer_down(5, at(200.0));
    c.pointer_move(5, at(100.0));

    c.handle(CarouselInput::Blur);

    assert!(!c.is_dragging());
    assert!(c.view().transition);
    assert_eq!(c.view().captured, None);
    assert_eq!(c.view().offset, Some(-300.0));
    assert_eq!(c.index(), 1);
}

#[test]
fn new_pointer_down_replaces_stuck_drag() {
    let mut c = carousel(3, 300.0);
    c.pointer_down(1, at(200.0));
    c.pointer_down(2, at(100.0));
    assert_eq!(c.view().captured, Some(2));
    assert_eq!(c.pointer_up(2, at(0.0)), Some(DragOutcome::Next));
}

#[test]
fn five_slide_walkthrough() {
    let mut c = carousel(5, 300.0);
    assert_eq!(c.view().offset, Some(0.0));

    for _ in 0..3 {
        c.handle(CarouselInput::Next);
    }
    assert_eq!(c.index(), 3);
    assert_eq!(c.view().offset, Some(-900.0));
    // Fourth indicator, zero-based 3.
    assert_eq!(c.view().current_indicators(), [3]);

    c.next();
    c.next();
    assert_eq!(c.index(), 4);
    assert_eq!(c.view().offset, Some(-1200.0));

    // Threshold is min(80, 54) = 54, so 50px does not commit.
    assert_eq!(drag(&mut c, 200.0, 150.0), Some(DragOutcome::SnapBack));
    assert_eq!(c.index(), 4);
    assert_eq!(c.view().offset, Some(-1200.0));
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = carousel(0, 300.0);
    assert_eq!(c.total(), 0);
    assert!(c.view().current.is_empty());
    assert_eq!(c.view().offset, Some(0.0));

    c.next();
    c.previous();
    c.jump_to(3);
    c.key(NavKey::Right);
    assert_eq!(drag(&mut c, 300.0, 0.0), Some(DragOutcome::Next));

    assert_eq!(c.index(), 0);
    assert_eq!(c.view().offset, Some(0.0));
}

#[test]
fn custom_threshold_is_used() {
    let threshold = CommitThreshold {
        max_px: 20.0,
        width_fraction: 0.5,
    };
    let mut c = Carousel::new(RecordingView::new(300.0, 3), 3, threshold);
    assert_eq!(c.threshold(), threshold);
    assert_eq!(drag(&mut c, 100.0, 75.0), Some(DragOutcome::Next));
    assert_eq!(c.index(), 1);
}
