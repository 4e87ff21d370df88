// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_carousel::{CarouselView, PointerId, indicator};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::error::js_message;

/// [`CarouselView`] over live DOM elements.
///
/// Width is the root's `clientWidth`. The offset is written as an inline
/// `translateX` on the track, and suspending the transition sets an inline
/// `transition: none` that is removed again afterwards so the stylesheet's
/// transition applies.
#[derive(Debug, Clone)]
pub struct DomView {
    root: HtmlElement,
    track: HtmlElement,
    indicators: Vec<Element>,
}

impl DomView {
    /// Creates a view over `root`, its `track`, and generated indicator markers.
    pub fn new(root: HtmlElement, track: HtmlElement, indicators: Vec<Element>) -> Self {
        Self {
            root,
            track,
            indicators,
        }
    }

    /// The carousel root.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// The indicator markers, one per slide.
    pub fn indicators(&self) -> &[Element] {
        &self.indicators
    }
}

impl CarouselView for DomView {
    fn width(&self) -> f64 {
        f64::from(self.root.client_width())
    }

    fn set_track_offset(&mut self, offset: f64) {
        let value = format!("translateX({offset}px)");
        report(self.track.style().set_property("transform", &value), "set transform");
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        let style = self.track.style();
        let result = if enabled {
            style.remove_property("transition").map(drop)
        } else {
            style.set_property("transition", "none")
        };
        report(result, "toggle transition");
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        let Some(marker) = self.indicators.get(index) else {
            return;
        };
        let result = if current {
            marker.set_attribute(indicator::CURRENT_ATTRIBUTE, "true")
        } else {
            marker.remove_attribute(indicator::CURRENT_ATTRIBUTE)
        };
        report(result, "update aria-current");
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        report(self.root.set_pointer_capture(pointer), "capture pointer");
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        // Capture is already gone if the browser released it implicitly.
        if self.root.has_pointer_capture(pointer) {
            report(self.root.release_pointer_capture(pointer), "release pointer");
        }
    }
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("carousel: failed to {what}: {}", js_message(&err));
    }
}
