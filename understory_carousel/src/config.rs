// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup binding configuration.

use alloc::string::String;

use crate::drag::CommitThreshold;

/// Selectors naming the slots of the carousel markup, plus gesture tuning.
///
/// The defaults describe this structure:
///
/// ```html
/// <div data-carousel>
///   <div class="carousel-track">
///     <div class="carousel-slide">…</div>
///     <div class="carousel-slide">…</div>
///   </div>
///   <button class="carousel-btn prev">‹</button>
///   <button class="carousel-btn next">›</button>
///   <div class="carousel-indicators"></div>
/// </div>
/// ```
///
/// Every selector except `root` is evaluated relative to a matched root. The
/// track is required; the controls and the indicator container are optional.
/// Slides are the track's element children, in document order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Selects every carousel root on the page.
    pub root: String,
    /// Selects the translated track inside a root.
    pub track: String,
    /// Selects the "previous" control inside a root.
    pub previous: String,
    /// Selects the "next" control inside a root.
    pub next: String,
    /// Selects the container indicator markers are generated into.
    pub indicators: String,
    /// Drag distance needed to change slides.
    pub threshold: CommitThreshold,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            root: "[data-carousel]".into(),
            track: ".carousel-track".into(),
            previous: ".carousel-btn.prev".into(),
            next: ".carousel-btn.next".into(),
            indicators: ".carousel-indicators".into(),
            threshold: CommitThreshold::default(),
        }
    }
}

impl CarouselConfig {
    /// Sets the root selector.
    #[must_use]
    pub fn with_root(mut self, selector: impl Into<String>) -> Self {
        self.root = selector.into();
        self
    }

    /// Sets the track selector.
    #[must_use]
    pub fn with_track(mut self, selector: impl Into<String>) -> Self {
        self.track = selector.into();
        self
    }

    /// Sets the previous and next control selectors.
    #[must_use]
    pub fn with_controls(
        mut self,
        previous: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.previous = previous.into();
        self.next = next.into();
        self
    }

    /// Sets the indicator container selector.
    #[must_use]
    pub fn with_indicators(mut self, selector: impl Into<String>) -> Self {
        self.indicators = selector.into();
        self
    }

    /// Sets the drag commit threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: CommitThreshold) -> Self {
        self.threshold = threshold;
        self
    }
}
