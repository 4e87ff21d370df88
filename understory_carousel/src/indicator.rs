// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator markers: one per slide, exactly one of them current.

use alloc::format;
use alloc::string::{String, ToString};

/// Attribute carried only by the current indicator, with the value `"true"`.
pub const CURRENT_ATTRIBUTE: &str = "aria-current";

/// Accessible label for the indicator of the zero-based slide `index`.
///
/// Labels count slides from one.
///
/// ```
/// use understory_carousel::indicator::label;
///
/// assert_eq!(label(0), "Go to slide 1");
/// ```
#[must_use]
pub fn label(index: usize) -> String {
    format!("Go to slide {}", index.saturating_add(1))
}

/// Attributes of the marker generated for the zero-based slide `index`.
///
/// Markers are `<button>` elements: a plain button type, the zero-based
/// `data-index`, and the one-based accessible label.
#[must_use]
pub fn marker_attributes(index: usize) -> [(&'static str, String); 3] {
    [
        ("type", "button".into()),
        ("data-index", index.to_string()),
        ("aria-label", label(index)),
    ]
}

/// Yields `(index, is_current)` for each of `total` indicators.
///
/// When `total > 0` and `current < total`, exactly one item is current.
pub fn current_flags(total: usize, current: usize) -> impl Iterator<Item = (usize, bool)> {
    (0..total).map(move |i| (i, i == current))
}
