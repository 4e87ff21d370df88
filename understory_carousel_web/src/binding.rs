// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_carousel::CarouselConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::{BindError, js_message};

/// The elements of one carousel, resolved from its root.
#[derive(Debug, Clone)]
pub struct MarkupBinding {
    /// The carousel root.
    pub root: HtmlElement,
    /// The translated track.
    pub track: HtmlElement,
    /// The track's element children, in order.
    pub slides: Vec<Element>,
    /// The "previous" control, if present.
    pub previous: Option<Element>,
    /// The "next" control, if present.
    pub next: Option<Element>,
    /// The indicator container, if present.
    pub indicators: Option<Element>,
}

impl MarkupBinding {
    /// Resolves the slots named by `config` inside `root`.
    ///
    /// Fails if the track is missing. Missing controls or indicator
    /// container are left as `None`.
    pub fn locate(root: HtmlElement, config: &CarouselConfig) -> Result<Self, BindError> {
        let track = query(&root, &config.track)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| BindError::MissingTrack {
                selector: config.track.clone(),
            })?;

        let children = track.children();
        let slides = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();

        Ok(Self {
            previous: query(&root, &config.previous)?,
            next: query(&root, &config.next)?,
            indicators: query(&root, &config.indicators)?,
            root,
            track,
            slides,
        })
    }
}

fn query(root: &Element, selector: &str) -> Result<Option<Element>, BindError> {
    root.query_selector(selector)
        .map_err(|err| BindError::Selector {
            selector: selector.to_owned(),
            message: js_message(&err),
        })
}
