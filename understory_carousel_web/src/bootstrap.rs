// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;

use gloo_events::EventListener;
use understory_carousel::CarouselConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::error::{BindError, js_message};
use crate::instance::WebCarousel;
use crate::scan::{BindReport, scan};

/// Attribute set on roots that already have a carousel bound.
pub const BOUND_ATTRIBUTE: &str = "data-carousel-bound";

thread_local! {
    // Bound carousels live as long as the page.
    static REGISTRY: RefCell<Vec<WebCarousel>> = const { RefCell::new(Vec::new()) };
}

/// Binds every unbound root in `document` matching `config.root`.
///
/// Each root is bound independently: a failing root is reported in
/// [`BindReport::errors`] and does not stop the scan. Roots carrying
/// [`BOUND_ATTRIBUTE`] are skipped. Bound carousels are kept alive for the
/// lifetime of the page.
pub fn bind_all(document: &Document, config: &CarouselConfig) -> Result<BindReport, BindError> {
    let nodes = document
        .query_selector_all(&config.root)
        .map_err(|err| BindError::Selector {
            selector: config.root.clone(),
            message: js_message(&err),
        })?;
    let roots = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok());

    let (carousels, report) = scan(
        roots,
        |root| root.has_attribute(BOUND_ATTRIBUTE),
        |root| {
            let carousel = WebCarousel::bind(root.clone(), config)?;
            root.set_attribute(BOUND_ATTRIBUTE, "")?;
            Ok(carousel)
        },
    );
    REGISTRY.with(|registry| registry.borrow_mut().extend(carousels));
    Ok(report)
}

/// Binds every carousel once the document has finished parsing.
///
/// If the document is still loading, the scan runs on `DOMContentLoaded`;
/// otherwise it runs immediately.
pub fn install(config: CarouselConfig) -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document.ready_state() != "loading" {
        bind_all(&document, &config)?;
        return Ok(());
    }

    let target = document.clone();
    EventListener::once(&target, "DOMContentLoaded", move |_| {
        if let Err(err) = bind_all(&document, &config) {
            log::warn!("carousel: scan failed: {err}");
        }
    })
    .forget();
    Ok(())
}

/// Number of carousels bound on this page so far.
pub fn bound_count() -> usize {
    REGISTRY.with(|registry| registry.borrow().len())
}

/// JavaScript entry point: `installCarousels(config?)`.
///
/// `config` is an optional object with any of the fields of
/// [`CarouselConfig`]; omitted fields keep their defaults.
#[wasm_bindgen(js_name = installCarousels)]
pub fn install_carousels(config: JsValue) -> Result<(), JsError> {
    let config = if config.is_undefined() || config.is_null() {
        CarouselConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    install(config).map_err(|err| JsError::new(&err.to_string()))
}

/// Binds every carousel with the default configuration on module start.
#[cfg(feature = "auto-start")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = install(CarouselConfig::default()) {
        log::warn!("carousel: install failed: {err}");
    }
}
