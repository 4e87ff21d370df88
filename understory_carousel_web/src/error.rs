// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why a carousel could not be bound to its markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// Not running in a browsing context with a `window`.
    #[error("no global `window` is available")]
    NoWindow,
    /// The window has no document.
    #[error("the window has no document")]
    NoDocument,
    /// The root has no element matching the track selector.
    #[error("carousel root has no track matching `{selector}`")]
    MissingTrack {
        /// The track selector that matched nothing.
        selector: String,
    },
    /// A selector was rejected by the DOM.
    #[error("invalid selector `{selector}`: {message}")]
    Selector {
        /// The rejected selector.
        selector: String,
        /// The DOM's explanation.
        message: String,
    },
    /// Any other DOM operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return err.message().into();
    }
    format!("{value:?}")
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(js_message(&value))
    }
}
