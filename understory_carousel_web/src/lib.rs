// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel_web --heading-base-level=0

//! Understory Carousel Web: binds `understory_carousel` to DOM markup.
//!
//! On `wasm32`, this crate finds carousel roots in the document, resolves
//! their track, controls and indicator container, and drives an
//! [`understory_carousel::Carousel`] from browser events through `web-sys`.
//!
//! # Markup
//!
//! With the default [`CarouselConfig`]:
//!
//! ```html
//! <div data-carousel>
//!   <div class="carousel-track">
//!     <img class="carousel-slide" src="a.jpg" loading="lazy">
//!     <img class="carousel-slide" src="b.jpg" loading="lazy">
//!   </div>
//!   <button class="carousel-btn prev" aria-label="Previous">‹</button>
//!   <button class="carousel-btn next" aria-label="Next">›</button>
//!   <div class="carousel-indicators"></div>
//! </div>
//! ```
//!
//! The track is required; a root without one is reported as
//! [`BindError::MissingTrack`] and left alone. Controls and the indicator
//! container are optional. The track should have a CSS `transition` on
//! `transform`; it is suspended while dragging.
//!
//! # Events
//!
//! - `resize` on the window re-renders at the root's new width.
//! - `click` on the controls steps one slide.
//! - `keydown` on the root (made focusable with `tabindex="0"`) maps
//!   `ArrowLeft`/`ArrowRight` to previous/next.
//! - `pointerdown` on the track starts a drag and captures the pointer on the
//!   root; `pointermove`/`pointerup` on the window follow and finish it.
//! - `pointercancel` abandons the drag its pointer drives; window `blur`
//!   abandons any drag.
//! - `click` on a generated indicator jumps to its slide.
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(target_arch = "wasm32")]
//! # fn run() -> Result<(), understory_carousel_web::BindError> {
//! use understory_carousel_web::{CarouselConfig, install};
//!
//! install(CarouselConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! From JavaScript, call `installCarousels()` or
//! `installCarousels({ root: ".gallery" })`. The `auto-start` feature binds
//! every carousel with the defaults as soon as the module is instantiated.
//!
//! Logging goes through the `log` facade; install a logger in the host
//! application to see it.

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "`#[wasm_bindgen]` exports expand to FFI shims.")]
mod bootstrap;
#[cfg(target_arch = "wasm32")]
mod dom_view;
mod error;
#[cfg(target_arch = "wasm32")]
mod instance;
mod scan;

#[cfg(target_arch = "wasm32")]
pub use binding::MarkupBinding;
#[cfg(target_arch = "wasm32")]
pub use bootstrap::{BOUND_ATTRIBUTE, bind_all, bound_count, install, install_carousels};
#[cfg(all(target_arch = "wasm32", feature = "auto-start"))]
pub use bootstrap::start;
#[cfg(target_arch = "wasm32")]
pub use dom_view::DomView;
pub use error::BindError;
#[cfg(target_arch = "wasm32")]
pub use instance::WebCarousel;
pub use scan::{BindReport, scan};

pub use understory_carousel::{CarouselConfig, CommitThreshold};
