// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use kurbo::Point;
use understory_carousel::{Carousel, CarouselConfig, CarouselInput, NavKey, PointerId, indicator};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, PointerEvent};

use crate::binding::MarkupBinding;
use crate::dom_view::DomView;
use crate::error::BindError;

type Shared = Rc<RefCell<Carousel<DomView>>>;

/// A carousel bound to live markup.
///
/// Owns its event listeners; dropping it unbinds every listener. The
/// generated indicator markers stay in the document.
#[derive(Debug)]
pub struct WebCarousel {
    carousel: Shared,
    _listeners: Vec<EventListener>,
}

impl WebCarousel {
    /// Binds a carousel to `root` using the slots named in `config`.
    ///
    /// Makes the root focusable, regenerates the indicator markers, renders
    /// the first slide and wires resize, control, keyboard, indicator and
    /// pointer events.
    pub fn bind(root: HtmlElement, config: &CarouselConfig) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        let binding = MarkupBinding::locate(root, config)?;
        let total = binding.slides.len();

        binding.root.set_tab_index(0);
        let markers = match &binding.indicators {
            Some(container) => build_indicators(&document, container, total)?,
            None => Vec::new(),
        };

        let view = DomView::new(binding.root.clone(), binding.track.clone(), markers.clone());
        let carousel: Shared = Rc::new(RefCell::new(Carousel::new(view, total, config.threshold)));
        log::debug!("carousel bound with {total} slides");

        let mut listeners = Vec::new();
        listeners.push(listen(&carousel, &window, "resize", |_| Some(CarouselInput::Resize)));
        if let Some(previous) = &binding.previous {
            listeners.push(listen(&carousel, previous, "click", |_| Some(CarouselInput::Previous)));
        }
        if let Some(next) = &binding.next {
            listeners.push(listen(&carousel, next, "click", |_| Some(CarouselInput::Next)));
        }
        listeners.push(listen(&carousel, &binding.root, "keydown", key_input));
        listeners.push(listen(&carousel, &binding.track, "pointerdown", |event| {
            pointer(event).map(|(id, pos)| CarouselInput::PointerDown(id, pos))
        }));
        listeners.push(listen(&carousel, &window, "pointermove", |event| {
            pointer(event).map(|(id, pos)| CarouselInput::PointerMove(id, pos))
        }));
        listeners.push(listen(&carousel, &window, "pointerup", |event| {
            pointer(event).map(|(id, pos)| CarouselInput::PointerUp(id, pos))
        }));
        listeners.push(listen(&carousel, &window, "pointercancel", |event| {
            pointer(event).map(|(id, _)| CarouselInput::PointerCancel(id))
        }));
        listeners.push(listen(&carousel, &window, "blur", |_| Some(CarouselInput::Blur)));

        for (index, marker) in markers.iter().enumerate() {
            let carousel = Rc::clone(&carousel);
            listeners.push(EventListener::new(marker, "click", move |_| {
                dispatch(&carousel, CarouselInput::JumpTo(index));
            }));
        }

        Ok(Self {
            carousel,
            _listeners: listeners,
        })
    }

    /// Current slide index.
    pub fn index(&self) -> usize {
        self.carousel.borrow().index()
    }

    /// Number of slides.
    pub fn total(&self) -> usize {
        self.carousel.borrow().total()
    }

    /// The carousel root element.
    pub fn root(&self) -> HtmlElement {
        self.carousel.borrow().view().root().clone()
    }

    /// Feeds an input to the carousel as if it came from the page.
    pub fn handle(&self, input: CarouselInput) {
        dispatch(&self.carousel, input);
    }
}

fn listen(
    carousel: &Shared,
    target: &EventTarget,
    kind: &'static str,
    map: fn(&Event) -> Option<CarouselInput>,
) -> EventListener {
    let carousel = Rc::clone(carousel);
    EventListener::new(target, kind, move |event| {
        if let Some(input) = map(event) {
            dispatch(&carousel, input);
        }
    })
}

fn dispatch(carousel: &Shared, input: CarouselInput) {
    // Handlers never nest, but a DOM call may synchronously fire an event we
    // listen to; drop it rather than panic on the borrow.
    match carousel.try_borrow_mut() {
        Ok(mut carousel) => carousel.handle(input),
        Err(_) => log::trace!("carousel busy, dropped {input:?}"),
    }
}

fn key_input(event: &Event) -> Option<CarouselInput> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    NavKey::from_key(&event.key()).map(CarouselInput::Key)
}

fn pointer(event: &Event) -> Option<(PointerId, Point)> {
    let event = event.dyn_ref::<PointerEvent>()?;
    let pos = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    Some((event.pointer_id(), pos))
}

/// Replaces the container's children with one button per slide.
fn build_indicators(
    document: &Document,
    container: &Element,
    total: usize,
) -> Result<Vec<Element>, BindError> {
    container.set_inner_html("");
    let mut markers = Vec::with_capacity(total);
    for index in 0..total {
        let button = document.create_element("button")?;
        for (name, value) in indicator::marker_attributes(index) {
            button.set_attribute(name, &value)?;
        }
        container.append_child(&button)?;
        markers.push(button);
    }
    Ok(markers)
}
