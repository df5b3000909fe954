use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::drivers::progress::ScrollMetrics;
use crate::drivers::scroll_spy::{SectionBounds, SectionGeometry};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// A callback attached to window events for as long as this value lives.
pub struct WindowListener {
    window: Window,
    events: Vec<&'static str>,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(events: &[&'static str], callback: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let mut listener = Self {
            window,
            events: Vec::with_capacity(events.len()),
            callback: Closure::<dyn FnMut()>::new(callback),
        };
        for &event in events {
            listener
                .window
                .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())
                .map_err(|e| DomError::Listener {
                    event,
                    reason: format!("{e:?}"),
                })?;
            // Only events that registered get removed again on drop.
            listener.events.push(event);
        }
        Ok(listener)
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in &self.events {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove `{event}` listener: {e:?}");
            }
        }
    }
}

/// Reads section positions from the live document.
pub struct DomGeometry {
    document: Document,
}

impl DomGeometry {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl SectionGeometry for DomGeometry {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        offset: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Smoothly scrolls the section with `id` to the top of the viewport.
/// Returns false, doing nothing, when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
