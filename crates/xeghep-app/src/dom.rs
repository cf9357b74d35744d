// crates/xeghep-app/src/dom.rs
// Thin helpers over web-sys: lookups, listeners, styling, scrolling

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Window,
};
use xeghep_core::{Result, SiteError};

// ============================================================================
// Lookups
// ============================================================================

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(SiteError::MissingElement("document"))
}

/// First element matching `selector`
pub fn query(document: &Document, selector: &'static str) -> Result<HtmlElement> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SiteError::MissingElement(selector))
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SiteError::MissingElement(id))
}

pub fn js_error(e: JsValue) -> SiteError {
    SiteError::Dom(format!("{:?}", e))
}

// ============================================================================
// Measurements
// ============================================================================

/// `window.innerWidth`, or 0 when unavailable
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

// ============================================================================
// Listeners
// ============================================================================

/// Bind `handler` for the page's lifetime
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to bind {} listener: {:?}", event_type, e);
    }
    closure.forget();
}

/// Like [`listen`], marked passive so scrolling is never blocked
pub fn listen_passive<F>(target: &EventTarget, event_type: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to bind passive {} listener: {:?}", event_type, e);
    }
    closure.forget();
}

/// Run `f` on the next animation frame
pub fn next_frame<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .map_err(js_error)?;
    Ok(())
}

// ============================================================================
// Styling
// ============================================================================

pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to toggle class {}: {:?}", class, e);
    }
}

/// Set an inline style property; an empty value removes it
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

// ============================================================================
// Scrolling
// ============================================================================

pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
