// crates/xeghep-app/src/scroll.rs
// Smooth scrolling for in-page anchors

use web_sys::Document;
use xeghep_core::scroll::{anchor_selector, scroll_target};

use crate::dom;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const HEADER_SELECTOR: &str = ".site-header";

pub fn init_smooth_scroll(document: &Document) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let link = anchor.clone();
        let doc = document.clone();
        dom::listen(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            event.prevent_default();
            scroll_to_anchor(&doc, selector);
        });
    }
    log::debug!("Smooth scroll bound to {} anchor(s)", anchors.len());
}

fn scroll_to_anchor(document: &Document, selector: &str) {
    let target = match document.query_selector(selector) {
        Ok(Some(target)) => target,
        Ok(None) => return,
        Err(e) => {
            log::warn!("Cannot scroll to {}: {:?}", selector, e);
            return;
        }
    };

    let header_height = dom::query(document, HEADER_SELECTOR)
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);
    let page_y = dom::window()
        .ok()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0);

    let top = scroll_target(target.get_bounding_client_rect().top(), page_y, header_height);
    dom::smooth_scroll_to(top);
}
