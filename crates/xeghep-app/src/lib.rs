// crates/xeghep-app/src/lib.rs
// xe ghep site behaviour - WASM entry point

mod back_to_top;
mod carousel;
mod dom;
mod header;
mod menu;
mod nav;
mod scroll;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Document;
use xeghep_core::Result;
use xeghep_core::viewport::{LOAD_SETTLE_MS, RESIZE_DEBOUNCE_MS};

pub use carousel::{DomCarousel, IntervalTicker, SharedCarousel};
pub use header::FixedHeader;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);

    log::info!("Site behaviour starting...");

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("No document to attach to: {}", e);
            return;
        }
    };

    // The module may finish loading before or after the markup is parsed
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| Page::boot(doc.clone()));
    } else {
        Page::boot(document);
    }
}

// ============================================================================
// Page
// ============================================================================

/// Every behaviour that activated on this page
struct Page {
    document: Document,
    carousel: Option<SharedCarousel>,
    header: Option<Rc<FixedHeader>>,
}

impl Page {
    fn boot(document: Document) {
        let carousel = activate("carousel", carousel::mount(&document));
        _ = activate("menu toggle", menu::init_menu_toggle(&document));
        nav::highlight_nav_links(&document);
        let header = activate("fixed header", FixedHeader::mount(&document));
        scroll::init_smooth_scroll(&document);
        back_to_top::mount_back_to_top();

        let page = Rc::new(Self {
            document,
            carousel,
            header,
        });
        page.bind_window_events();
        log::info!("Site behaviour ready");
    }

    fn bind_window_events(self: &Rc<Self>) {
        let Ok(window) = dom::window() else {
            return;
        };

        // Each resize pushes the refresh back; only the last one runs
        let mut pending: Option<Timeout> = None;
        let page = Rc::clone(self);
        dom::listen(&window, "resize", move |_| {
            let page = Rc::clone(&page);
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || page.refresh_layout());
            // Dropping the previous timeout clears it
            drop(pending.replace(timeout));
        });

        let page = Rc::clone(self);
        dom::listen(&window, "load", move |_| {
            let page = Rc::clone(&page);
            Timeout::new(LOAD_SETTLE_MS, move || page.resync()).forget();
        });

        let page = Rc::clone(self);
        dom::listen(&window, "hashchange", move |_| {
            nav::highlight_nav_links(&page.document);
        });
    }

    /// After the viewport settles: header, carousel layout, nav
    fn refresh_layout(&self) {
        if let Some(carousel) = &self.carousel {
            match carousel.try_borrow_mut() {
                Ok(mut carousel) => carousel.recompute_layout(dom::viewport_width()),
                Err(_) => log::warn!("Carousel busy, skipping layout refresh"),
            }
        }
        self.resync();
    }

    /// Header state and nav highlighting
    fn resync(&self) {
        if let Some(header) = &self.header {
            header.update();
        }
        nav::highlight_nav_links(&self.document);
    }
}

/// A behaviour whose markup is missing stays off; anything else is logged
fn activate<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_missing_element() => {
            log::debug!("{} inactive: {}", name, e);
            None
        }
        Err(e) => {
            log::warn!("{} failed to start: {}", name, e);
            None
        }
    }
}
