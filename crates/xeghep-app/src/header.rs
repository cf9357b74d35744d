// crates/xeghep-app/src/header.rs
// Fixed header that reacts to scrolling

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement};
use xeghep_core::Result;
use xeghep_core::header::{FrameThrottle, header_layout};

use crate::dom;

const HEADER_SELECTOR: &str = ".site-header";
const BANNER_SELECTOR: &str = ".banner";

/// `.site-header` plus the optional `.banner` pushed down beneath it
pub struct FixedHeader {
    header: HtmlElement,
    banner: Option<HtmlElement>,
    throttle: Cell<FrameThrottle>,
}

impl FixedHeader {
    /// Apply the current scroll position, then follow scrolling
    pub fn mount(document: &Document) -> Result<Rc<Self>> {
        let header = Rc::new(Self {
            header: dom::query(document, HEADER_SELECTOR)?,
            banner: dom::query(document, BANNER_SELECTOR).ok(),
            throttle: Cell::new(FrameThrottle::default()),
        });
        header.update();

        let window = dom::window()?;
        let this = Rc::clone(&header);
        dom::listen_passive(&window, "scroll", move |_| this.schedule_update());

        Ok(header)
    }

    /// Sync header class and banner margin with the scroll position
    pub fn update(&self) {
        let layout = header_layout(dom::scroll_y(), dom::viewport_width());
        dom::set_class(&self.header, "scrolled", layout.scrolled);
        if let Some(banner) = &self.banner {
            dom::set_style(banner, "margin-top", &format!("{}px", layout.banner_margin_px));
        }

        let mut throttle = self.throttle.get();
        throttle.complete();
        self.throttle.set(throttle);
    }

    fn schedule_update(self: &Rc<Self>) {
        let mut throttle = self.throttle.get();
        if !throttle.request() {
            return;
        }
        self.throttle.set(throttle);

        let this = Rc::clone(self);
        if let Err(e) = dom::next_frame(move || this.update()) {
            log::warn!("Animation frame unavailable, updating header now: {}", e);
            self.update();
        }
    }
}
