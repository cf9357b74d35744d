// crates/xeghep-app/src/carousel.rs
// Carousel bound to the page: DOM view, interval ticker, listeners

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use web_sys::{Document, HtmlElement};
use xeghep_core::carousel::parse_dot_index;
use xeghep_core::config::CONFIG_ATTRIBUTE;
use xeghep_core::{Carousel, CarouselConfig, CarouselView, Result, SiteError, Ticker};

use crate::dom;

const TRACK_SELECTOR: &str = ".track";
const ITEM_SELECTOR: &str = ".item";
const DOT_SELECTOR: &str = ".dot";

pub type PageCarousel = Carousel<DomCarousel, IntervalTicker>;
pub type SharedCarousel = Rc<RefCell<PageCarousel>>;

// ============================================================================
// DOM view
// ============================================================================

/// The track, its items, and the pagination dots, in document order
pub struct DomCarousel {
    track: HtmlElement,
    items: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
}

impl DomCarousel {
    pub fn new(track: HtmlElement, items: Vec<HtmlElement>, dots: Vec<HtmlElement>) -> Self {
        Self { track, items, dots }
    }

    /// Collect the carousel markup; fails when the track or items are absent
    pub fn from_document(document: &Document) -> Result<Self> {
        let track = dom::query(document, TRACK_SELECTOR)?;
        let items = dom::query_all(document, ITEM_SELECTOR);
        if items.is_empty() {
            return Err(SiteError::MissingElement(ITEM_SELECTOR));
        }
        let dots = dom::query_all(document, DOT_SELECTOR);
        Ok(Self::new(track, items, dots))
    }

    fn config(&self) -> CarouselConfig {
        CarouselConfig::from_attribute(self.track.get_attribute(CONFIG_ATTRIBUTE).as_deref())
    }
}

/// Slide a dot targets, from its `data-index`
fn dot_index(dot: &HtmlElement) -> Option<usize> {
    dot.get_attribute("data-index")
        .and_then(|raw| parse_dot_index(&raw))
}

impl CarouselView for DomCarousel {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn item_width(&self) -> f64 {
        self.items
            .first()
            .map(|item| f64::from(item.offset_width()))
            .unwrap_or(0.0)
    }

    fn translate_track(&mut self, offset_px: f64) {
        dom::set_style(&self.track, "transform", &format!("translateX(-{}px)", offset_px));
    }

    fn set_dot(&mut self, index: usize, visible: bool, active: bool) {
        let Some(dot) = self.dots.get(index) else {
            return;
        };
        dom::set_style(dot, "display", if visible { "inline-block" } else { "none" });
        dom::set_class(dot, "active", active);
    }
}

// ============================================================================
// Interval ticker
// ============================================================================

/// Repeating timers backed by `setInterval`; dropping the handle clears it
pub struct IntervalTicker {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalTicker {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&mut self, period_ms: u32) -> Interval {
        let on_tick = Rc::clone(&self.on_tick);
        Interval::new(period_ms, move || on_tick())
    }
}

// ============================================================================
// Mounting
// ============================================================================

/// Run `f` against the carousel if it is still alive and not mid-update
fn with_carousel(weak: &Weak<RefCell<PageCarousel>>, f: impl FnOnce(&mut PageCarousel)) {
    let Some(carousel) = weak.upgrade() else {
        return;
    };
    match carousel.try_borrow_mut() {
        Ok(mut carousel) => f(&mut carousel),
        Err(_) => log::warn!("Carousel busy, dropping event"),
    };
}

/// Build the carousel from the page, bind its listeners once, and start it
pub fn mount(document: &Document) -> Result<SharedCarousel> {
    let view = DomCarousel::from_document(document)?;
    let config = view.config();
    let items = view.items.clone();
    let dots = view.dots.clone();

    let carousel: SharedCarousel = Rc::new_cyclic(|weak: &Weak<RefCell<PageCarousel>>| {
        let weak = weak.clone();
        let ticker = IntervalTicker::new(move || with_carousel(&weak, |c| c.tick()));
        RefCell::new(Carousel::new(view, ticker, config))
    });

    bind_events(&carousel, document, &items, &dots);
    {
        // A page opened in a background tab starts hidden
        let mut c = carousel.borrow_mut();
        c.set_visible(!document.hidden());
        c.start(dom::viewport_width());
    }

    log::info!("Carousel mounted with {} items", items.len());
    Ok(carousel)
}

fn bind_events(
    carousel: &SharedCarousel,
    document: &Document,
    items: &[HtmlElement],
    dots: &[HtmlElement],
) {
    for dot in dots {
        let index = dot_index(dot);
        let weak = Rc::downgrade(carousel);
        dom::listen(dot, "click", move |_| {
            with_carousel(&weak, |c| c.dot_clicked(index));
        });
    }

    for item in items {
        let weak = Rc::downgrade(carousel);
        dom::listen(item, "mouseenter", move |_| {
            with_carousel(&weak, |c| c.hover_enter());
        });

        let weak = Rc::downgrade(carousel);
        dom::listen(item, "mouseleave", move |_| {
            with_carousel(&weak, |c| c.hover_leave());
        });
    }

    if let Ok(window) = dom::window() {
        let weak = Rc::downgrade(carousel);
        dom::listen(&window, "resize", move |_| {
            with_carousel(&weak, |c| c.resize(dom::viewport_width()));
        });
    }

    let weak = Rc::downgrade(carousel);
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        let visible = !doc.hidden();
        log::debug!("Page visibility changed: visible={}", visible);
        with_carousel(&weak, |c| c.set_visible(visible));
    });
}
