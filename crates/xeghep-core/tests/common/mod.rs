// crates/xeghep-core/tests/common/mod.rs
// In-memory view and ticker for carousel tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use xeghep_core::{Carousel, CarouselConfig, CarouselView, Ticker};

pub const DESKTOP: f64 = 1024.0;
pub const MOBILE: f64 = 600.0;
pub const ITEM_WIDTH: f64 = 300.0;

/// Records what the controller last rendered
#[derive(Debug)]
pub struct RecordingView {
    items: usize,
    pub offset: f64,
    pub dots: Vec<DotState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotState {
    pub visible: bool,
    pub active: bool,
}

impl RecordingView {
    pub fn new(items: usize, dots: usize) -> Self {
        Self {
            items,
            offset: 0.0,
            dots: vec![DotState::default(); dots],
        }
    }

    pub fn visible_dots(&self) -> usize {
        self.dots.iter().filter(|d| d.visible).count()
    }

    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, d)| d.active)
            .map(|(i, _)| i)
            .collect()
    }
}

impl CarouselView for RecordingView {
    fn item_count(&self) -> usize {
        self.items
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn item_width(&self) -> f64 {
        ITEM_WIDTH
    }

    fn translate_track(&mut self, offset_px: f64) {
        self.offset = offset_px;
    }

    fn set_dot(&mut self, index: usize, visible: bool, active: bool) {
        self.dots[index] = DotState { visible, active };
    }
}

/// Counts live timers; clones share the counters
#[derive(Debug, Clone, Default)]
pub struct FakeTicker {
    live: Rc<Cell<usize>>,
    started: Rc<Cell<usize>>,
    last_period: Rc<Cell<u32>>,
}

pub struct FakeHandle {
    live: Rc<Cell<usize>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl Ticker for FakeTicker {
    type Handle = FakeHandle;

    fn every(&mut self, period_ms: u32) -> FakeHandle {
        self.live.set(self.live.get() + 1);
        self.started.set(self.started.get() + 1);
        self.last_period.set(period_ms);
        FakeHandle {
            live: Rc::clone(&self.live),
        }
    }
}

impl FakeTicker {
    /// Timers currently alive
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Timers ever started
    pub fn started(&self) -> usize {
        self.started.get()
    }

    pub fn last_period(&self) -> u32 {
        self.last_period.get()
    }
}

pub type TestCarousel = Carousel<RecordingView, FakeTicker>;

/// Carousel with one dot per item, plus a probe on its ticker
pub fn carousel(items: usize) -> (TestCarousel, FakeTicker) {
    carousel_with(items, CarouselConfig::default())
}

pub fn carousel_with(items: usize, config: CarouselConfig) -> (TestCarousel, FakeTicker) {
    let ticker = FakeTicker::default();
    let probe = ticker.clone();
    (Carousel::new(RecordingView::new(items, items), ticker, config), probe)
}

pub fn started(items: usize, viewport_width: f64) -> (TestCarousel, FakeTicker) {
    let (mut carousel, probe) = carousel(items);
    carousel.start(viewport_width);
    (carousel, probe)
}
