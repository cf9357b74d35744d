// crates/xeghep-core/src/carousel/controller.rs
// Carousel controller: index state, auto-advance, and triggers

use crate::autoplay::{AutoAdvance, Ticker};
use crate::config::CarouselConfig;

use super::{CarouselLayout, CarouselView, max_index};

/// Slides a strip of items, advancing on a timer.
///
/// All triggers (timer, hover, dots, resize, page visibility) are plain
/// method calls; the DOM build binds listeners once and forwards events.
/// Whether the timer should be live is decided in one place,
/// [`Carousel::should_run`].
pub struct Carousel<V: CarouselView, T: Ticker> {
    view: V,
    config: CarouselConfig,
    autoplay: AutoAdvance<T>,
    total_items: usize,
    current_index: usize,
    items_per_view: usize,
    hovering: bool,
    visible: bool,
    started: bool,
}

impl<V: CarouselView, T: Ticker> Carousel<V, T> {
    pub fn new(view: V, ticker: T, config: CarouselConfig) -> Self {
        let total_items = view.item_count();
        Self {
            autoplay: AutoAdvance::new(ticker, config.interval_ms),
            items_per_view: config.wide_items,
            config,
            view,
            total_items,
            current_index: 0,
            hovering: false,
            visible: true,
            started: false,
        }
    }

    /// Lay out for the current viewport and begin auto-advance.
    ///
    /// Does nothing when there are no items.
    pub fn start(&mut self, viewport_width: f64) {
        if self.total_items == 0 {
            log::debug!("Carousel has no items, staying inactive");
            return;
        }
        self.started = true;
        self.recompute_layout(viewport_width);
        self.restart_autoplay();
        log::debug!(
            "Carousel started: {} items, {} per view",
            self.total_items,
            self.items_per_view
        );
    }

    // ───────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────

    /// Advance one step, wrapping to the start. No-op while hovering.
    pub fn next(&mut self) {
        if self.hovering {
            return;
        }
        self.current_index = if self.current_index < self.max_index() {
            self.current_index + 1
        } else {
            0
        };
        self.render();
    }

    /// Timer callback
    pub fn tick(&mut self) {
        self.next();
    }

    /// Jump to `index` and restart the timer.
    ///
    /// Returns false (and changes nothing) when `index` is past the last
    /// valid position.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index > self.max_index() {
            log::debug!("Ignoring carousel jump to {} (max {})", index, self.max_index());
            return false;
        }
        self.current_index = index;
        self.render();
        self.restart_autoplay();
        true
    }

    /// Dot click; `index` is `None` when the dot carries no usable index
    pub fn dot_clicked(&mut self, index: Option<usize>) {
        let moved = index.is_some_and(|i| self.go_to(i));
        if !moved {
            self.restart_autoplay();
        }
    }

    // ───────────────────────────────────────
    // Environment triggers
    // ───────────────────────────────────────

    pub fn hover_enter(&mut self) {
        self.hovering = true;
        self.autoplay.stop();
    }

    pub fn hover_leave(&mut self) {
        self.hovering = false;
        self.restart_autoplay();
    }

    /// Page visibility changed (tab switch, minimize)
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        self.restart_autoplay();
    }

    /// Window resized: reflow, then restart the timer
    pub fn resize(&mut self, viewport_width: f64) {
        self.recompute_layout(viewport_width);
        self.restart_autoplay();
    }

    /// Recompute items-per-view, clamp the index and reflow.
    ///
    /// Idempotent; safe to call on every resize.
    pub fn recompute_layout(&mut self, viewport_width: f64) {
        let items_per_view = self.config.items_per_view(viewport_width);
        if items_per_view != self.items_per_view {
            log::debug!(
                "Carousel items per view {} -> {} at {}px",
                self.items_per_view,
                items_per_view,
                viewport_width
            );
            self.items_per_view = items_per_view;
        }
        self.current_index = self.current_index.min(self.max_index());
        self.render();
    }

    // ───────────────────────────────────────
    // State
    // ───────────────────────────────────────

    /// Started, not hovered, page visible
    pub fn should_run(&self) -> bool {
        self.started && !self.hovering && self.visible
    }

    pub fn layout(&self) -> CarouselLayout {
        CarouselLayout::compute(self.total_items, self.items_per_view, self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn max_index(&self) -> usize {
        max_index(self.total_items, self.items_per_view)
    }

    fn restart_autoplay(&mut self) {
        if self.should_run() {
            self.autoplay.start();
        } else {
            self.autoplay.stop();
        }
    }

    fn render(&mut self) {
        let layout = self.layout();
        let offset = layout.offset(self.view.item_width(), self.config.gap_px);
        self.view.translate_track(offset);

        for index in 0..self.view.dot_count() {
            self.view
                .set_dot(index, layout.is_dot_visible(index), layout.is_dot_active(index));
        }
        log::trace!("Carousel at {} (offset {}px)", layout.current_index, offset);
    }
}

impl<V: CarouselView, T: Ticker> std::fmt::Debug for Carousel<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("layout", &self.layout())
            .field("hovering", &self.hovering)
            .field("visible", &self.visible)
            .field("started", &self.started)
            .field("autoplay", &self.autoplay)
            .finish()
    }
}
