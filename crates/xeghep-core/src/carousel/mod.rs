// crates/xeghep-core/src/carousel/mod.rs
// Auto-advancing carousel: view seam and pagination math

mod controller;

pub use controller::Carousel;

// ═══════════════════════════════════════
// VIEW SEAM
// ═══════════════════════════════════════

/// What the controller needs from the rendered carousel.
///
/// The DOM build wraps the track, the ordered items and the ordered dots;
/// tests use an in-memory recorder.
pub trait CarouselView {
    fn item_count(&self) -> usize;

    fn dot_count(&self) -> usize;

    /// Rendered width of the first item, without the gap
    fn item_width(&self) -> f64;

    /// Shift the track left by `offset_px`
    fn translate_track(&mut self, offset_px: f64);

    fn set_dot(&mut self, index: usize, visible: bool, active: bool);
}

// ═══════════════════════════════════════
// PAGINATION
// ═══════════════════════════════════════

/// Highest valid leftmost index
pub fn max_index(total_items: usize, items_per_view: usize) -> usize {
    total_items.saturating_sub(items_per_view)
}

/// Number of pagination positions, i.e. visible dots
pub fn total_dots(total_items: usize, items_per_view: usize) -> usize {
    (total_items + 1).saturating_sub(items_per_view)
}

/// Slide index from a dot's `data-index` value.
///
/// Reads the leading run of digits after optional whitespace and `+`, so
/// `"2px"` and `"2.0"` both give 2. Negative or digit-less values give `None`.
pub fn parse_dot_index(raw: &str) -> Option<usize> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..digits].parse().ok()
}

/// Snapshot of the carousel's pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub current_index: usize,
    pub items_per_view: usize,
    pub max_index: usize,
    pub total_dots: usize,
}

impl CarouselLayout {
    /// Layout for the given counts, clamping `current_index` into range
    pub fn compute(total_items: usize, items_per_view: usize, current_index: usize) -> Self {
        let max_index = max_index(total_items, items_per_view);
        Self {
            current_index: current_index.min(max_index),
            items_per_view,
            max_index,
            total_dots: total_dots(total_items, items_per_view),
        }
    }

    /// Track offset for one step of `item_width + gap`
    pub fn offset(&self, item_width: f64, gap: f64) -> f64 {
        self.current_index as f64 * (item_width + gap)
    }

    pub fn is_dot_visible(&self, index: usize) -> bool {
        index < self.total_dots
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.is_dot_visible(index) && index == self.current_index
    }
}
