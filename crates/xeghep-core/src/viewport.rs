// crates/xeghep-core/src/viewport.rs
// Responsive breakpoint and page timing constants

/// Widths at or below this many CSS pixels use the mobile layout
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Delay before resize-driven refreshes run
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Delay after window `load` before the header and nav are re-synced
pub const LOAD_SETTLE_MS: u32 = 100;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}
