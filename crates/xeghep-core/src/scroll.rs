// crates/xeghep-core/src/scroll.rs
// Smooth anchor scrolling and back-to-top visibility

/// Scroll distance after which the back-to-top button shows
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// The selector to scroll to for an anchor href, if it is an in-page anchor.
///
/// A bare `#` is left to the browser.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href != "#").then_some(href)
}

/// Document offset that puts a target just below the fixed header
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
