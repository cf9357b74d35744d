// crates/xeghep-core/src/header.rs
// Scroll-reactive fixed header and banner offset

use crate::viewport::is_mobile;

/// Per-breakpoint header tunables, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMetrics {
    /// Scroll distance after which the header is marked `scrolled`
    pub scroll_threshold: f64,
    pub banner_max_margin: f64,
    pub banner_min_margin: f64,
}

impl HeaderMetrics {
    pub const MOBILE: Self = Self {
        scroll_threshold: 40.0,
        banner_max_margin: 83.0,
        banner_min_margin: 40.0,
    };

    pub const DESKTOP: Self = Self {
        scroll_threshold: 80.0,
        banner_max_margin: 133.0,
        banner_min_margin: 70.0,
    };

    pub fn for_viewport(viewport_width: f64) -> Self {
        if is_mobile(viewport_width) {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }
}

/// What the header and banner should look like at a scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    pub scrolled: bool,
    pub banner_margin_px: f64,
}

/// Banner margin shrinks at half the scroll speed down to its minimum
pub fn header_layout(scroll_y: f64, viewport_width: f64) -> HeaderLayout {
    let metrics = HeaderMetrics::for_viewport(viewport_width);
    HeaderLayout {
        scrolled: scroll_y > metrics.scroll_threshold,
        banner_margin_px: (metrics.banner_max_margin - scroll_y * 0.5)
            .max(metrics.banner_min_margin),
    }
}

/// Collapses bursts of scroll events into one update per animation frame
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true if the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// The scheduled frame ran
    pub fn complete(&mut self) {
        self.pending = false;
    }
}
