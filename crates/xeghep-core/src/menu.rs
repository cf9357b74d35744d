// crates/xeghep-core/src/menu.rs
// Mobile menu open/closed state

use crate::viewport::is_mobile;

/// Delay before closing the menu after a nav link is tapped
pub const MENU_CLOSE_DELAY_MS: u32 = 300;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true when this actually closed the menu
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Body `overflow` while in this state (scroll locked when open)
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// A click somewhere in the document closes an open mobile menu,
    /// unless it landed inside the nav or on the toggle itself
    pub fn closes_on_document_click(
        &self,
        viewport_width: f64,
        inside_nav: bool,
        on_toggle: bool,
    ) -> bool {
        self.open && is_mobile(viewport_width) && !inside_nav && !on_toggle
    }

    /// Tapping a nav link on mobile closes the menu after a short delay
    pub fn closes_after_link_click(viewport_width: f64, target_is_link: bool) -> bool {
        target_is_link && is_mobile(viewport_width)
    }

    /// Growing past the breakpoint always closes the menu
    pub fn closes_on_resize(viewport_width: f64) -> bool {
        !is_mobile(viewport_width)
    }
}
