// crates/xeghep-core/src/config.rs
// Carousel configuration read from the track's data attribute

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::viewport::MOBILE_BREAKPOINT;

/// Attribute on the track element holding optional JSON config
pub const CONFIG_ATTRIBUTE: &str = "data-carousel";

/// Tunables for the auto-advancing carousel.
///
/// Every field is optional in markup, e.g.
/// `<div class="track" data-carousel='{"interval_ms": 6000}'>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period
    pub interval_ms: u32,
    /// Spacing added to the measured item width per step
    pub gap_px: f64,
    /// Viewport width at or below which `narrow_items` applies
    pub breakpoint_px: f64,
    pub narrow_items: usize,
    pub wide_items: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            gap_px: 30.0,
            breakpoint_px: MOBILE_BREAKPOINT,
            narrow_items: 1,
            wide_items: 2,
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON config blob
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the raw attribute value, falling back to defaults
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            log::debug!("No carousel config attribute, using defaults");
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => {
                log::debug!("Loaded carousel config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring carousel config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(SiteError::Config("interval_ms must be positive".into()));
        }
        if self.narrow_items == 0 || self.wide_items == 0 {
            return Err(SiteError::Config("items per view must be at least 1".into()));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(SiteError::Config(format!("invalid gap_px: {}", self.gap_px)));
        }
        Ok(())
    }

    /// Items shown at once for a viewport width
    pub fn items_per_view(&self, viewport_width: f64) -> usize {
        if viewport_width <= self.breakpoint_px {
            self.narrow_items
        } else {
            self.wide_items
        }
    }
}
