// crates/xeghep-core/src/error.rs
// Error types for page behaviour setup

use thiserror::Error;

/// Errors raised while wiring a behaviour to the page.
///
/// None of these reach the visitor: a behaviour that fails to set up
/// simply stays inactive.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required element (or the window/document itself) is absent
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A DOM call threw a JS exception
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience type alias for Result using SiteError
pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// Missing structure means "not on this page", not a failure
    pub fn is_missing_element(&self) -> bool {
        matches!(self, SiteError::MissingElement(_))
    }
}
