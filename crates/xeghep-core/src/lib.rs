// crates/xeghep-core/src/lib.rs
// Page behaviour for the xe ghep site (native + WASM compatible)
// No DOM dependencies allowed here: the DOM lives behind traits

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod error;
pub mod header;
pub mod menu;
pub mod nav;
pub mod scroll;
pub mod viewport;

pub use autoplay::{AutoAdvance, Ticker};
pub use carousel::{Carousel, CarouselLayout, CarouselView};
pub use config::CarouselConfig;
pub use error::{Result, SiteError};
