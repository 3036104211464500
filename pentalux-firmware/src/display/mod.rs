//! Status panel support
//!
//! The SSD1306 driver, its font, and the screen renderer.

pub mod font;
pub mod renderer;
pub mod ssd1306;

pub use renderer::StatusModel;
pub use ssd1306::Ssd1306;
