//! Board-agnostic core logic for the Pentalux matrix firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Color encoding for the single-wire LED protocol
//! - The 5x5 frame model and physical wiring order
//! - Digit glyph and animation catalogs
//! - Animation playback
//! - The display coordinator state machine
//! - Button debouncing logic
//! - Hardware abstraction traits (matrix driver, status display)

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod color;
pub mod debounce;
pub mod frame;
pub mod glyphs;
pub mod indicator;
pub mod state;
pub mod traits;
