//! RP2040-specific hardware support for the Pentalux firmware
//!
//! - WS2812 single-wire protocol timing math
//! - PIO-based matrix driver (implements `pentalux_core::MatrixDriver`)
//! - Board pin assignments

#![no_std]

pub mod pins;
pub mod pio;
pub mod ws2812;

pub use ws2812::Ws2812Matrix;
