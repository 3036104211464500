//! Matrix task
//!
//! Sole owner of the WS2812 driver. Plays the boot animation once,
//! then serves requests from the coordinator. Because every write to
//! the chain goes through this task, two transmissions can never
//! overlap no matter what the rest of the firmware does.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_time::Delay;

use pentalux_core::animation::{AnimationCatalog, PlayError, BOOT_SWEEP};
use pentalux_core::glyphs::GlyphCatalog;
use pentalux_core::state::MatrixRequest;
use pentalux_hal_rp2040::Ws2812Matrix;

use crate::channels::MATRIX_REQUESTS;

/// Matrix task - drives the LED chain
#[embassy_executor::task]
pub async fn matrix_task(mut driver: Ws2812Matrix<'static, PIO0, 0>) {
    info!("Matrix task started");

    // Catalogs are built once and never mutated
    let glyphs = GlyphCatalog::new();
    let animations = AnimationCatalog::new();

    // Boot animation before serving any requests; playback blocks and
    // holds the driver for its whole duration
    if let Err(e) = animations.play(BOOT_SWEEP, &mut driver, &mut Delay) {
        match e {
            PlayError::UnknownAnimation(index) => {
                error!("animation {} missing from catalog", index)
            }
            PlayError::Driver(_) => {}
        }
    }

    loop {
        match MATRIX_REQUESTS.receive().await {
            MatrixRequest::Show(value) => {
                debug!("matrix: show digit {}", value);
                driver.write(glyphs.digit(value));
            }
            MatrixRequest::Clear => {
                debug!("matrix: clear");
                driver.blank();
            }
        }
    }
}
