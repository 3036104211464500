//! Status panel task
//!
//! Sole owner of the OLED. Redraws when the controller signals a
//! change and on a slow refresh tick.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::i2c::{Async, I2c};
use embassy_time::{Duration, Ticker};

use crate::channels::{SCREEN_UPDATE, STATUS_MODEL};
use crate::display::{renderer, Ssd1306};

/// Refresh cadence when nothing changes
const REFRESH_INTERVAL_MS: u64 = 500;

/// Status task - renders the OLED panel
#[embassy_executor::task]
pub async fn status_task(i2c: I2c<'static, Async>) {
    info!("Status task started");

    let mut display = Ssd1306::new(i2c);

    // A panel that cannot be reached at startup is a wiring fault;
    // fail loudly instead of running half-blind
    if display.init().await.is_err() {
        defmt::panic!("status display unreachable at init");
    }

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_INTERVAL_MS));

    loop {
        let model = *STATUS_MODEL.lock().await;
        if renderer::render(&model, &mut display).await.is_err() {
            warn!("status display flush failed");
        }

        // Wake on demand or at the refresh cadence
        let _ = select(SCREEN_UPDATE.wait(), ticker.next()).await;
    }
}
