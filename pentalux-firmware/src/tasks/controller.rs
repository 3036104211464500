//! Main controller task
//!
//! The coordinator: drains host characters and debounced button
//! events, steps the display state machine, queues matrix work, drives
//! the indicator LED, and keeps the status screen model current.

use defmt::*;
use embassy_futures::select::{select, Either};

use pentalux_core::state::{ButtonEvent, DisplayState, HostCommand};

use crate::channels::{BUTTON_EVENTS, HOST_INPUT, MATRIX_REQUESTS, SCREEN_UPDATE, STATUS_MODEL};
use crate::rgb_led::RgbLed;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut rgb: RgbLed) {
    info!("Controller task started");

    let mut state = DisplayState::Idle;

    loop {
        match select(HOST_INPUT.receive(), BUTTON_EVENTS.receive()).await {
            Either::First(ch) => {
                let command = HostCommand::from_char(ch);
                let (next, request) = state.apply(command);
                debug!("host '{}': {:?} -> {:?}", ch, state, next);
                state = next;

                // The matrix task performs the actual transmission
                MATRIX_REQUESTS.send(request).await;

                {
                    let mut model = STATUS_MODEL.lock().await;
                    model.last_char = Some(ch);
                }
                SCREEN_UPDATE.signal(());
            }

            Either::Second(event) => {
                match event {
                    ButtonEvent::ToggleGreen => {
                        let on = rgb.toggle_green();
                        info!("Green LED is now: {}", on);
                        STATUS_MODEL.lock().await.green_on = on;
                    }
                    ButtonEvent::ToggleBlue => {
                        let on = rgb.toggle_blue();
                        info!("Blue LED is now: {}", on);
                        STATUS_MODEL.lock().await.blue_on = on;
                    }
                    ButtonEvent::EnterBootloader => {
                        // Deliberate full restart, not an error path
                        info!("Rebooting into USB bootloader");
                        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
                    }
                }
                SCREEN_UPDATE.signal(());
            }
        }
    }
}
