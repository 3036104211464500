//! Button edge-detection task
//!
//! Waits on falling edges of the three user buttons, filters bounces,
//! and enqueues events for the controller. This task never touches a
//! bus or output pin: recording the event and returning to waiting is
//! its entire job, so an edge arriving mid-transmission elsewhere
//! cannot interleave with that transmission.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use pentalux_core::debounce::Debouncer;
use pentalux_core::state::ButtonEvent;

use crate::channels::BUTTON_EVENTS;

/// Button task - debounced edge detection
#[embassy_executor::task]
pub async fn buttons_task(
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    mut button_joy: Input<'static>,
) {
    info!("Button task started");

    let mut debounce_a = Debouncer::new();
    let mut debounce_b = Debouncer::new();
    let mut debounce_joy = Debouncer::new();

    let started = Instant::now();

    loop {
        let (debouncer, event) = match select3(
            button_a.wait_for_falling_edge(),
            button_b.wait_for_falling_edge(),
            button_joy.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => (&mut debounce_a, ButtonEvent::ToggleGreen),
            Either3::Second(()) => (&mut debounce_b, ButtonEvent::ToggleBlue),
            Either3::Third(()) => (&mut debounce_joy, ButtonEvent::EnterBootloader),
        };

        let now_ms = started.elapsed().as_millis();
        if debouncer.accept(now_ms) {
            debug!("button event: {:?}", event);
            BUTTON_EVENTS.send(event).await;
        }
        // Bounces inside the window are dropped without a trace
    }
}
