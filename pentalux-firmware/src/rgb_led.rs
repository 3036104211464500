//! Discrete RGB indicator LED
//!
//! Three GPIO-driven channels next to the matrix. Only the controller
//! task owns this; button presses arrive as events and are applied
//! here, never from the edge-detection context.

use defmt::warn;
use embassy_rp::gpio::Output;

use pentalux_core::indicator::IndicatorChannel;

/// The board's discrete RGB LED
pub struct RgbLed {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
    green_on: bool,
    blue_on: bool,
}

impl RgbLed {
    /// Take ownership of the three channel outputs
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        Self {
            red,
            green,
            blue,
            green_on: false,
            blue_on: false,
        }
    }

    /// Drive one channel selection
    pub fn set(&mut self, channel: IndicatorChannel, on: bool) {
        match channel {
            IndicatorChannel::Red => drive(&mut self.red, on),
            IndicatorChannel::Green => {
                drive(&mut self.green, on);
                self.green_on = on;
            }
            IndicatorChannel::Blue => {
                drive(&mut self.blue, on);
                self.blue_on = on;
            }
            IndicatorChannel::White => {
                drive(&mut self.red, on);
                drive(&mut self.green, on);
                drive(&mut self.blue, on);
                self.green_on = on;
                self.blue_on = on;
            }
            IndicatorChannel::Off => {
                drive(&mut self.red, false);
                drive(&mut self.green, false);
                drive(&mut self.blue, false);
                self.green_on = false;
                self.blue_on = false;
            }
            IndicatorChannel::Unrecognized(ch) => {
                warn!("unrecognized indicator channel {}", ch);
            }
        }
    }

    /// Flip the green channel, returning the new state
    pub fn toggle_green(&mut self) -> bool {
        let on = !self.green_on;
        self.set(IndicatorChannel::Green, on);
        on
    }

    /// Flip the blue channel, returning the new state
    pub fn toggle_blue(&mut self) -> bool {
        let on = !self.blue_on;
        self.set(IndicatorChannel::Blue, on);
        on
    }
}

fn drive(pin: &mut Output<'static>, on: bool) {
    if on {
        pin.set_high();
    } else {
        pin.set_low();
    }
}
