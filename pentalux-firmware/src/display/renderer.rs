//! Status screen rendering
//!
//! Builds the status screen from the shared model: indicator LED
//! states and the last character received from the host.
//!
//! The panel has 8 rows of 21 characters with the 6x8 font.

use pentalux_core::traits::StatusDisplay;

/// What the status screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusModel {
    /// Green indicator LED is lit
    pub green_on: bool,
    /// Blue indicator LED is lit
    pub blue_on: bool,
    /// Last character received from the host, if any
    pub last_char: Option<char>,
}

impl StatusModel {
    /// Initial model: both LEDs off, nothing received yet
    pub const fn new() -> Self {
        Self {
            green_on: false,
            blue_on: false,
            last_char: None,
        }
    }
}

impl Default for StatusModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the status screen and flush it to the panel
pub async fn render<S: StatusDisplay>(model: &StatusModel, display: &mut S) -> Result<(), S::Error> {
    display.clear();

    display.text(1, 1, blue_line(model.blue_on));
    display.text(2, 1, green_line(model.green_on));
    display.text(3, 1, "Last character:");
    if let Some(ch) = model.last_char {
        display.glyph(5, 10, ch);
    }

    display.flush().await
}

fn blue_line(on: bool) -> &'static str {
    if on {
        "Blue LED On"
    } else {
        "Blue LED Off"
    }
}

fn green_line(on: bool) -> &'static str {
    if on {
        "Green LED On"
    } else {
        "Green LED Off"
    }
}
