//! Status display trait for the OLED panel
//!
//! The status panel is a text sink: the core draws short lines and a
//! single character glyph, then flushes. Nothing in the core depends on
//! the panel's internal rendering.

/// Trait for the monochrome status display
///
/// Drawing calls only touch an in-memory buffer; [`flush`] performs the
/// bus transaction. One task owns the implementation, so a flush never
/// overlaps itself.
///
/// [`flush`]: StatusDisplay::flush
#[allow(async_fn_in_trait)]
pub trait StatusDisplay {
    type Error;

    /// Clear the frame buffer
    fn clear(&mut self);

    /// Draw text at a character cell position (row 0-7, col 0-20)
    fn text(&mut self, row: u8, col: u8, text: &str);

    /// Draw a single character glyph at a character cell position
    fn glyph(&mut self, row: u8, col: u8, ch: char);

    /// Send the frame buffer to the hardware
    async fn flush(&mut self) -> Result<(), Self::Error>;
}
