//! Matrix driver trait for the single-wire LED chain

use crate::frame::Frame;

/// Trait for driving the LED matrix
///
/// An implementation owns the single-wire output line exclusively; all
/// operations take `&mut self`, so two logical writers on one chain are
/// unrepresentable. Implementations must guarantee the protocol's
/// minimum latch interval between consecutive transmissions - callers
/// may push back-to-back without their own pacing.
pub trait MatrixDriver {
    type Error;

    /// Encode and transmit a full frame in physical wiring order
    fn push(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Turn every LED off
    fn clear(&mut self) -> Result<(), Self::Error> {
        self.push(&Frame::BLACK)
    }
}
