//! Animation catalog and playback
//!
//! An animation is a bounded sequence of frames played at a fixed
//! cadence through the matrix driver. The catalog is a small fixed set
//! built once at startup, addressed by index.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::color::Color;
use crate::frame::Frame;
use crate::traits::MatrixDriver;

/// Maximum frames per animation
pub const MAX_FRAMES: usize = 5;

/// Pause between animation frames
///
/// Long enough to be visually perceptible and orders of magnitude above
/// the driver's latch interval.
pub const FRAME_INTERVAL_MS: u32 = 400;

/// Catalog index of the boot sweep animation
pub const BOOT_SWEEP: u8 = 0;

/// Catalog index of the pulse animation
pub const PULSE: u8 = 1;

/// Catalog index of the spinner animation
pub const SPINNER: u8 = 2;

/// Errors reported by animation playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayError<E> {
    /// The requested index has no catalog entry - a caller bug, never
    /// silently ignored
    UnknownAnimation(u8),
    /// The matrix driver failed mid-playback
    Driver(E),
}

/// An ordered sequence of at most [`MAX_FRAMES`] frames
///
/// The vector length is the frame count, so playback structurally
/// cannot read past it.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame, MAX_FRAMES>,
}

impl Animation {
    /// Build an animation from a slice of frames
    ///
    /// Returns `None` if the slice exceeds [`MAX_FRAMES`].
    pub fn from_frames(frames: &[Frame]) -> Option<Self> {
        Vec::from_slice(frames).ok().map(|frames| Self { frames })
    }

    /// Number of frames in this animation
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frames in playback order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

/// Immutable catalog of the built-in animations
pub struct AnimationCatalog {
    animations: Vec<Animation, 4>,
}

impl AnimationCatalog {
    /// Build the fixed animation set
    ///
    /// Pure function of no input; call once at startup. The built-in
    /// frame sets all fit [`MAX_FRAMES`], so construction cannot fail.
    pub fn new() -> Self {
        let mut animations = Vec::new();
        let _ = animations.push(boot_sweep());
        let _ = animations.push(pulse());
        let _ = animations.push(spinner());
        Self { animations }
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Look up an animation by index
    pub fn get(&self, index: u8) -> Option<&Animation> {
        self.animations.get(index as usize)
    }

    /// Play one catalog entry through the matrix driver
    ///
    /// Pushes every frame in order, pausing [`FRAME_INTERVAL_MS`] after
    /// each so the last frame stays visible for a full slot. Playback
    /// blocks the caller until complete; the exclusive borrow of the
    /// driver makes a second in-flight `play` on the same chain
    /// unrepresentable, which is the re-entrancy policy.
    pub fn play<M, D>(
        &self,
        index: u8,
        driver: &mut M,
        delay: &mut D,
    ) -> Result<(), PlayError<M::Error>>
    where
        M: MatrixDriver,
        D: DelayNs,
    {
        let animation = self
            .get(index)
            .ok_or(PlayError::UnknownAnimation(index))?;

        for frame in animation.frames() {
            driver.push(frame).map_err(PlayError::Driver)?;
            delay.delay_ms(FRAME_INTERVAL_MS);
        }
        Ok(())
    }
}

impl Default for AnimationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

const SWEEP_COLOR: Color = Color::new(0.0, 0.08, 0.08);
const PULSE_COLOR: Color = Color::new(0.1, 0.0, 0.0);
const SPIN_COLOR: Color = Color::new(0.02, 0.06, 0.0);

/// Rings expanding from the center, ending dark
fn boot_sweep() -> Animation {
    let mut frames = Vec::new();
    let _ = frames.push(Frame::from_bitmap(
        [0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        SWEEP_COLOR,
    ));
    let _ = frames.push(Frame::from_bitmap(
        [0b00000, 0b01110, 0b01010, 0b01110, 0b00000],
        SWEEP_COLOR,
    ));
    let _ = frames.push(Frame::from_bitmap(
        [0b11111, 0b10001, 0b10001, 0b10001, 0b11111],
        SWEEP_COLOR,
    ));
    let _ = frames.push(Frame::BLACK);
    Animation { frames }
}

/// The whole panel breathing through three intensities
fn pulse() -> Animation {
    let dim = Color::new(PULSE_COLOR.r * 0.25, 0.0, 0.0);
    let mut frames = Vec::new();
    let _ = frames.push(Frame::solid(dim));
    let _ = frames.push(Frame::solid(PULSE_COLOR));
    let _ = frames.push(Frame::solid(dim));
    let _ = frames.push(Frame::BLACK);
    Animation { frames }
}

/// A bar rotating about the center cell
fn spinner() -> Animation {
    let mut frames = Vec::new();
    let _ = frames.push(Frame::from_bitmap(
        [0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        SPIN_COLOR,
    ));
    let _ = frames.push(Frame::from_bitmap(
        [0b00001, 0b00010, 0b00100, 0b01000, 0b10000],
        SPIN_COLOR,
    ));
    let _ = frames.push(Frame::from_bitmap(
        [0b00000, 0b00000, 0b11111, 0b00000, 0b00000],
        SPIN_COLOR,
    ));
    let _ = frames.push(Frame::from_bitmap(
        [0b10000, 0b01000, 0b00100, 0b00010, 0b00001],
        SPIN_COLOR,
    ));
    Animation { frames }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;

    /// Delay that advances a shared virtual clock
    struct MockDelay<'a> {
        now_ms: &'a Cell<u64>,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.now_ms.set(self.now_ms.get() + u64::from(ns) / 1_000_000);
        }
    }

    /// Matrix driver that records push timestamps off the same clock
    struct MockMatrix<'a> {
        now_ms: &'a Cell<u64>,
        pushes: Vec<(u64, usize), 16>,
    }

    impl<'a> MockMatrix<'a> {
        fn new(now_ms: &'a Cell<u64>) -> Self {
            Self {
                now_ms,
                pushes: Vec::new(),
            }
        }
    }

    impl MatrixDriver for MockMatrix<'_> {
        type Error = Infallible;

        fn push(&mut self, frame: &Frame) -> Result<(), Self::Error> {
            self.pushes
                .push((self.now_ms.get(), frame.lit_count()))
                .unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_play_emits_one_push_per_frame() {
        let clock = Cell::new(0);
        let mut driver = MockMatrix::new(&clock);
        let mut delay = MockDelay { now_ms: &clock };
        let catalog = AnimationCatalog::new();

        let expected = catalog.get(BOOT_SWEEP).unwrap().frame_count();
        catalog
            .play(BOOT_SWEEP, &mut driver, &mut delay)
            .unwrap();

        assert_eq!(driver.pushes.len(), expected);
    }

    #[test]
    fn test_play_paces_frames() {
        let clock = Cell::new(0);
        let mut driver = MockMatrix::new(&clock);
        let mut delay = MockDelay { now_ms: &clock };
        let catalog = AnimationCatalog::new();

        catalog.play(SPINNER, &mut driver, &mut delay).unwrap();

        for pair in driver.pushes.windows(2) {
            let gap = pair[1].0 - pair[0].0;
            assert!(
                gap >= u64::from(FRAME_INTERVAL_MS),
                "frames pushed {} ms apart",
                gap
            );
        }
    }

    #[test]
    fn test_play_rejects_unknown_index() {
        let clock = Cell::new(0);
        let mut driver = MockMatrix::new(&clock);
        let mut delay = MockDelay { now_ms: &clock };
        let catalog = AnimationCatalog::new();

        let result = catalog.play(99, &mut driver, &mut delay);
        assert_eq!(result, Err(PlayError::UnknownAnimation(99)));
        assert!(driver.pushes.is_empty());
    }

    #[test]
    fn test_catalog_entries_are_bounded_and_nonempty() {
        let catalog = AnimationCatalog::new();
        assert!(!catalog.is_empty());
        for index in 0..catalog.len() as u8 {
            let animation = catalog.get(index).unwrap();
            assert!(animation.frame_count() > 0);
            assert!(animation.frame_count() <= MAX_FRAMES);
        }
    }

    #[test]
    fn test_from_frames_enforces_capacity() {
        let too_many = [Frame::BLACK; MAX_FRAMES + 1];
        assert!(Animation::from_frames(&too_many).is_none());

        let just_right = [Frame::BLACK; MAX_FRAMES];
        let animation = Animation::from_frames(&just_right).unwrap();
        assert_eq!(animation.frame_count(), MAX_FRAMES);
    }

    #[test]
    fn test_boot_sweep_ends_dark() {
        let catalog = AnimationCatalog::new();
        let sweep = catalog.get(BOOT_SWEEP).unwrap();
        let last = sweep.frames().last().unwrap();
        assert_eq!(last.lit_count(), 0);
    }
}
