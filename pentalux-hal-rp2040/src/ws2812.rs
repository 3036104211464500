//! PIO-based WS2812 matrix driver
//!
//! Uses RP2040's Programmable I/O to serialize pixel words onto the
//! single data line with the protocol's pulse timing. The CPU only
//! feeds encoded words into the TX FIFO; the state machine owns the
//! waveform.

use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use embassy_time::{block_for, Duration, Instant};
use fixed::types::U24F8;

use pentalux_core::frame::Frame;
use pentalux_core::traits::MatrixDriver;

use crate::pio::{calc_clock_divider, latch_remaining_us, WORD_PERIOD_US, WS2812_FREQ_HZ};

/// PIO WS2812 matrix driver
///
/// Owns one PIO state machine and the data pin for the process
/// lifetime; there is no way to obtain a second writer for the same
/// chain. Both [`push`] and [`clear`] enforce the latch interval
/// against the end of the previous transmission, so callers may issue
/// them back-to-back.
///
/// [`push`]: MatrixDriver::push
/// [`clear`]: MatrixDriver::clear
pub struct Ws2812Matrix<'d, PIO: Instance, const SM: usize> {
    /// PIO state machine generating the waveform
    sm: StateMachine<'d, PIO, SM>,
    /// When the previous transmission finished draining
    last_tx_end: Instant,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812Matrix<'d, PIO, SM> {
    /// Create a new matrix driver
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the chain's data input (must be
    ///   PIO-capable)
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // Side-set drives the line level while `out` consumes one data
        // bit per loop. Cycle counts per bit: '1' = 7 high + 3 low,
        // '0' = 2 high + 8 low.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "out x, 1       side 0 [2]",
            "jmp !x do_zero side 1 [1]",
            "do_one:",
            "jmp bitloop    side 1 [4]",
            "do_zero:",
            "nop            side 0 [4]",
            ".wrap",
        );

        let installed = common.load_program(&prg.program);

        // Create the PIO pin for the data output
        let data_pio_pin = common.make_pio_pin(data_pin);

        // Configure state machine
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);

        // One 24-bit pixel per FIFO word, most significant bit first
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        // The program never receives; give the TX FIFO all 8 slots
        cfg.fifo_join = FifoJoin::TxOnly;

        let (int_div, frac_div) = calc_clock_divider(WS2812_FREQ_HZ);

        // Convert to U24F8: integer in upper 24 bits, fractional in lower 8 bits
        let divider_bits = ((int_div as u32) << 8) | (frac_div as u32);
        cfg.clock_divider = U24F8::from_bits(divider_bits);

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self {
            sm,
            last_tx_end: Instant::now(),
        }
    }

    /// Encode and transmit a full frame in physical wiring order
    ///
    /// Blocks for the transmission (~750 us for 25 pixels) after first
    /// waiting out whatever remains of the previous latch interval.
    pub fn write(&mut self, frame: &Frame) {
        self.wait_latch();

        for color in frame.iter_wired() {
            let word = color.encode();
            while !self.sm.tx().try_push(word) {}
        }

        // The FIFO draining does not mean the line is idle: the shift
        // register still holds the final word.
        while !self.sm.tx().empty() {}
        block_for(Duration::from_micros(WORD_PERIOD_US));

        self.last_tx_end = Instant::now();
    }

    /// Turn every LED off
    pub fn blank(&mut self) {
        self.write(&Frame::BLACK);
    }

    /// Block until the latch interval since the last transmission has
    /// elapsed
    fn wait_latch(&self) {
        let elapsed_us = self.last_tx_end.elapsed().as_micros();
        let remaining = latch_remaining_us(elapsed_us);
        if remaining > 0 {
            block_for(Duration::from_micros(remaining));
        }
    }
}

impl<PIO: Instance, const SM: usize> MatrixDriver for Ws2812Matrix<'_, PIO, SM> {
    type Error = core::convert::Infallible;

    fn push(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.write(frame);
        Ok(())
    }
}
