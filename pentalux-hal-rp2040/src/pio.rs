//! WS2812 single-wire protocol timing
//!
//! The PIO program encodes each bit in 10 state-machine cycles: a '1'
//! holds the line high for 7 cycles and low for 3, a '0' high for 2 and
//! low for 8. Running the state machine at 10x the bit rate therefore
//! produces the 800 kHz stream the LEDs expect.
//!
//! After the last bit the line must stay low for the latch interval
//! before the next transmission, or the chain never applies the colors.

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 data rate in bits per second
pub const WS2812_FREQ_HZ: u32 = 800_000;

/// State-machine cycles per transmitted bit
pub const CYCLES_PER_BIT: u32 = 10;

/// Duration of one 24-bit pixel word on the wire, in microseconds
///
/// 24 bits at 1.25 us each.
pub const WORD_PERIOD_US: u64 = 30;

/// Minimum idle time after a transmission before the chain latches
///
/// The classic WS2812B datasheet asks for 50 us; later revisions of the
/// part need 280 us. 300 us is safe for every variant this board ships
/// with.
pub const LATCH_US: u64 = 300;

/// Calculate the clock divider for a target bit rate
///
/// The PIO program spends [`CYCLES_PER_BIT`] cycles per bit, so the
/// state machine clock is `bit_rate * CYCLES_PER_BIT`:
///
/// divider = SYS_CLK / (bit_rate * CYCLES_PER_BIT)
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point
/// divider.
pub fn calc_clock_divider(bit_rate_hz: u32) -> (u16, u8) {
    if bit_rate_hz == 0 {
        return (0xFFFF, 0xFF); // Maximum divider = stopped
    }

    // To get 8-bit fractional precision, multiply by 256 first
    let divisor = bit_rate_hz * CYCLES_PER_BIT;
    let divider_x256 = (SYS_CLK_HZ as u64 * 256) / (divisor as u64);

    // Split into integer and fractional parts
    let int_part = (divider_x256 / 256) as u32;
    let frac_part = (divider_x256 % 256) as u32;

    // Clamp to valid range
    let int_part = int_part.min(0xFFFF) as u16;
    let frac_part = frac_part.min(0xFF) as u8;

    (int_part, frac_part)
}

/// Time still to wait before the next transmission may start
///
/// `elapsed_us` is the idle time since the previous transmission ended.
pub fn latch_remaining_us(elapsed_us: u64) -> u64 {
    LATCH_US.saturating_sub(elapsed_us)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentalux_core::animation::FRAME_INTERVAL_MS;

    #[test]
    fn test_clock_divider_for_ws2812() {
        // 125 MHz / (800 kHz * 10) = 15.625 -> 15 + 160/256
        let (int_part, frac_part) = calc_clock_divider(WS2812_FREQ_HZ);
        assert_eq!(int_part, 15);
        assert_eq!(frac_part, 160);
    }

    #[test]
    fn test_clock_divider_zero_rate_stops() {
        assert_eq!(calc_clock_divider(0), (0xFFFF, 0xFF));
    }

    #[test]
    fn test_latch_remaining() {
        assert_eq!(latch_remaining_us(0), LATCH_US);
        assert_eq!(latch_remaining_us(LATCH_US / 2), LATCH_US / 2);
        assert_eq!(latch_remaining_us(LATCH_US), 0);
        assert_eq!(latch_remaining_us(LATCH_US * 10), 0);
    }

    #[test]
    fn test_frame_interval_covers_latch() {
        // Animation pacing must never undercut the latch interval
        assert!(u64::from(FRAME_INTERVAL_MS) * 1000 >= LATCH_US);
    }

    #[test]
    fn test_word_period_matches_bit_rate() {
        // 24 bits / 800 kHz = 30 us
        let bits_per_word = 24;
        let period_us = bits_per_word * 1_000_000 / WS2812_FREQ_HZ as u64;
        assert_eq!(period_us, WORD_PERIOD_US);
    }
}
