//! Pentalux - interactive matrix firmware
//!
//! Main firmware binary for RP2040-based learning boards with a 5x5
//! WS2812 matrix, an SSD1306 status panel, and three user buttons.
//! Host characters select digit glyphs on the matrix; anything else
//! clears it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pentalux_hal_rp2040::pins;
use pentalux_hal_rp2040::Ws2812Matrix;

use crate::rgb_led::RgbLed;

mod channels;
mod display;
mod rgb_led;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pentalux firmware starting...");

    // Initialize RP2040 peripherals. Everything below is acquired by
    // ownership exactly once; an unavailable resource is a startup
    // panic, never a degraded run.
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Host console UART
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized for host console");

    // Setup PIO0 for the WS2812 matrix (data on GPIO7, see pins.rs)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let matrix = Ws2812Matrix::new(&mut common, sm0, p.PIN_7);

    info!("PIO matrix driver initialized");

    // Setup I2C1 for the SSD1306 status panel (SDA=GPIO14, SCL=GPIO15)
    let i2c_config = {
        let mut cfg = i2c::Config::default();
        cfg.frequency = pins::I2C_FREQ_HZ;
        cfg
    };
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    info!("I2C initialized for status panel");

    // Discrete RGB indicator LED
    let rgb = RgbLed::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );

    // User buttons, active low with internal pull-ups
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);
    let button_joy = Input::new(p.PIN_22, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::matrix_task(matrix)).unwrap();
    spawner.spawn(tasks::status_task(i2c)).unwrap();
    spawner.spawn(tasks::host_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::buttons_task(button_a, button_b, button_joy))
        .unwrap();
    spawner.spawn(tasks::controller_task(rgb)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
