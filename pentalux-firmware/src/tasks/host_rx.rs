//! Host console receive task
//!
//! Reads characters from the buffered console UART and forwards them
//! to the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::HOST_INPUT;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Host RX task - forwards console characters
#[embassy_executor::task]
pub async fn host_rx_task(mut rx: BufferedUartRx) {
    info!("Host RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    let ch = byte as char;
                    // Line endings are terminal noise, not commands
                    if ch == '\r' || ch == '\n' {
                        continue;
                    }
                    info!("Character received: {}", ch);
                    HOST_INPUT.send(ch).await;
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
