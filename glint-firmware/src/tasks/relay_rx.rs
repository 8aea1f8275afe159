//! Frame relay UART receive task
//!
//! Accepts raw 8-byte frames from a host and pushes them straight onto
//! the display. The link carries no framing, so the stream is only in
//! sync if the host starts on a frame boundary and never drops bytes.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use glint_core::relay::FrameRelay;

use crate::app::AppCell;

/// Buffer size for UART receive.
const RX_BUF_SIZE: usize = 32;

/// Relay RX task - feeds received bytes into the frame relay.
#[embassy_executor::task]
pub async fn relay_rx_task(mut rx: BufferedUartRx, app: &'static AppCell) {
    info!("Relay RX task started");

    let mut relay = FrameRelay::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                app.lock(|cell| {
                    let mut a = cell.borrow_mut();
                    for &byte in &buf[..n] {
                        relay.on_byte(byte, &mut a.driver);
                    }
                });
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
