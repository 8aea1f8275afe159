//! Row scan task
//!
//! Drives the multiplex at a fixed rate. At 500us per row a full frame
//! repeats every 4ms, comfortably above the flicker-fusion threshold
//! even when dot correction stretches the cycle to 32 steps.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::app::AppCell;

/// Interval between row asserts in microseconds.
pub const SCAN_INTERVAL_US: u64 = 500;

/// Scan task - steps the display multiplex forever.
#[embassy_executor::task]
pub async fn scan_task(app: &'static AppCell) {
    info!("Scan task started");

    let mut ticker = Ticker::every(Duration::from_micros(SCAN_INTERVAL_US));

    loop {
        ticker.next().await;
        app.lock(|cell| cell.borrow_mut().driver.scan_step());
    }
}
