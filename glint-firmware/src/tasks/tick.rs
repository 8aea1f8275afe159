//! Animation tick task
//!
//! Provides the two slow time bases the sequencer runs on: the sprite
//! tick that paces frame advances and the rarer update tick that ages
//! out whole sequences. Also blinks the status LED as a heartbeat.

use defmt::*;
use embassy_time::{Duration, Ticker};

use glint_core::scheduler::Scheduler;
use glint_core::traits::StatusIndicator;

use crate::app::{App, AppCell};
use crate::board::StatusLed;

/// Sprite tick interval in milliseconds.
pub const SPRITE_TICK_MS: u64 = 10;

/// Sprite ticks per sequence-aging update tick.
pub const UPDATE_DIVIDER: u32 = 25;

/// Sprite ticks per heartbeat LED toggle.
pub const HEARTBEAT_DIVIDER: u32 = 50;

/// Tick task - paces the sequencer and the heartbeat LED.
#[embassy_executor::task]
pub async fn tick_task(app: &'static AppCell, sched: &'static Scheduler<App>, mut led: StatusLed) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(SPRITE_TICK_MS));
    let mut count: u32 = 0;
    let mut led_on = false;

    loop {
        ticker.next().await;
        count = count.wrapping_add(1);

        app.lock(|cell| {
            let mut a = cell.borrow_mut();
            a.sequencer.sprite_tick(sched);
            if count % UPDATE_DIVIDER == 0 {
                a.sequencer.update_tick(sched);
            }
        });

        if count % HEARTBEAT_DIVIDER == 0 {
            led_on = !led_on;
            led.set(led_on);
        }
    }
}
