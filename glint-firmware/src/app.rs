//! Shared application state and scheduler callbacks
//!
//! The display driver and sequencer live behind one blocking mutex so
//! the fast scan tick, the slower animation ticks and the dispatch loop
//! all see a consistent view. The scheduler callbacks registered at
//! boot are plain functions over this state.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use glint_core::display::MatrixDriver;
use glint_core::rng::Mwc;
use glint_core::sequencer::Sequencer;

use crate::board::MatrixPanel;

/// Everything the scheduler callbacks operate on.
pub struct App {
    pub driver: MatrixDriver<MatrixPanel>,
    pub sequencer: Sequencer<Mwc>,
}

/// Shared cell the tasks lock around.
pub type AppCell = Mutex<CriticalSectionRawMutex, RefCell<App>>;

/// Stage the next sprite of the running sequence.
pub fn next_sprite(app: &mut App) {
    let App { driver, sequencer } = app;
    sequencer.load_next_sprite(driver);
}

/// Pick a fresh random sequence once the current one has run out.
pub fn next_sequence(app: &mut App) {
    app.sequencer.load_next_sequence();
}

/// Advance the marquee or roll the message die.
pub fn text_render(app: &mut App) {
    let App { driver, sequencer } = app;
    sequencer.text_render(driver);
}
