//! Glint - POV LED Matrix Badge Firmware
//!
//! Main firmware binary for RP2040-based 8x8 badge boards. A fast scan
//! task multiplexes the matrix row by row while slower ticks pace the
//! animation sequencer; the work both request runs through a bitmask
//! scheduler dispatched from the main loop.
//!
//! With the `relay` feature the badge instead mirrors raw frames
//! received over UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glint_core::display::{MatrixDriver, ScanConfig};
use glint_core::rng::Mwc;
use glint_core::scheduler::Scheduler;
use glint_core::sequencer::{Sequencer, SequencerSlots};

mod app;
mod board;
mod tasks;

use crate::app::{App, AppCell};
use crate::board::{MatrixPanel, StatusLed};

#[cfg(feature = "relay")]
use embassy_rp::peripherals::UART0;
#[cfg(feature = "relay")]
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};

#[cfg(feature = "relay")]
embassy_rp::bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
#[cfg(feature = "relay")]
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
#[cfg(feature = "relay")]
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Shared state and the scheduler (must live forever for task references)
static APP: StaticCell<AppCell> = StaticCell::new();
static SCHEDULER: StaticCell<Scheduler<App>> = StaticCell::new();

/// Interval between dispatch polls in the main loop.
const DISPATCH_POLL_US: u64 = 200;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glint firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Matrix wiring: rows on GPIO0-7, columns on GPIO8-15
    let rows = [
        Output::new(Peri::<AnyPin>::from(p.PIN_0), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_1), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_2), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_3), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_4), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_5), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_6), Level::Low),
        Output::new(Peri::<AnyPin>::from(p.PIN_7), Level::Low),
    ];
    let cols = [
        Output::new(Peri::<AnyPin>::from(p.PIN_8), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_9), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_10), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_11), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_12), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_13), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_14), Level::High),
        Output::new(Peri::<AnyPin>::from(p.PIN_15), Level::High),
    ];
    let panel = MatrixPanel::new(rows, cols);
    let led = StatusLed::new(Output::new(Peri::<AnyPin>::from(p.PIN_25), Level::Low));
    info!("Matrix GPIO initialized");

    let mut driver = MatrixDriver::new(panel, ScanConfig::default());
    driver.load_startup_frames(&glint_content::STARTUP_FIRST, &glint_content::STARTUP_SECOND);

    // Register the sequencer's work slots before the scheduler goes
    // static and immutable.
    let sched = SCHEDULER.init(Scheduler::new());
    let slots = match register_slots(sched) {
        Ok(slots) => slots,
        Err(_) => {
            // Eight slots and three registrations, cannot happen.
            error!("Scheduler slot registration failed");
            loop {
                Timer::after_secs(1).await;
            }
        }
    };
    let sched: &'static Scheduler<App> = sched;

    // Seed the generator from the boot-to-now tick count; power-up
    // timing jitter is enough to vary the animation order between
    // boots.
    let mut rng = Mwc::new();
    rng.seed(Instant::now().as_ticks() as u32);

    #[allow(unused_mut)]
    let mut sequencer = Sequencer::new(glint_content::CATALOG, rng, slots);
    #[cfg(not(feature = "relay"))]
    sequencer.start(&mut driver);

    let app: &'static AppCell = APP.init(AppCell::new(core::cell::RefCell::new(App {
        driver,
        sequencer,
    })));
    info!("Display and sequencer initialized");

    #[cfg(feature = "relay")]
    {
        // UART0 on GPIO16/17, default 115200 baud
        let tx_buf = TX_BUF.init([0u8; 64]);
        let rx_buf = RX_BUF.init([0u8; 64]);
        let uart = Uart::new_blocking(p.UART0, p.PIN_16, p.PIN_17, UartConfig::default());
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        let (_tx, rx) = uart.split();
        info!("UART initialized for frame relay");

        spawner.spawn(tasks::relay_rx_task(rx, app)).unwrap();
    }

    spawner.spawn(tasks::scan_task(app)).unwrap();
    spawner.spawn(tasks::tick_task(app, sched, led)).unwrap();

    info!("All tasks spawned, firmware running");

    // Drain the scheduler from thread context. Each poll runs at most
    // one pending task, matching the one-slot-per-pass dispatch rule.
    loop {
        app.lock(|cell| sched.dispatch_one(&mut cell.borrow_mut()));
        Timer::after_micros(DISPATCH_POLL_US).await;
    }
}

/// Register the three sequencer task callbacks.
fn register_slots(
    sched: &mut Scheduler<App>,
) -> Result<SequencerSlots, glint_core::scheduler::RegisterError> {
    Ok(SequencerSlots {
        next_sprite: sched.register_task(app::next_sprite)?,
        next_sequence: sched.register_task(app::next_sequence)?,
        text_render: sched.register_task(app::text_render)?,
    })
}
