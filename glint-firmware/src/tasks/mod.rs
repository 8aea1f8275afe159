//! Embassy async tasks
//!
//! Each task runs independently; shared state lives in [`crate::app`].

#[cfg(feature = "relay")]
pub mod relay_rx;
pub mod scan;
pub mod tick;

#[cfg(feature = "relay")]
pub use relay_rx::relay_rx_task;
pub use scan::scan_task;
pub use tick::tick_task;
