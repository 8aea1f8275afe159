//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering engine
//! and hardware-specific implementations.

pub mod output;
pub mod random;

pub use output::{RowSink, StatusIndicator};
pub use random::RandomSource;
