//! Sampling and statistics engine for PlantWatch
//!
//! Reads four sensor channels once per tick, keeps a rolling window of
//! recent samples per channel, drives a blinking actuator while the soil is
//! dry, and emits one telemetry line every few ticks.
//!
//! Key constraints:
//! - Runs on microcontrollers (no heap, `no_std` without the `std` feature)
//! - One tick is a pure function of the loop context and the raw readings
//! - Time is injected through [`TickSource`], so tests never sleep
//!
//! ```
//! use plantwatch_core::{Context, LoopConfig, Readings};
//!
//! let config = LoopConfig::DEFAULT;
//! let mut context = Context::new(&config).unwrap();
//!
//! let outcome = context.step(Readings::new(512.0, 21.5, 48.0, 620.0));
//! assert!(outcome.report.is_none());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging: these expand to nothing when the `log` feature is off.
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod actuator;
pub mod channel;
pub mod constants;
pub mod control;
pub mod errors;
pub mod report;
pub mod scheduler;
pub mod telemetry;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use actuator::{actuator_level, ActuatorLevel};
pub use channel::{Channel, ChannelSet, Readings};
pub use control::{Context, ControlLoop, LoopConfig, LoopError, TickOutcome};
pub use errors::{CoreError, CoreResult};
pub use report::{ChannelStats, Report, TelemetryLine};
pub use scheduler::ReportScheduler;
pub use traits::{Actuator, SensorArray, TelemetrySink, TickSource};
pub use window::Window;

/// Crate version, as reported in startup logs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
