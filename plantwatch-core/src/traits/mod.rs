//! Collaborator contracts of the sampling loop
//!
//! The core never touches hardware. Everything outside the loop is reached
//! through one of these traits:
//!
//! - [`SensorArray`] - raw reads, one per channel per tick
//! - [`Actuator`] - the binary output, set once per tick
//! - [`TelemetrySink`] - the serial link carrying telemetry lines
//! - [`TickSource`] - the clock pacing the ticks
//!
//! ## Usage Example
//!
//! ```rust
//! use plantwatch_core::{Channel, SensorArray};
//!
//! struct FixedProbe;
//!
//! impl SensorArray for FixedProbe {
//!     fn read(&mut self, channel: Channel) -> f32 {
//!         match channel {
//!             Channel::Temperature => 21.0,
//!             _ => 0.0,
//!         }
//!     }
//! }
//! ```

pub mod time;

pub use time::TickSource;

use crate::actuator::ActuatorLevel;
use crate::channel::{Channel, Readings};

/// Raw-value read contract of the four sensor drivers
pub trait SensorArray {
    /// Reads one raw value
    ///
    /// A driver that cannot produce a value returns `f32::NAN`. The loop
    /// issues no retries.
    fn read(&mut self, channel: Channel) -> f32;

    /// Reads every channel once, in telemetry order
    fn read_all(&mut self) -> Readings {
        let mut readings = Readings::default();
        for channel in Channel::ALL {
            readings.set(channel, self.read(channel));
        }
        readings
    }
}

/// Binary digital output driven by the soil rule
pub trait Actuator {
    /// Sets the output level for this tick
    fn apply(&mut self, level: ActuatorLevel);
}

/// Serial link carrying telemetry lines
///
/// Follows the `nb` model of embedded serial drivers: a sink that cannot
/// accept the line yet returns `nb::Error::WouldBlock` and the loop retries
/// until it goes through.
pub trait TelemetrySink {
    /// Transport error
    type Error;

    /// Writes one complete line, terminator included
    fn write_line(&mut self, line: &str) -> nb::Result<(), Self::Error>;
}
