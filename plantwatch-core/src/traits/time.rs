//! Tick Source Abstraction
//!
//! The loop never sleeps directly. Between two ticks it asks a
//! [`TickSource`] to wait out the interval, so the same loop runs against a
//! hardware timer, a thread sleep, or a virtual clock in tests where no real
//! time passes.
//!
//! ## Example Implementation
//!
//! ```rust
//! use fugit::MillisDurationU32;
//! use plantwatch_core::traits::TickSource;
//! use plantwatch_core::time::Timestamp;
//!
//! struct BusyWaitTimer {
//!     elapsed_ms: Timestamp,
//! }
//!
//! impl TickSource for BusyWaitTimer {
//!     fn now(&self) -> Timestamp {
//!         self.elapsed_ms
//!     }
//!
//!     fn wait(&mut self, interval: MillisDurationU32) {
//!         // spin on a hardware counter here
//!         self.elapsed_ms += u64::from(interval.to_millis());
//!     }
//! }
//! ```

use fugit::MillisDurationU32;

use crate::time::Timestamp;

/// Clock that paces the sampling loop
pub trait TickSource {
    /// Milliseconds since the source started
    fn now(&self) -> Timestamp;

    /// Blocks until `interval` has elapsed
    fn wait(&mut self, interval: MillisDurationU32);
}
