//! Tick sources for the sampling loop
//!
//! - [`VirtualClock`]: advances only when the loop waits; for tests and replay
//! - [`SystemClock`]: sleeps the calling thread (requires `std`)
//!
//! Firmware builds supply their own [`TickSource`] backed by a hardware timer.

use fugit::MillisDurationU32;

pub use crate::traits::TickSource;

/// Milliseconds since the tick source started
pub type Timestamp = u64;

/// Clock that moves forward only when asked to wait
///
/// Waiting returns immediately after adding the interval to the current
/// time, so a thousand ticks run in microseconds while their timestamps
/// still read as a thousand seconds apart.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Timestamp,
    waits: u64,
}

impl VirtualClock {
    /// Creates a clock reading `start`
    pub fn new(start: Timestamp) -> Self {
        Self { now: start, waits: 0 }
    }

    /// Moves the clock forward without counting a wait
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Number of completed waits, one per tick of the loop
    pub fn waits(&self) -> u64 {
        self.waits
    }
}

impl TickSource for VirtualClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn wait(&mut self, interval: MillisDurationU32) {
        self.now += u64::from(interval.to_millis());
        self.waits += 1;
    }
}

/// Clock backed by the host's monotonic time and thread sleep
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Starts the clock at zero
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TickSource for SystemClock {
    fn now(&self) -> Timestamp {
        self.started.elapsed().as_millis() as Timestamp
    }

    fn wait(&mut self, interval: MillisDurationU32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(interval.to_millis())));
    }
}
