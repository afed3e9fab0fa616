//! Time-Related Constants
//!
//! Tick pacing for the sampling loop. One tick reads every channel once.

use fugit::MillisDurationU32;

/// Pause between two consecutive ticks.
///
/// 1 Hz is plenty for soil and air conditions, which change over minutes.
pub const TICK_INTERVAL: MillisDurationU32 = MillisDurationU32::millis(1000);

/// Number of ticks between two telemetry lines.
///
/// With [`TICK_INTERVAL`] at one second this is one line every 30 seconds.
pub const REPORT_PERIODICITY: u32 = 30;
