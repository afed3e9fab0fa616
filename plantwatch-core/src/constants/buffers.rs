//! Buffer Sizes and Memory Constraints
//!
//! All storage in the core is inline. These limits decide how much RAM the
//! four channel windows and the outgoing telemetry line take.

// ===== WINDOW SIZES =====

/// Number of samples kept per channel window.
///
/// At one tick per second this is the last six seconds of each channel.
/// Statistics are taken over every slot, so the first `WINDOW_CAPACITY - 1`
/// reports after boot are biased toward the zero fill.
pub const WINDOW_CAPACITY: usize = 6;

/// Largest capacity a window can be created with.
///
/// Sets the inline array size of every window:
/// - 64 samples × 4 bytes = 256 bytes per channel
/// - 1 KiB for the four channels together
pub const MAX_WINDOW_CAPACITY: usize = 64;

// ===== TELEMETRY =====

/// Capacity in bytes of one formatted telemetry line.
///
/// 21 fields at two decimals rarely exceed 200 bytes for realistic readings;
/// the headroom covers raw values in the tens of thousands and `NaN` fields.
pub const TELEMETRY_LINE_CAPACITY: usize = 512;
