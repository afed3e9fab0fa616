//! Telemetry Line Layout
//!
//! One line is `id` followed by five fields per channel
//! (`raw, mean, sd, max, min`) in channel order.

use crate::channel::CHANNEL_COUNT;

/// Identifier written in the first field of every line.
pub const DEVICE_ID: u16 = 1;

/// Statistics written per channel after the raw value.
pub const STATS_PER_CHANNEL: usize = 4;

/// Total number of fields in a telemetry line.
pub const FIELD_COUNT: usize = 1 + CHANNEL_COUNT * (1 + STATS_PER_CHANNEL);

/// Separator between two fields.
pub const FIELD_DELIMITER: char = ',';

/// Terminator of every line, as written by a serial `println`.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Digits written after the decimal point for every real field.
pub const DECIMAL_PRECISION: usize = 2;
