//! Compile-time configuration for PlantWatch Core
//!
//! Every tunable of the sampling loop lives here. There is no runtime
//! configuration: [`LoopConfig::DEFAULT`](crate::control::LoopConfig::DEFAULT)
//! is assembled from these values, and a different deployment means a
//! different build.
//!
//! ## Organization
//!
//! - **Buffers**: window sizes and telemetry line storage
//! - **Time**: tick pacing and report cadence
//! - **Telemetry**: line layout and number formatting
//! - **Actuator**: irrigation trigger threshold

/// Window sizes and fixed-capacity storage limits.
pub mod buffers;

/// Tick interval and report periodicity.
pub mod time;

/// Telemetry line layout and formatting.
pub mod telemetry;

/// Actuator trigger thresholds.
pub mod actuator;

// Re-export commonly used constants for convenience
pub use buffers::{MAX_WINDOW_CAPACITY, TELEMETRY_LINE_CAPACITY, WINDOW_CAPACITY};

pub use time::{REPORT_PERIODICITY, TICK_INTERVAL};

pub use telemetry::{DECIMAL_PRECISION, DEVICE_ID, FIELD_COUNT, FIELD_DELIMITER, LINE_TERMINATOR};

pub use actuator::DRYNESS_THRESHOLD;
