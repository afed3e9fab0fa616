//! Error Types for the Sampling Engine
//!
//! ## Design Philosophy
//!
//! The core has very few ways to fail, and almost all of them happen before
//! the first tick:
//!
//! 1. **Construction**: a window or scheduler built with a size the fixed
//!    storage cannot honour. These fail fast at startup.
//!
//! 2. **Formatting**: a telemetry line that does not fit its fixed-capacity
//!    buffer. The running loop logs it and carries on.
//!
//! 3. **Parsing**: a received telemetry line with the wrong shape. Only the
//!    consumer side of the line protocol sees these.
//!
//! Sensor faults are deliberately absent. A failed read arrives as `NaN`
//! and flows through the windows like any other value.
//!
//! Like the rest of the crate, errors are `Copy` and carry no heap data.

use thiserror_no_std::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the sampling engine and the telemetry codec
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Window capacity is zero or larger than the inline storage
    #[error("Invalid window capacity {requested}, must be in 1..={max}")]
    InvalidCapacity {
        /// Capacity asked for
        requested: usize,
        /// Largest capacity the storage supports
        max: usize,
    },

    /// Report periodicity of zero ticks
    #[error("Report periodicity must be at least one tick")]
    InvalidPeriodicity,

    /// Formatted telemetry line exceeded its buffer
    #[error("Telemetry line exceeds buffer capacity")]
    LineOverflow,

    /// Telemetry line has the wrong number of fields
    #[error("Expected {expected} telemetry fields, found {found}")]
    FieldCount {
        /// Fields in a well-formed line
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// Telemetry field could not be parsed as a number
    #[error("Telemetry field {index} is not a valid number")]
    InvalidField {
        /// Zero-based position of the offending field
        index: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CoreError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCapacity { requested, max } =>
                defmt::write!(fmt, "Invalid capacity {}, max {}", requested, max),
            Self::InvalidPeriodicity =>
                defmt::write!(fmt, "Invalid periodicity"),
            Self::LineOverflow =>
                defmt::write!(fmt, "Telemetry line overflow"),
            Self::FieldCount { expected, found } =>
                defmt::write!(fmt, "Expected {} fields, found {}", expected, found),
            Self::InvalidField { index } =>
                defmt::write!(fmt, "Invalid field {}", index),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = CoreError::InvalidCapacity { requested: 0, max: 64 };
        assert_eq!(err.to_string(), "Invalid window capacity 0, must be in 1..=64");

        let err = CoreError::FieldCount { expected: 21, found: 20 };
        assert_eq!(err.to_string(), "Expected 21 telemetry fields, found 20");
    }
}
