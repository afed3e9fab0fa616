//! Telemetry line protocol, consumer side
//!
//! The ingestion service on the other end of the serial link reads each
//! line, splits it on the delimiter and names the 21 fields. This module
//! does the same thing with types: [`Report::parse`] turns a received line
//! back into a [`Report`], and [`write_header`] produces the matching column
//! header (`id,light_raw,light_mean,...,soil_min`).
//!
//! Parsing is tolerant of the usual serial noise: a trailing `\r\n` or `\n`
//! and spaces around fields are ignored. Everything else must be exact.

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::channel::{Channel, CHANNEL_COUNT};
use crate::constants::telemetry::{FIELD_COUNT, FIELD_DELIMITER, LINE_TERMINATOR};
use crate::errors::{CoreError, CoreResult};
use crate::report::{ChannelStats, Report, TelemetryLine};

/// Suffixes of the five per-channel fields, in line order
pub const FIELD_SUFFIXES: [&str; 5] = ["raw", "mean", "sd", "max", "min"];

/// Writes the column header matching the telemetry line layout
pub fn write_header<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("id")?;
    for channel in Channel::ALL {
        for suffix in FIELD_SUFFIXES {
            write!(out, "{}{}_{}", FIELD_DELIMITER, channel.field_prefix(), suffix)?;
        }
    }
    out.write_str(LINE_TERMINATOR)
}

/// Column header as a fixed-capacity line
pub fn header() -> CoreResult<TelemetryLine> {
    let mut line = TelemetryLine::new();
    write_header(&mut line).map_err(|_| CoreError::LineOverflow)?;
    Ok(line)
}

impl Report {
    /// Parses one received telemetry line
    pub fn parse(line: &str) -> CoreResult<Self> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');

        let found = line.split(FIELD_DELIMITER).count();
        if found != FIELD_COUNT {
            return Err(CoreError::FieldCount {
                expected: FIELD_COUNT,
                found,
            });
        }

        let mut fields = line.split(FIELD_DELIMITER).map(str::trim).enumerate();

        let id = match fields.next() {
            Some((index, field)) => field
                .parse::<u16>()
                .map_err(|_| CoreError::InvalidField { index })?,
            None => {
                return Err(CoreError::FieldCount {
                    expected: FIELD_COUNT,
                    found: 0,
                })
            }
        };

        let mut values = [0.0f32; FIELD_COUNT - 1];
        for (slot, (index, field)) in values.iter_mut().zip(fields) {
            *slot = field
                .parse::<f32>()
                .map_err(|_| CoreError::InvalidField { index })?;
        }

        let channels: [ChannelStats; CHANNEL_COUNT] = core::array::from_fn(|i| {
            let v = &values[i * FIELD_SUFFIXES.len()..(i + 1) * FIELD_SUFFIXES.len()];
            ChannelStats {
                channel: Channel::ALL[i],
                raw: v[0],
                mean: v[1],
                std_dev: v[2],
                max: v[3],
                min: v[4],
            }
        });

        Ok(Self { id, channels })
    }
}

impl FromStr for Report {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::parse(s)
    }
}
