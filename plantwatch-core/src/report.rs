//! Telemetry reports
//!
//! A [`Report`] is a snapshot of the device id, each channel's latest raw
//! value and that channel's window statistics. It renders to one telemetry
//! line and can be parsed back from one (see [`crate::telemetry`]).
//!
//! ```text
//! 1,512.00,498.33,10.21,520.00,480.00,21.50,...,610.00\r\n
//! └┬┘ └──────────────── light ───────────────┘ └ temp ┘ ... └ soil ┘
//!  id   raw    mean    sd     max     min
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::channel::{Channel, ChannelSet, Readings, CHANNEL_COUNT};
use crate::constants::buffers::TELEMETRY_LINE_CAPACITY;
use crate::constants::telemetry::{FIELD_DELIMITER, LINE_TERMINATOR};
use crate::errors::{CoreError, CoreResult};

/// One formatted telemetry line, terminator included
pub type TelemetryLine = String<TELEMETRY_LINE_CAPACITY>;

/// Raw value and window statistics of one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStats {
    /// Channel these values belong to
    pub channel: Channel,
    /// Latest raw reading
    pub raw: f32,
    /// Window mean
    pub mean: f32,
    /// Window population standard deviation
    pub std_dev: f32,
    /// Window maximum
    pub max: f32,
    /// Window minimum
    pub min: f32,
}

impl ChannelStats {
    /// The five values in telemetry field order
    pub fn fields(&self) -> [f32; 5] {
        [self.raw, self.mean, self.std_dev, self.max, self.min]
    }
}

/// Snapshot written as one telemetry line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Device identifier, first field of the line
    pub id: u16,
    /// Per-channel values in telemetry order
    pub channels: [ChannelStats; CHANNEL_COUNT],
}

impl Report {
    /// Captures the current raw values and window statistics
    ///
    /// Reads the windows only; nothing is mutated.
    pub fn capture(id: u16, readings: &Readings, windows: &ChannelSet) -> Self {
        let channels = Channel::ALL.map(|channel| {
            let window = windows.window(channel);
            ChannelStats {
                channel,
                raw: readings.get(channel),
                mean: window.mean(),
                std_dev: window.std_dev(),
                max: window.max(),
                min: window.min(),
            }
        });

        Self { id, channels }
    }

    /// Statistics of one channel
    pub fn channel(&self, channel: Channel) -> &ChannelStats {
        &self.channels[channel.index()]
    }

    /// Writes the line, terminator included, with `precision` decimals
    pub fn write_line<W: Write>(&self, out: &mut W, precision: usize) -> fmt::Result {
        write!(out, "{}", self.id)?;
        for stats in &self.channels {
            for value in stats.fields() {
                write!(out, "{}{:.*}", FIELD_DELIMITER, precision, value)?;
            }
        }
        out.write_str(LINE_TERMINATOR)
    }

    /// Renders the line into a fixed-capacity buffer
    pub fn to_line(&self, precision: usize) -> CoreResult<TelemetryLine> {
        let mut line = TelemetryLine::new();
        self.write_line(&mut line, precision)
            .map_err(|_| CoreError::LineOverflow)?;
        Ok(line)
    }
}
