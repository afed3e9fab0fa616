//! Sensor channels and their per-channel state
//!
//! The four channels always appear in the same order: light, temperature,
//! air humidity, soil humidity. That order is the telemetry field order and
//! the index order of [`Readings`] and [`ChannelSet`].

use crate::errors::CoreResult;
use crate::window::Window;

/// Number of sensor channels
pub const CHANNEL_COUNT: usize = 4;

/// One sensor stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Channel {
    /// Ambient light, raw ADC counts
    Light,
    /// Air temperature, °C
    Temperature,
    /// Relative air humidity, %
    AirHumidity,
    /// Soil moisture probe, raw ADC counts
    SoilHumidity,
}

impl Channel {
    /// All channels in telemetry order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Light,
        Channel::Temperature,
        Channel::AirHumidity,
        Channel::SoilHumidity,
    ];

    /// Position of this channel in telemetry order
    pub const fn index(self) -> usize {
        match self {
            Channel::Light => 0,
            Channel::Temperature => 1,
            Channel::AirHumidity => 2,
            Channel::SoilHumidity => 3,
        }
    }

    /// Prefix used for this channel's telemetry field names
    pub const fn field_prefix(self) -> &'static str {
        match self {
            Channel::Light => "light",
            Channel::Temperature => "temp",
            Channel::AirHumidity => "humid",
            Channel::SoilHumidity => "soil",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.field_prefix())
    }
}

/// One raw value per channel, taken in a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings([f32; CHANNEL_COUNT]);

impl Readings {
    /// Builds readings in channel order
    pub const fn new(light: f32, temperature: f32, air_humidity: f32, soil_humidity: f32) -> Self {
        Self([light, temperature, air_humidity, soil_humidity])
    }

    /// Raw value of one channel
    pub fn get(&self, channel: Channel) -> f32 {
        self.0[channel.index()]
    }

    /// Overwrites the raw value of one channel
    pub fn set(&mut self, channel: Channel, value: f32) {
        self.0[channel.index()] = value;
    }

    /// Values in channel order
    pub fn as_array(&self) -> &[f32; CHANNEL_COUNT] {
        &self.0
    }
}

impl From<[f32; CHANNEL_COUNT]> for Readings {
    fn from(values: [f32; CHANNEL_COUNT]) -> Self {
        Self(values)
    }
}

/// The four channel windows, one per channel, never shared
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    windows: [Window; CHANNEL_COUNT],
}

impl ChannelSet {
    /// Creates four zero-filled windows of the same capacity
    pub fn new(capacity: usize) -> CoreResult<Self> {
        Ok(Self {
            windows: [
                Window::new(capacity)?,
                Window::new(capacity)?,
                Window::new(capacity)?,
                Window::new(capacity)?,
            ],
        })
    }

    /// Window of one channel
    pub fn window(&self, channel: Channel) -> &Window {
        &self.windows[channel.index()]
    }

    /// Pushes every reading into its own channel's window
    pub fn push(&mut self, readings: &Readings) {
        for channel in Channel::ALL {
            self.windows[channel.index()].push(readings.get(channel));
        }
    }
}
