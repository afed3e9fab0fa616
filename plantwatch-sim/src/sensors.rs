//! Simulated sensor array
//!
//! Each read draws a uniform value from the channel's range. With a non-zero
//! fault rate a read occasionally returns `NaN`, the same sentinel a real
//! driver hands back when the probe does not answer.

use plantwatch_core::{Channel, SensorArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Closed-open range `[low, high)` of simulated values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Smallest value drawn
    pub low: f32,
    /// Upper bound, excluded unless equal to `low`
    pub high: f32,
}

impl ChannelRange {
    /// Range from `low` to `high`
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Default range of each channel
    ///
    /// Soil spans both sides of the dryness threshold so the actuator gets
    /// exercised.
    pub const fn default_for(channel: Channel) -> Self {
        match channel {
            Channel::Light => Self::new(200.0, 800.0),
            Channel::Temperature => Self::new(18.0, 32.0),
            Channel::AirHumidity => Self::new(40.0, 80.0),
            Channel::SoilHumidity => Self::new(150.0, 650.0),
        }
    }
}

/// Random sensor readings for running the loop without hardware
pub struct SimulatedSensors {
    rng: StdRng,
    ranges: [ChannelRange; 4],
    fault_rate: f64,
}

impl SimulatedSensors {
    /// Simulator seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible simulator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            ranges: Channel::ALL.map(ChannelRange::default_for),
            fault_rate: 0.0,
        }
    }

    /// Overrides the range of one channel
    pub fn with_range(mut self, channel: Channel, range: ChannelRange) -> Self {
        self.ranges[channel.index()] = range;
        self
    }

    /// Probability in `0.0..=1.0` that a read fails and yields `NaN`
    pub fn with_fault_rate(mut self, fault_rate: f64) -> Self {
        self.fault_rate = fault_rate.clamp(0.0, 1.0);
        self
    }

    /// Range currently used for `channel`
    pub fn range(&self, channel: Channel) -> ChannelRange {
        self.ranges[channel.index()]
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorArray for SimulatedSensors {
    fn read(&mut self, channel: Channel) -> f32 {
        if self.fault_rate > 0.0 && self.rng.gen_bool(self.fault_rate) {
            log::debug!("simulated {} probe fault", channel.field_prefix());
            return f32::NAN;
        }

        let range = self.ranges[channel.index()];
        if range.high <= range.low {
            return range.low;
        }
        self.rng.gen_range(range.low..range.high)
    }
}
