//! Soil-driven actuator rule
//!
//! While the soil reading stays under the dryness threshold the output
//! follows the parity of the tick counter, so it blinks on and off once per
//! tick. Any other reading (including `NaN`) switches it off. The decision is
//! taken fresh every tick: no hysteresis, no debouncing.

/// Level of the binary actuator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuatorLevel {
    /// Output off (0)
    #[default]
    Low,
    /// Output on (1)
    High,
}

impl ActuatorLevel {
    /// `true` when the output is on
    pub fn is_high(self) -> bool {
        self == ActuatorLevel::High
    }
}

impl From<bool> for ActuatorLevel {
    fn from(high: bool) -> Self {
        if high {
            ActuatorLevel::High
        } else {
            ActuatorLevel::Low
        }
    }
}

impl From<ActuatorLevel> for u8 {
    fn from(level: ActuatorLevel) -> Self {
        match level {
            ActuatorLevel::Low => 0,
            ActuatorLevel::High => 1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ActuatorLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", u8::from(*self))
    }
}

/// Decides the actuator output for one tick
///
/// `tick_count` is the report counter as it stands before this tick's
/// increment.
pub fn actuator_level(soil_raw: f32, tick_count: u32, threshold: f32) -> ActuatorLevel {
    if soil_raw < threshold {
        ActuatorLevel::from(tick_count % 2 == 1)
    } else {
        ActuatorLevel::Low
    }
}
