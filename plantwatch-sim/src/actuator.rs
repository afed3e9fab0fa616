//! Actuator stand-in that logs instead of switching a pump

use plantwatch_core::{Actuator, ActuatorLevel};

/// Logs every change of the actuator output
#[derive(Debug, Default)]
pub struct LoggingActuator {
    level: ActuatorLevel,
    edges: u64,
}

impl LoggingActuator {
    /// Actuator starting in the off state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current output level
    pub fn level(&self) -> ActuatorLevel {
        self.level
    }

    /// Number of on/off transitions so far
    pub fn edges(&self) -> u64 {
        self.edges
    }
}

impl Actuator for LoggingActuator {
    fn apply(&mut self, level: ActuatorLevel) {
        if level != self.level {
            self.edges += 1;
            log::info!("actuator {}", if level.is_high() { "on" } else { "off" });
        }
        self.level = level;
    }
}
