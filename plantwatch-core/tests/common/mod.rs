//! Common test collaborators for integration tests
//!
//! Provides:
//! - Scripted sensors replaying fixed readings
//! - An actuator that records every level it was driven to
//! - An in-memory serial sink, optionally busy for a few polls per line

#![allow(dead_code)]

use plantwatch_core::{
    time::VirtualClock, Actuator, ActuatorLevel, Channel, ControlLoop, LoopConfig, Readings,
    SensorArray, TelemetrySink,
};

/// Sensors that cycle through a fixed list of readings
pub struct ScriptedSensors {
    script: Vec<Readings>,
    position: usize,
    pending: Readings,
}

impl ScriptedSensors {
    pub fn new(script: Vec<Readings>) -> Self {
        assert!(!script.is_empty(), "script needs at least one reading");
        Self {
            script,
            position: 0,
            pending: Readings::default(),
        }
    }

    /// Same readings on every tick
    pub fn constant(readings: Readings) -> Self {
        Self::new(vec![readings])
    }
}

impl SensorArray for ScriptedSensors {
    // `read_all` asks for light first; that starts a new tick
    fn read(&mut self, channel: Channel) -> f32 {
        if channel == Channel::Light {
            self.pending = self.script[self.position % self.script.len()];
            self.position += 1;
        }
        self.pending.get(channel)
    }
}

/// Actuator that keeps every level it was set to
#[derive(Default)]
pub struct RecordingActuator {
    pub levels: Vec<ActuatorLevel>,
}

impl RecordingActuator {
    pub fn bits(&self) -> Vec<u8> {
        self.levels.iter().map(|&level| level.into()).collect()
    }
}

impl Actuator for RecordingActuator {
    fn apply(&mut self, level: ActuatorLevel) {
        self.levels.push(level);
    }
}

/// Error returned by a sink configured to fail
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDown;

/// In-memory serial link
#[derive(Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
    /// Polls answered with `WouldBlock` before each line is accepted
    pub busy_polls: usize,
    pub polls: usize,
    pub fail: bool,
    busy_left: usize,
}

impl MemorySink {
    pub fn busy(busy_polls: usize) -> Self {
        Self {
            busy_polls,
            busy_left: busy_polls,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl TelemetrySink for MemorySink {
    type Error = LinkDown;

    fn write_line(&mut self, line: &str) -> nb::Result<(), Self::Error> {
        self.polls += 1;
        if self.fail {
            return Err(nb::Error::Other(LinkDown));
        }
        if self.busy_left > 0 {
            self.busy_left -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.busy_left = self.busy_polls;
        self.lines.push(line.to_string());
        Ok(())
    }
}

pub type TestLoop = ControlLoop<ScriptedSensors, RecordingActuator, MemorySink, VirtualClock>;

/// Loop with the given window capacity and periodicity, defaults otherwise
pub fn test_loop(
    capacity: usize,
    periodicity: u32,
    sensors: ScriptedSensors,
    sink: MemorySink,
) -> TestLoop {
    let config = LoopConfig {
        window_capacity: capacity,
        periodicity,
        ..LoopConfig::DEFAULT
    };
    ControlLoop::new(
        &config,
        sensors,
        RecordingActuator::default(),
        sink,
        VirtualClock::new(0),
    )
    .expect("valid test config")
}

/// Runs `ticks` ticks, panicking on any tick error
pub fn run_ticks(control: &mut TestLoop, ticks: usize) {
    for tick in 0..ticks {
        if let Err(err) = control.run_once() {
            panic!("tick {} failed: {:?}", tick, err);
        }
    }
}
