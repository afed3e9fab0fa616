//! Sampling and control loop
//!
//! ## Overview
//!
//! One tick of the loop:
//!
//! ```text
//! read 4 sensors ─► push into windows ─► actuator rule ─► count tick
//!                                                            │
//!                          ┌─────────── counter == P ? ◄─────┘
//!                          ▼
//!                 format + emit line, counter = 0 ─► wait tick interval
//! ```
//!
//! The work is split in two layers:
//!
//! - [`Context`] owns all loop state (windows, report counter, latest
//!   readings) and implements one tick as a pure function of the context and
//!   the raw readings. No clock, no I/O; tests drive it tick by tick.
//! - [`ControlLoop`] binds a context to its collaborators (sensors,
//!   actuator, serial sink, tick source) and runs it forever.
//!
//! ## Failure Model
//!
//! Only construction can fail hard. While running, a line that does not fit
//! its buffer or a sink error is reported from [`ControlLoop::run_once`];
//! [`ControlLoop::run`] logs it and moves on to the next tick.

use core::fmt;

use fugit::MillisDurationU32;

use crate::actuator::{actuator_level, ActuatorLevel};
use crate::channel::{Channel, ChannelSet, Readings};
use crate::constants;
use crate::errors::{CoreError, CoreResult};
use crate::report::Report;
use crate::scheduler::ReportScheduler;
use crate::traits::{Actuator, SensorArray, TelemetrySink, TickSource};

/// Parameters of the sampling loop
///
/// Deployments use [`LoopConfig::DEFAULT`], built from [`crate::constants`].
/// Other values exist for tests and bench setups; nothing reconfigures a
/// running loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Samples kept per channel window
    pub window_capacity: usize,
    /// Ticks between telemetry lines
    pub periodicity: u32,
    /// Pause between ticks
    pub tick_interval: MillisDurationU32,
    /// Soil reading under which the actuator blinks
    pub dryness_threshold: f32,
    /// First field of every telemetry line
    pub device_id: u16,
    /// Decimals written for every real field
    pub precision: usize,
}

impl LoopConfig {
    /// Compile-time deployment configuration
    pub const DEFAULT: LoopConfig = LoopConfig {
        window_capacity: constants::WINDOW_CAPACITY,
        periodicity: constants::REPORT_PERIODICITY,
        tick_interval: constants::TICK_INTERVAL,
        dryness_threshold: constants::DRYNESS_THRESHOLD,
        device_id: constants::DEVICE_ID,
        precision: constants::DECIMAL_PRECISION,
    };
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What one tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Level to drive the actuator to
    pub actuator: ActuatorLevel,
    /// Report due on this tick, if any
    pub report: Option<Report>,
}

/// All state carried from one tick to the next
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    config: LoopConfig,
    channels: ChannelSet,
    scheduler: ReportScheduler,
    latest: Readings,
}

impl Context {
    /// Creates zero-filled windows and a reset counter
    ///
    /// Fails on a zero or oversized window capacity or a zero periodicity.
    pub fn new(config: &LoopConfig) -> CoreResult<Self> {
        let channels = ChannelSet::new(config.window_capacity)?;
        let scheduler = ReportScheduler::new(config.periodicity)?;

        log_debug!(
            "sampling context ready: capacity={} periodicity={} interval={}ms",
            config.window_capacity,
            config.periodicity,
            config.tick_interval.to_millis()
        );

        Ok(Self {
            config: *config,
            channels,
            scheduler,
            latest: Readings::default(),
        })
    }

    /// Configuration this context was built with
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Channel windows
    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    /// Ticks since the last report
    pub fn tick_count(&self) -> u32 {
        self.scheduler.tick_count()
    }

    /// Raw readings of the most recent tick
    pub fn latest(&self) -> &Readings {
        &self.latest
    }

    /// Runs one tick on the given raw readings
    ///
    /// Pushes every reading into its window, decides the actuator level from
    /// the soil reading and the counter's parity before the increment, then
    /// counts the tick and captures a report when one is due.
    pub fn step(&mut self, readings: Readings) -> TickOutcome {
        self.latest = readings;
        self.channels.push(&readings);

        let actuator = actuator_level(
            readings.get(Channel::SoilHumidity),
            self.scheduler.tick_count(),
            self.config.dryness_threshold,
        );

        let report = self
            .scheduler
            .advance()
            .then(|| Report::capture(self.config.device_id, &readings, &self.channels));

        log_trace!(
            "tick: readings={:?} actuator={:?} report={}",
            readings.as_array(),
            actuator,
            report.is_some()
        );

        TickOutcome { actuator, report }
    }

    /// By-value form of [`Context::step`]
    pub fn advance(mut self, readings: Readings) -> (Self, TickOutcome) {
        let outcome = self.step(readings);
        (self, outcome)
    }
}

/// Error from one tick of a running loop
#[derive(Debug, Clone, PartialEq)]
pub enum LoopError<E> {
    /// Core failure, such as a line overflowing its buffer
    Core(CoreError),
    /// Serial link failure
    Sink(E),
}

impl<E: fmt::Display> fmt::Display for LoopError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(e) => write!(f, "Core error: {}", e),
            Self::Sink(e) => write!(f, "Telemetry sink error: {}", e),
        }
    }
}

impl<E> From<CoreError> for LoopError<E> {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

/// Sampling loop wired to its collaborators
pub struct ControlLoop<S, A, T, C> {
    context: Context,
    sensors: S,
    actuator: A,
    sink: T,
    clock: C,
}

impl<S, A, T, C> ControlLoop<S, A, T, C>
where
    S: SensorArray,
    A: Actuator,
    T: TelemetrySink,
    C: TickSource,
{
    /// Builds the loop and its context
    pub fn new(config: &LoopConfig, sensors: S, actuator: A, sink: T, clock: C) -> CoreResult<Self> {
        Ok(Self {
            context: Context::new(config)?,
            sensors,
            actuator,
            sink,
            clock,
        })
    }

    /// Loop state
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Sensor collaborator
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Actuator collaborator
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Serial sink collaborator
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Tick source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Runs one full tick, including the wait that follows it
    ///
    /// The actuator is set and the interval is waited out even when emitting
    /// the report fails; the error is returned afterwards.
    pub fn run_once(&mut self) -> Result<TickOutcome, LoopError<T::Error>> {
        let readings = self.sensors.read_all();
        let outcome = self.context.step(readings);

        self.actuator.apply(outcome.actuator);

        let emitted = match &outcome.report {
            Some(report) => self.emit(report),
            None => Ok(()),
        };

        self.clock.wait(self.context.config.tick_interval);

        emitted.map(|()| outcome)
    }

    /// Runs until the process is stopped
    pub fn run(&mut self) -> !
    where
        T::Error: fmt::Debug,
    {
        loop {
            if let Err(_err) = self.run_once() {
                log_warn!("tick at {}ms failed: {:?}", self.clock.now(), _err);
            }
        }
    }

    fn emit(&mut self, report: &Report) -> Result<(), LoopError<T::Error>> {
        let line = report.to_line(self.context.config.precision)?;
        nb::block!(self.sink.write_line(&line)).map_err(LoopError::Sink)?;

        log_debug!("telemetry: {}", line.trim_end());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(capacity: usize, periodicity: u32) -> LoopConfig {
        LoopConfig {
            window_capacity: capacity,
            periodicity,
            ..LoopConfig::DEFAULT
        }
    }

    #[test]
    fn default_config_builds() {
        let context = Context::new(&LoopConfig::default()).unwrap();
        assert_eq!(context.tick_count(), 0);
        assert_eq!(
            context.channels().window(Channel::Light).capacity(),
            constants::WINDOW_CAPACITY
        );
    }

    #[test]
    fn invalid_config_fails_fast() {
        assert!(matches!(
            Context::new(&config(0, 30)),
            Err(CoreError::InvalidCapacity { requested: 0, .. })
        ));
        assert_eq!(Context::new(&config(6, 0)), Err(CoreError::InvalidPeriodicity));
    }

    #[test]
    fn step_updates_windows_and_latest() {
        let mut context = Context::new(&config(4, 30)).unwrap();
        let readings = Readings::new(8.0, 20.0, 40.0, 500.0);

        let outcome = context.step(readings);
        assert!(outcome.report.is_none());
        assert_eq!(context.latest(), &readings);
        assert_eq!(context.channels().window(Channel::Light).mean(), 2.0);
        assert_eq!(context.tick_count(), 1);
    }

    #[test]
    fn report_carries_tick_readings_and_resets_counter() {
        let mut context = Context::new(&config(3, 2)).unwrap();
        context.step(Readings::new(1.0, 1.0, 1.0, 900.0));
        let outcome = context.step(Readings::new(3.0, 1.0, 1.0, 900.0));

        let report = outcome.report.unwrap();
        assert_eq!(report.id, constants::DEVICE_ID);
        assert_eq!(report.channel(Channel::Light).raw, 3.0);
        assert_eq!(report.channel(Channel::Light).max, 3.0);
        assert_eq!(report.channel(Channel::Light).min, 0.0);
        assert_eq!(context.tick_count(), 0);
    }

    #[test]
    fn actuator_uses_count_before_increment() {
        let mut context = Context::new(&config(3, 30)).unwrap();
        let dry = Readings::new(0.0, 0.0, 0.0, 100.0);

        let levels: [ActuatorLevel; 4] = core::array::from_fn(|_| context.step(dry).actuator);
        assert_eq!(
            levels,
            [
                ActuatorLevel::Low,
                ActuatorLevel::High,
                ActuatorLevel::Low,
                ActuatorLevel::High
            ]
        );
    }

    #[test]
    fn advance_threads_the_context_by_value() {
        let context = Context::new(&config(2, 2)).unwrap();
        let (context, first) = context.advance(Readings::new(2.0, 0.0, 0.0, 500.0));
        let (context, second) = context.advance(Readings::new(4.0, 0.0, 0.0, 500.0));

        assert!(first.report.is_none());
        assert_eq!(second.report.unwrap().channel(Channel::Light).mean, 3.0);
        assert_eq!(context.tick_count(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn loop_error_display() {
        let err: LoopError<&str> = LoopError::Sink("port closed");
        assert_eq!(err.to_string(), "Telemetry sink error: port closed");

        let err: LoopError<&str> = CoreError::LineOverflow.into();
        assert_eq!(err.to_string(), "Core error: Telemetry line exceeds buffer capacity");
    }
}
