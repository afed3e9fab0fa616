//! Runs the sampling loop against simulated sensors
//!
//! Telemetry lines go to stdout, logs to stderr. Runs until interrupted.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin plantwatch-sim
//! ```

use std::io;

use anyhow::Context as _;
use log::info;
use plantwatch_core::{time::SystemClock, ControlLoop, LoopConfig, VERSION};
use plantwatch_sim::{LoggingActuator, SimulatedSensors, WriterSink};

/// Share of simulated reads that fail and come back as NaN
const SIMULATED_FAULT_RATE: f64 = 0.002;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = LoopConfig::DEFAULT;
    info!(
        "plantwatch {} - window {} samples, report every {} ticks of {}ms",
        VERSION,
        config.window_capacity,
        config.periodicity,
        config.tick_interval.to_millis()
    );

    let sensors = SimulatedSensors::new().with_fault_rate(SIMULATED_FAULT_RATE);
    let mut control = ControlLoop::new(
        &config,
        sensors,
        LoggingActuator::new(),
        WriterSink::new(io::stdout()),
        SystemClock::new(),
    )
    .context("building sampling loop")?;

    control.run()
}
