//! End-to-end: simulated board output piped into the ingestion side

use plantwatch_core::{time::VirtualClock, ControlLoop, LoopConfig, TickSource};
use plantwatch_sim::{ingest, IngestStats, LoggingActuator, SimulatedSensors, WriterSink};

#[test]
fn simulated_telemetry_round_trips_through_ingest() {
    let config = LoopConfig::DEFAULT;
    let mut control = ControlLoop::new(
        &config,
        SimulatedSensors::seeded(2024),
        LoggingActuator::new(),
        WriterSink::new(Vec::new()),
        VirtualClock::new(0),
    )
    .unwrap();

    let ticks = config.periodicity * 3;
    for _ in 0..ticks {
        control.run_once().unwrap();
    }

    assert_eq!(control.sink().lines_written(), 3);
    assert_eq!(
        control.clock().now(),
        u64::from(ticks) * u64::from(config.tick_interval.to_millis())
    );

    let telemetry = control.sink().get_ref().clone();
    let mut json = Vec::new();
    let stats = ingest(telemetry.as_slice(), &mut json).unwrap();
    assert_eq!(stats, IngestStats { records: 3, rejected: 0 });

    for line in String::from_utf8(json).unwrap().lines() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        let light = record["channels"][0]["mean"].as_f64().unwrap();
        assert!((200.0..800.0).contains(&light));
    }
}

#[test]
fn dry_simulated_soil_toggles_the_actuator() {
    use plantwatch_core::Channel;
    use plantwatch_sim::ChannelRange;

    let sensors = SimulatedSensors::seeded(5)
        .with_range(Channel::SoilHumidity, ChannelRange::new(100.0, 200.0));
    let mut control = ControlLoop::new(
        &LoopConfig::DEFAULT,
        sensors,
        LoggingActuator::new(),
        WriterSink::new(Vec::new()),
        VirtualClock::new(0),
    )
    .unwrap();

    for _ in 0..10 {
        control.run_once().unwrap();
    }
    // off, on, off, ... : one edge per tick after the first
    assert_eq!(control.actuator().edges(), 9);
}
