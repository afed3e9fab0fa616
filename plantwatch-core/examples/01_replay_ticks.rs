//! Replaying Ticks Example
//!
//! Drives the sampling context by hand with a recorded sequence of readings
//! and prints every telemetry line it produces, without sensors or sleeping.
//!
//! ## What You'll Learn
//!
//! - Building a `Context` from a `LoopConfig`
//! - Running ticks as a pure function of the readings
//! - Watching the warm-up bias fade as the windows fill
//! - Seeing the actuator blink while the soil is dry
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_replay_ticks
//! ```

use plantwatch_core::{telemetry, Context, LoopConfig, Readings};

fn main() {
    println!("PlantWatch Tick Replay Example");
    println!("==============================\n");

    // Short windows and a report every second tick so the bias is visible
    let config = LoopConfig {
        window_capacity: 4,
        periodicity: 2,
        ..LoopConfig::DEFAULT
    };
    let mut context = Context::new(&config).expect("valid config");

    // Soil dries out halfway through the recording
    let recording = [
        Readings::new(610.0, 21.2, 54.0, 520.0),
        Readings::new(615.0, 21.3, 53.5, 470.0),
        Readings::new(620.0, 21.5, 53.0, 380.0),
        Readings::new(640.0, 21.6, 52.0, 290.0),
        Readings::new(655.0, 21.8, 51.5, 260.0),
        Readings::new(660.0, 22.0, 51.0, 240.0),
        Readings::new(650.0, 22.1, 50.5, 230.0),
        Readings::new(645.0, 22.1, 50.0, 225.0),
    ];

    print!("{}", telemetry::header().expect("header fits a line"));
    for (tick, readings) in recording.into_iter().enumerate() {
        let outcome = context.step(readings);
        eprintln!("tick {:>2}: actuator {}", tick + 1, u8::from(outcome.actuator));

        if let Some(report) = outcome.report {
            match report.to_line(config.precision) {
                Ok(line) => print!("{}", line),
                Err(e) => eprintln!("report dropped: {}", e),
            }
        }
    }
}
