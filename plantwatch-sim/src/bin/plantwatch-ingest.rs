//! Converts telemetry lines on stdin into JSON records on stdout
//!
//! ```bash
//! cargo run --bin plantwatch-sim | cargo run --bin plantwatch-ingest
//! ```

use std::io;

use log::info;
use plantwatch_sim::ingest;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = ingest(stdin.lock(), stdout.lock())?;

    info!("{} records, {} rejected lines", stats.records, stats.rejected);
    Ok(())
}
