//! Receiving end of the telemetry link
//!
//! Reads telemetry lines, parses each into a [`Report`] and writes it out as
//! one JSON object per line, stamped with the receive time in nanoseconds
//! since the Unix epoch. Header rows and blank lines are passed over;
//! malformed lines are logged and counted, never fatal, since a serial link
//! routinely delivers a truncated first line.

use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use plantwatch_core::Report;
use serde::Serialize;

/// One ingested report as written to the output
#[derive(Debug, Serialize)]
struct Record<'a> {
    /// Receive time, nanoseconds since the Unix epoch
    timestamp: u64,
    #[serde(flatten)]
    report: &'a Report,
}

fn received_at() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Counters from one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines parsed and written as JSON
    pub records: u64,
    /// Lines that failed to parse
    pub rejected: u64,
}

/// Converts every telemetry line from `reader` into a JSON line on `out`
pub fn ingest<R: BufRead, W: Write>(reader: R, mut out: W) -> anyhow::Result<IngestStats> {
    let mut stats = IngestStats::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading telemetry line {}", number + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("id") {
            continue;
        }

        match Report::parse(trimmed) {
            Ok(report) => {
                let record = Record {
                    timestamp: received_at(),
                    report: &report,
                };
                serde_json::to_writer(&mut out, &record).context("encoding report")?;
                writeln!(out).context("writing report")?;
                stats.records += 1;
            }
            Err(err) => {
                log::warn!("line {}: {}", number + 1, err);
                stats.rejected += 1;
            }
        }
    }

    out.flush().context("flushing output")?;
    Ok(stats)
}
