//! Host-Side Adapters for PlantWatch
//!
//! ## Overview
//!
//! The sampling core talks to hardware through four traits. This crate
//! implements them on a desktop host so the loop can run without a board,
//! and implements the receiving end of the telemetry link:
//!
//! - [`sensors::SimulatedSensors`]: random readings per channel within
//!   realistic ranges, with an optional fault rate producing `NaN`
//! - [`serial::WriterSink`]: telemetry lines to any `std::io::Write`
//!   (stdout stands in for the serial port)
//! - [`actuator::LoggingActuator`]: logs actuator edges instead of
//!   switching a pump
//! - [`ingest`]: reads telemetry lines and turns them into JSON records
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run --bin plantwatch-sim | cargo run --bin plantwatch-ingest
//! ```
//!
//! Logs go to stderr, so stdout carries only telemetry (or JSON) and can be
//! piped.

pub mod actuator;
pub mod ingest;
pub mod sensors;
pub mod serial;

pub use actuator::LoggingActuator;
pub use ingest::{ingest, IngestStats};
pub use sensors::{ChannelRange, SimulatedSensors};
pub use serial::WriterSink;
