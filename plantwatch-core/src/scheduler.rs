//! Report cadence
//!
//! Counts ticks and fires once every `periodicity` ticks. The counter lives
//! in `0..periodicity`; reaching `periodicity` fires and resets it to zero in
//! the same call, so reports land on ticks `P, 2P, 3P, ...`.

use crate::errors::{CoreError, CoreResult};

/// Tick counter that signals when a report is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportScheduler {
    periodicity: u32,
    tick_count: u32,
}

impl ReportScheduler {
    /// Creates a scheduler firing every `periodicity` ticks
    pub fn new(periodicity: u32) -> CoreResult<Self> {
        if periodicity == 0 {
            return Err(CoreError::InvalidPeriodicity);
        }

        Ok(Self {
            periodicity,
            tick_count: 0,
        })
    }

    /// Ticks counted since the last report
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Ticks between reports
    pub fn periodicity(&self) -> u32 {
        self.periodicity
    }

    /// Counts one tick; returns `true` when a report is due
    pub fn advance(&mut self) -> bool {
        self.tick_count += 1;
        if self.tick_count == self.periodicity {
            self.tick_count = 0;
            true
        } else {
            false
        }
    }
}
