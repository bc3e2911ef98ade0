//! Timesheet entry model and related types.
//!
//! This module defines the [`TimesheetEntry`] and [`Break`] structs for
//! representing clock-in/clock-out records kept by the attendance tracker.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a break taken during a clocked-in stretch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid (true) or unpaid (false).
    #[serde(default)]
    pub is_paid: bool,
}

const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

impl Break {
    fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// A single clock-in record, optionally closed by a clock-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out, if they have.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken while clocked in.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl TimesheetEntry {
    /// Returns true if the employee has not clocked out yet.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Calculates the worked minutes for the entry.
    ///
    /// Unpaid breaks are subtracted from the clocked duration; paid breaks are not.
    /// Seconds are kept, so the result may be fractional. Returns `Ok(None)`
    /// for an open entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimesheet`] if the clock-out precedes the
    /// clock-in, a break ends before it starts, a break falls outside the
    /// clocked interval, or two unpaid breaks overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use bid_earnings::models::{Break, TimesheetEntry};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let entry = TimesheetEntry {
    ///     id: "ts_001".to_string(),
    ///     clock_in: at("2026-03-02 09:00:00"),
    ///     clock_out: Some(at("2026-03-02 17:30:00")),
    ///     breaks: vec![Break {
    ///         start_time: at("2026-03-02 12:00:00"),
    ///         end_time: at("2026-03-02 12:30:00"),
    ///         is_paid: false,
    ///     }],
    /// };
    /// assert_eq!(entry.worked_minutes().unwrap(), Some(Decimal::from(480)));
    /// ```
    pub fn worked_minutes(&self) -> EngineResult<Option<Decimal>> {
        let Some(clock_out) = self.clock_out else {
            return Ok(None);
        };

        if clock_out < self.clock_in {
            return Err(self.invalid(format!(
                "clock-out {} is before clock-in {}",
                clock_out, self.clock_in
            )));
        }

        let mut unpaid: Vec<&Break> = Vec::new();
        for b in &self.breaks {
            if b.end_time < b.start_time {
                return Err(self.invalid(format!(
                    "break ending {} starts after it ends",
                    b.end_time
                )));
            }
            if b.start_time < self.clock_in || b.end_time > clock_out {
                return Err(self.invalid(format!(
                    "break {} to {} is outside the clocked interval {} to {}",
                    b.start_time, b.end_time, self.clock_in, clock_out
                )));
            }
            if !b.is_paid {
                unpaid.push(b);
            }
        }

        unpaid.sort_by_key(|b| b.start_time);
        if let Some(pair) = unpaid
            .windows(2)
            .find(|pair| pair[1].start_time < pair[0].end_time)
        {
            return Err(self.invalid(format!(
                "unpaid break starting {} overlaps the break ending {}",
                pair[1].start_time, pair[0].end_time
            )));
        }

        // Breaks are inside the interval and disjoint, so this cannot go negative.
        let unpaid_seconds: i64 = unpaid.iter().map(|b| b.duration_seconds()).sum();
        let worked_seconds = (clock_out - self.clock_in).num_seconds() - unpaid_seconds;

        Ok(Some(Decimal::from(worked_seconds) / SECONDS_PER_MINUTE))
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidTimesheet {
            entry_id: self.id.clone(),
            message,
        }
    }
}
