//! Worked-time totals for a pay period.
//!
//! This module contains the [`WorkPeriod`] type consumed by the earnings
//! calculator, and the aggregation that builds one from timesheet entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayPeriod, TimesheetEntry};
use crate::error::{EngineError, EngineResult};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Converts a number of minutes to hours.
///
/// # Example
///
/// ```
/// use bid_earnings::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(Decimal::from(90)), Decimal::new(15, 1));
/// ```
pub fn minutes_to_hours(minutes: Decimal) -> Decimal {
    minutes / MINUTES_PER_HOUR
}

/// Aggregate worked time for a pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPeriod {
    /// Total minutes worked in the period.
    pub total_minutes_worked: Decimal,
}

/// The outcome of aggregating a timesheet into a [`WorkPeriod`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetSummary {
    /// The aggregated worked time.
    pub work_period: WorkPeriod,
    /// Number of closed entries that contributed minutes.
    pub counted_entries: usize,
    /// IDs of entries still clocked in; they contribute nothing.
    pub open_entries: Vec<String>,
    /// Number of entries skipped because they fall outside the pay period.
    pub out_of_period_entries: usize,
}

impl WorkPeriod {
    /// Creates a work period from a minute total.
    pub fn new(total_minutes_worked: Decimal) -> Self {
        Self {
            total_minutes_worked,
        }
    }

    /// Returns the worked time in hours.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes_worked)
    }

    /// Rejects negative worked time.
    pub fn validate(&self) -> EngineResult<()> {
        if self.total_minutes_worked < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "total_minutes_worked",
                format!("must not be negative, got {}", self.total_minutes_worked),
            ));
        }
        Ok(())
    }

    /// Sums the worked minutes of closed timesheet entries.
    ///
    /// When `pay_period` is given, only entries whose clock-in date falls
    /// inside it are counted. Open entries are listed in the summary and
    /// otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimesheet`] for the first malformed entry
    /// and [`EngineError::InvalidInput`] for a reversed pay period.
    ///
    /// # Example
    ///
    /// ```
    /// use bid_earnings::models::{TimesheetEntry, WorkPeriod};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let entries = vec![
    ///     TimesheetEntry {
    ///         id: "a".to_string(),
    ///         clock_in: at("2026-03-02 09:00:00"),
    ///         clock_out: Some(at("2026-03-02 17:00:00")),
    ///         breaks: vec![],
    ///     },
    ///     TimesheetEntry {
    ///         id: "b".to_string(),
    ///         clock_in: at("2026-03-03 09:00:00"),
    ///         clock_out: None,
    ///         breaks: vec![],
    ///     },
    /// ];
    ///
    /// let summary = WorkPeriod::from_timesheet(&entries, None).unwrap();
    /// assert_eq!(summary.work_period.total_minutes_worked, Decimal::from(480));
    /// assert_eq!(summary.open_entries, vec!["b".to_string()]);
    /// ```
    pub fn from_timesheet(
        entries: &[TimesheetEntry],
        pay_period: Option<&PayPeriod>,
    ) -> EngineResult<TimesheetSummary> {
        if let Some(period) = pay_period {
            period.validate()?;
        }

        let mut total = Decimal::ZERO;
        let mut counted_entries = 0;
        let mut open_entries = Vec::new();
        let mut out_of_period_entries = 0;

        for entry in entries {
            if pay_period.is_some_and(|p| !p.contains_date(entry.clock_in.date())) {
                out_of_period_entries += 1;
                continue;
            }

            match entry.worked_minutes()? {
                Some(minutes) => {
                    total += minutes;
                    counted_entries += 1;
                }
                None => open_entries.push(entry.id.clone()),
            }
        }

        Ok(TimesheetSummary {
            work_period: WorkPeriod::new(total),
            counted_entries,
            open_entries,
            out_of_period_entries,
        })
    }
}
