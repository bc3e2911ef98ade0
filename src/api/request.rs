//! Request types for the earnings API.
//!
//! This module defines the JSON request structures for the `/earnings` and
//! `/earnings/batch` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Break, PayPeriod, TimesheetEntry};

/// Request body for the `/earnings` endpoint.
///
/// Worked time is given either as a minute total or as raw timesheet
/// entries; exactly one of the two must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The pay period, used to filter timesheet entries and label the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<PayPeriodRequest>,
    /// Aggregate minutes worked in the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_minutes_worked: Option<Decimal>,
    /// Clock-in records to aggregate instead of a minute total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timesheet: Option<Vec<TimesheetEntryRequest>>,
    /// Salary settings; omitted fields fall back to configured defaults.
    pub salary: SalaryRequest,
}

/// Request body for the `/earnings/batch` endpoint.
///
/// Items stay raw JSON here and are decoded one at a time, so a malformed
/// item is reported in its own result instead of rejecting the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEarningsRequest {
    /// Independent earnings requests, each shaped like [`EarningsRequest`].
    pub requests: Vec<serde_json::Value>,
}

/// Salary information in an earnings request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The fixed monthly salary.
    pub monthly_salary_amount: Decimal,
    /// Optional override for standard monthly hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_monthly_hours: Option<Decimal>,
    /// Optional override for the overtime multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_multiplier: Option<Decimal>,
    /// Optional override for the undertime policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_undertime_deductions: Option<bool>,
}

/// Pay period information in an earnings request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Timesheet entry information in an earnings request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetEntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out, if they have.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken while clocked in.
    #[serde(default)]
    pub breaks: Vec<BreakRequest>,
}

/// Break information in an earnings request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid.
    #[serde(default)]
    pub is_paid: bool,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<TimesheetEntryRequest> for TimesheetEntry {
    fn from(req: TimesheetEntryRequest) -> Self {
        TimesheetEntry {
            id: req.id,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            breaks: req.breaks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BreakRequest> for Break {
    fn from(req: BreakRequest) -> Self {
        Break {
            start_time: req.start_time,
            end_time: req.end_time,
            is_paid: req.is_paid,
        }
    }
}
