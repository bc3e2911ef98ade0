//! Core data models for the earnings engine.
//!
//! This module contains all the domain models used throughout the engine.

mod earnings_result;
mod pay_period;
mod salary_basis;
mod timesheet;
mod work_period;

pub use earnings_result::{
    AuditStep, AuditTrace, AuditWarning, EarningsCalculation, EarningsResult,
};
pub use pay_period::PayPeriod;
pub use salary_basis::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_STANDARD_MONTHLY_HOURS, SalaryBasis};
pub use timesheet::{Break, TimesheetEntry};
pub use work_period::{MINUTES_PER_HOUR, TimesheetSummary, WorkPeriod, minutes_to_hours};
