//! Calculation logic for the earnings engine.
//!
//! This module contains the rules that turn worked time and a salary basis
//! into pay: the standard time split, hourly rate derivation, overtime pay,
//! undertime deduction, and the calculation that combines them.

mod earnings;
mod hourly_rate;
mod overtime_pay;
mod time_split;
mod undertime_deduction;

pub use earnings::{
    NEGATIVE_NET_PAY_WARNING, OPEN_ENTRY_WARNING, OUT_OF_PERIOD_WARNING, calculate_earnings,
    calculate_timesheet_earnings, compute_earnings,
};
pub use hourly_rate::{HourlyRateResult, derive_hourly_rate};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay};
pub use time_split::{TimeSplit, split_worked_minutes};
pub use undertime_deduction::{UndertimeDeductionResult, calculate_undertime_deduction};
