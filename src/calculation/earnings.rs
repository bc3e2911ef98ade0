//! Earnings calculation.
//!
//! This module ties the individual rules together: it validates the inputs,
//! splits worked time against standard time, derives the hourly rate, prices
//! overtime and undertime, and sums the result.
//!
//! [`compute_earnings`] is the pure core. [`calculate_earnings`] and
//! [`calculate_timesheet_earnings`] wrap it with an identity, a timestamp and
//! an audit trace for the API.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{
    calculate_overtime_pay, calculate_undertime_deduction, derive_hourly_rate,
    split_worked_minutes,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EarningsCalculation, EarningsResult, PayPeriod,
    SalaryBasis, TimesheetEntry, WorkPeriod,
};

/// Warning code raised when undertime deductions exceed base plus overtime.
pub const NEGATIVE_NET_PAY_WARNING: &str = "NEGATIVE_NET_PAY";

/// Warning code raised for timesheet entries without a clock-out.
pub const OPEN_ENTRY_WARNING: &str = "OPEN_TIMESHEET_ENTRY";

/// Warning code raised when timesheet entries fall outside the pay period.
pub const OUT_OF_PERIOD_WARNING: &str = "ENTRIES_OUTSIDE_PAY_PERIOD";

/// Computes the earnings breakdown for a work period under a salary basis.
///
/// Pure and deterministic: identical inputs always give identical results.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if worked minutes or salary are
/// negative, if standard hours or the overtime multiplier are not positive
/// (or the multiplier is below 1), or if an amount is out of range.
///
/// # Examples
///
/// ```
/// use bid_earnings::calculation::compute_earnings;
/// use bid_earnings::models::{SalaryBasis, WorkPeriod};
/// use rust_decimal::Decimal;
///
/// let basis = SalaryBasis::new(Decimal::from(16000));
/// let result = compute_earnings(&WorkPeriod::new(Decimal::from(10200)), &basis).unwrap();
///
/// assert_eq!(result.hourly_rate, Decimal::from(100));
/// assert_eq!(result.overtime_minutes, Decimal::from(600));
/// assert_eq!(result.overtime_earnings, Decimal::from(1500));
/// assert_eq!(result.total_earnings, Decimal::from(17500));
/// ```
pub fn compute_earnings(
    work_period: &WorkPeriod,
    salary_basis: &SalaryBasis,
) -> EngineResult<EarningsResult> {
    apply_rules(work_period, salary_basis, 1).map(|(earnings, _)| earnings)
}

/// Runs every earnings rule, numbering audit steps from `first_step`.
fn apply_rules(
    work_period: &WorkPeriod,
    salary_basis: &SalaryBasis,
    first_step: u32,
) -> EngineResult<(EarningsResult, Vec<AuditStep>)> {
    work_period.validate()?;
    salary_basis.validate()?;

    let mut step_number = first_step;
    let mut steps = Vec::with_capacity(5);

    let split = split_worked_minutes(
        work_period.total_minutes_worked,
        salary_basis.standard_monthly_hours,
        step_number,
    )?;
    steps.push(split.audit_step);
    step_number += 1;

    let rate = derive_hourly_rate(
        salary_basis.monthly_salary_amount,
        salary_basis.standard_monthly_hours,
        step_number,
    )?;
    steps.push(rate.audit_step);
    step_number += 1;

    let overtime = calculate_overtime_pay(
        split.overtime_minutes,
        rate.rate,
        salary_basis.overtime_multiplier,
        step_number,
    )?;
    steps.push(overtime.audit_step);
    step_number += 1;

    let undertime = calculate_undertime_deduction(
        split.undertime_minutes,
        rate.rate,
        salary_basis.apply_undertime_deductions,
        step_number,
    )?;
    steps.push(undertime.audit_step);
    step_number += 1;

    let base_earnings = salary_basis.monthly_salary_amount;
    let total_earnings = base_earnings
        .checked_add(overtime.amount)
        .and_then(|gross| gross.checked_sub(undertime.amount))
        .ok_or_else(|| EngineError::invalid_input("total_earnings", "value is out of range"))?;

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "base_earnings": base_earnings.normalize().to_string(),
            "overtime_earnings": overtime.amount.normalize().to_string(),
            "undertime_deduction": undertime.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_earnings": total_earnings.normalize().to_string()
        }),
        reasoning: format!(
            "${} base + ${} overtime - ${} undertime = ${}",
            base_earnings.round_dp(2).normalize(),
            overtime.amount.round_dp(2).normalize(),
            undertime.amount.round_dp(2).normalize(),
            total_earnings.round_dp(2).normalize()
        ),
    });

    let earnings = EarningsResult {
        standard_minutes: split.standard_minutes,
        overtime_minutes: split.overtime_minutes,
        undertime_minutes: split.undertime_minutes,
        hourly_rate: rate.rate,
        base_earnings,
        overtime_earnings: overtime.amount,
        undertime_deduction: undertime.amount,
        total_earnings,
    };

    Ok((earnings, steps))
}

/// Calculates earnings for an employee and wraps them with an audit trace.
///
/// Negative net pay is not clamped; it is reported as a
/// [`NEGATIVE_NET_PAY_WARNING`] on the trace.
///
/// # Errors
///
/// Everything [`compute_earnings`] rejects, plus a pay period whose end date
/// precedes its start date.
pub fn calculate_earnings(
    employee_id: &str,
    work_period: &WorkPeriod,
    salary_basis: &SalaryBasis,
    pay_period: Option<&PayPeriod>,
) -> EngineResult<EarningsCalculation> {
    let start_time = Instant::now();
    if let Some(period) = pay_period {
        period.validate()?;
    }

    let (earnings, steps) = apply_rules(work_period, salary_basis, 1)?;

    Ok(assemble(
        employee_id,
        pay_period,
        earnings,
        steps,
        Vec::new(),
        start_time,
    ))
}

/// Aggregates a timesheet and calculates earnings from it.
///
/// The aggregation is recorded as the first audit step. Open entries and
/// entries outside the pay period produce warnings instead of errors.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimesheet`] for a malformed entry, and
/// anything [`calculate_earnings`] rejects.
pub fn calculate_timesheet_earnings(
    employee_id: &str,
    entries: &[TimesheetEntry],
    salary_basis: &SalaryBasis,
    pay_period: Option<&PayPeriod>,
) -> EngineResult<EarningsCalculation> {
    let start_time = Instant::now();
    let summary = WorkPeriod::from_timesheet(entries, pay_period)?;

    let mut warnings = Vec::new();
    for entry_id in &summary.open_entries {
        warnings.push(AuditWarning {
            code: OPEN_ENTRY_WARNING.to_string(),
            message: format!(
                "Timesheet entry '{}' has no clock-out and was not counted",
                entry_id
            ),
            severity: "medium".to_string(),
        });
    }
    if summary.out_of_period_entries > 0 {
        warnings.push(AuditWarning {
            code: OUT_OF_PERIOD_WARNING.to_string(),
            message: format!(
                "{} timesheet entries fall outside the pay period and were not counted",
                summary.out_of_period_entries
            ),
            severity: "low".to_string(),
        });
    }

    let total_minutes = summary.work_period.total_minutes_worked;
    let aggregation_step = AuditStep {
        step_number: 1,
        rule_id: "timesheet_aggregation".to_string(),
        rule_name: "Timesheet Aggregation".to_string(),
        input: serde_json::json!({
            "entries": entries.len()
        }),
        output: serde_json::json!({
            "total_minutes_worked": total_minutes.normalize().to_string(),
            "counted_entries": summary.counted_entries,
            "open_entries": summary.open_entries,
            "out_of_period_entries": summary.out_of_period_entries
        }),
        reasoning: format!(
            "{} of {} entries counted for {} minutes ({} hours) worked",
            summary.counted_entries,
            entries.len(),
            total_minutes.round_dp(2).normalize(),
            summary.work_period.total_hours().round_dp(2).normalize()
        ),
    };

    let (earnings, rule_steps) = apply_rules(&summary.work_period, salary_basis, 2)?;
    let mut steps = Vec::with_capacity(rule_steps.len() + 1);
    steps.push(aggregation_step);
    steps.extend(rule_steps);

    Ok(assemble(
        employee_id,
        pay_period,
        earnings,
        steps,
        warnings,
        start_time,
    ))
}

fn assemble(
    employee_id: &str,
    pay_period: Option<&PayPeriod>,
    earnings: EarningsResult,
    steps: Vec<AuditStep>,
    mut warnings: Vec<AuditWarning>,
    start_time: Instant,
) -> EarningsCalculation {
    if earnings.total_earnings < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_PAY_WARNING.to_string(),
            message: format!(
                "Undertime deduction of ${} exceeds base and overtime earnings; net pay is ${}",
                earnings.undertime_deduction.round_dp(2).normalize(),
                earnings.total_earnings.round_dp(2).normalize()
            ),
            severity: "high".to_string(),
        });
    }

    EarningsCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.to_string(),
        pay_period: pay_period.cloned(),
        earnings,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
