//! Standard / overtime / undertime split.
//!
//! This module measures a period's worked minutes against standard time and
//! splits the difference into overtime or undertime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MINUTES_PER_HOUR};

/// The result of splitting worked minutes against standard time.
///
/// At most one of `overtime_minutes` and `undertime_minutes` is nonzero;
/// both are zero when worked time equals standard time exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSplit {
    /// Standard monthly hours expressed in minutes.
    pub standard_minutes: Decimal,
    /// Minutes worked beyond standard time.
    pub overtime_minutes: Decimal,
    /// Minutes short of standard time.
    pub undertime_minutes: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits worked minutes into overtime or undertime against standard time.
///
/// # Arguments
///
/// * `total_minutes_worked` - Minutes worked in the period (already validated as non-negative)
/// * `standard_monthly_hours` - Standard hours for the period (already validated as positive)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `standard_monthly_hours` is too
/// large to express in minutes.
///
/// # Examples
///
/// ```
/// use bid_earnings::calculation::split_worked_minutes;
/// use rust_decimal::Decimal;
///
/// let split = split_worked_minutes(Decimal::from(10200), Decimal::from(160), 1).unwrap();
///
/// assert_eq!(split.standard_minutes, Decimal::from(9600));
/// assert_eq!(split.overtime_minutes, Decimal::from(600));
/// assert_eq!(split.undertime_minutes, Decimal::ZERO);
/// ```
pub fn split_worked_minutes(
    total_minutes_worked: Decimal,
    standard_monthly_hours: Decimal,
    step_number: u32,
) -> EngineResult<TimeSplit> {
    let standard_minutes = standard_monthly_hours
        .checked_mul(MINUTES_PER_HOUR)
        .ok_or_else(|| {
            EngineError::invalid_input("standard_monthly_hours", "value is out of range")
        })?;

    let overtime_minutes = (total_minutes_worked - standard_minutes).max(Decimal::ZERO);
    let undertime_minutes = (standard_minutes - total_minutes_worked).max(Decimal::ZERO);

    let reasoning = if overtime_minutes > Decimal::ZERO {
        format!(
            "{} minutes worked exceeds {} standard minutes by {} minutes of overtime",
            total_minutes_worked.normalize(),
            standard_minutes.normalize(),
            overtime_minutes.normalize()
        )
    } else if undertime_minutes > Decimal::ZERO {
        format!(
            "{} minutes worked is {} minutes short of {} standard minutes",
            total_minutes_worked.normalize(),
            undertime_minutes.normalize(),
            standard_minutes.normalize()
        )
    } else {
        format!(
            "{} minutes worked equals standard time, no overtime or undertime",
            total_minutes_worked.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "time_split".to_string(),
        rule_name: "Standard Time Split".to_string(),
        input: serde_json::json!({
            "total_minutes_worked": total_minutes_worked.normalize().to_string(),
            "standard_monthly_hours": standard_monthly_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "standard_minutes": standard_minutes.normalize().to_string(),
            "overtime_minutes": overtime_minutes.normalize().to_string(),
            "undertime_minutes": undertime_minutes.normalize().to_string()
        }),
        reasoning,
    };

    Ok(TimeSplit {
        standard_minutes,
        overtime_minutes,
        undertime_minutes,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exactly_standard_time() {
        let split = split_worked_minutes(dec("9600"), dec("160"), 1).unwrap();

        assert_eq!(split.standard_minutes, dec("9600"));
        assert_eq!(split.overtime_minutes, Decimal::ZERO);
        assert_eq!(split.undertime_minutes, Decimal::ZERO);
        assert!(split.audit_step.reasoning.contains("equals"));
    }

    #[test]
    fn test_overtime_170_hours() {
        let split = split_worked_minutes(dec("10200"), dec("160"), 1).unwrap();

        assert_eq!(split.overtime_minutes, dec("600"));
        assert_eq!(split.undertime_minutes, Decimal::ZERO);
        assert_eq!(split.audit_step.output["overtime_minutes"], "600");
        assert!(split.audit_step.reasoning.contains("overtime"));
    }

    #[test]
    fn test_undertime_150_hours() {
        let split = split_worked_minutes(dec("9000"), dec("160"), 1).unwrap();

        assert_eq!(split.overtime_minutes, Decimal::ZERO);
        assert_eq!(split.undertime_minutes, dec("600"));
        assert!(split.audit_step.reasoning.contains("short"));
    }

    #[test]
    fn test_zero_minutes_is_all_undertime() {
        let split = split_worked_minutes(Decimal::ZERO, dec("160"), 1).unwrap();
        assert_eq!(split.undertime_minutes, dec("9600"));
    }

    #[test]
    fn test_fractional_standard_hours() {
        let split = split_worked_minutes(dec("10000"), dec("162.5"), 1).unwrap();
        assert_eq!(split.standard_minutes, dec("9750"));
        assert_eq!(split.overtime_minutes, dec("250"));
    }

    #[test]
    fn test_fractional_minutes() {
        let split = split_worked_minutes(dec("9600.5"), dec("160"), 1).unwrap();
        assert_eq!(split.overtime_minutes, dec("0.5"));
    }

    #[test]
    fn test_standard_hours_overflow_rejected() {
        let result = split_worked_minutes(Decimal::ZERO, Decimal::MAX, 1);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_audit_step_metadata() {
        let split = split_worked_minutes(dec("9000"), dec("160"), 3).unwrap();
        assert_eq!(split.audit_step.step_number, 3);
        assert_eq!(split.audit_step.rule_id, "time_split");
        assert_eq!(split.audit_step.rule_name, "Standard Time Split");
        assert_eq!(split.audit_step.input["standard_monthly_hours"], "160");
    }
}
