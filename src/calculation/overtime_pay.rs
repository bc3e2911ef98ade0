//! Overtime pay calculation.
//!
//! Overtime minutes are paid at the hourly rate scaled by the overtime
//! multiplier configured on the salary basis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, minutes_to_hours};

/// The result of calculating overtime pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePayResult {
    /// Overtime expressed in hours.
    pub overtime_hours: Decimal,
    /// The hourly rate with the multiplier applied.
    pub overtime_rate: Decimal,
    /// The overtime pay amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for overtime minutes.
///
/// `amount = (overtime_minutes / 60) * hourly_rate * overtime_multiplier`
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the amount is out of range.
///
/// # Examples
///
/// ```
/// use bid_earnings::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_overtime_pay(
///     Decimal::from(600),
///     Decimal::from(100),
///     Decimal::new(15, 1),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.overtime_hours, Decimal::from(10));
/// assert_eq!(result.amount, Decimal::from(1500));
/// ```
pub fn calculate_overtime_pay(
    overtime_minutes: Decimal,
    hourly_rate: Decimal,
    overtime_multiplier: Decimal,
    step_number: u32,
) -> EngineResult<OvertimePayResult> {
    let out_of_range = || EngineError::invalid_input("overtime_earnings", "value is out of range");

    let overtime_hours = minutes_to_hours(overtime_minutes);
    let overtime_rate = hourly_rate
        .checked_mul(overtime_multiplier)
        .ok_or_else(out_of_range)?;
    let amount = overtime_hours
        .checked_mul(overtime_rate)
        .ok_or_else(out_of_range)?;

    let reasoning = if overtime_minutes > Decimal::ZERO {
        format!(
            "{} overtime hours at {}x ${} = ${}",
            overtime_hours.round_dp(2).normalize(),
            overtime_multiplier.normalize(),
            hourly_rate.round_dp(2).normalize(),
            amount.round_dp(2).normalize()
        )
    } else {
        "No overtime worked".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_minutes": overtime_minutes.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "overtime_multiplier": overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(OvertimePayResult {
        overtime_hours,
        overtime_rate,
        amount,
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
    fn test_ten_hours_at_150_percent() {
        let result = calculate_overtime_pay(dec("600"), dec("100"), dec("1.5"), 1).unwrap();

        assert_eq!(result.overtime_hours, dec("10"));
        assert_eq!(result.overtime_rate, dec("150"));
        assert_eq!(result.amount, dec("1500"));
        assert!(result.audit_step.reasoning.contains("1.5x"));
    }

    #[test]
    fn test_no_overtime_is_zero() {
        let result = calculate_overtime_pay(Decimal::ZERO, dec("100"), dec("1.5"), 1).unwrap();

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.audit_step.reasoning, "No overtime worked");
    }

    #[test]
    fn test_partial_hour() {
        let result = calculate_overtime_pay(dec("45"), dec("62.5"), dec("1.5"), 1).unwrap();

        assert_eq!(result.overtime_hours, dec("0.75"));
        assert_eq!(result.amount, dec("70.3125"));
    }

    #[test]
    fn test_double_time_multiplier() {
        let result = calculate_overtime_pay(dec("120"), dec("100"), dec("2"), 1).unwrap();
        assert_eq!(result.amount, dec("400"));
    }

    #[test]
    fn test_multiplier_of_one_pays_straight_time() {
        let result = calculate_overtime_pay(dec("60"), dec("100"), Decimal::ONE, 1).unwrap();
        assert_eq!(result.amount, dec("100"));
    }

    #[test]
    fn test_overflow_rejected() {
        let result = calculate_overtime_pay(dec("600"), Decimal::MAX, dec("2"), 1);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_audit_step_output() {
        let result = calculate_overtime_pay(dec("600"), dec("100"), dec("1.5"), 4).unwrap();
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "overtime_pay");
        assert_eq!(result.audit_step.output["amount"], "1500");
    }
}
