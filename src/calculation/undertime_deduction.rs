//! Undertime deduction calculation.
//!
//! When the salary basis enables it, each hour short of standard time is
//! deducted at the plain hourly rate. Otherwise undertime is recorded but
//! costs nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, minutes_to_hours};

/// The result of calculating an undertime deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndertimeDeductionResult {
    /// Undertime expressed in hours.
    pub undertime_hours: Decimal,
    /// The amount deducted; zero when deductions are off.
    pub amount: Decimal,
    /// Whether a deduction was applied.
    pub applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the undertime deduction.
///
/// `amount = apply ? (undertime_minutes / 60) * hourly_rate : 0`
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the amount is out of range.
///
/// # Examples
///
/// ```
/// use bid_earnings::calculation::calculate_undertime_deduction;
/// use rust_decimal::Decimal;
///
/// let on = calculate_undertime_deduction(Decimal::from(600), Decimal::from(100), true, 1).unwrap();
/// assert_eq!(on.amount, Decimal::from(1000));
///
/// let off = calculate_undertime_deduction(Decimal::from(600), Decimal::from(100), false, 1).unwrap();
/// assert_eq!(off.amount, Decimal::ZERO);
/// ```
pub fn calculate_undertime_deduction(
    undertime_minutes: Decimal,
    hourly_rate: Decimal,
    apply_undertime_deductions: bool,
    step_number: u32,
) -> EngineResult<UndertimeDeductionResult> {
    let undertime_hours = minutes_to_hours(undertime_minutes);

    let applied = apply_undertime_deductions && undertime_minutes > Decimal::ZERO;
    let amount = if applied {
        undertime_hours.checked_mul(hourly_rate).ok_or_else(|| {
            EngineError::invalid_input("undertime_deduction", "value is out of range")
        })?
    } else {
        Decimal::ZERO
    };

    let reasoning = if applied {
        format!(
            "{} undertime hours deducted at ${} = ${}",
            undertime_hours.round_dp(2).normalize(),
            hourly_rate.round_dp(2).normalize(),
            amount.round_dp(2).normalize()
        )
    } else if undertime_minutes > Decimal::ZERO {
        format!(
            "{} undertime hours not deducted: undertime deductions are disabled",
            undertime_hours.round_dp(2).normalize()
        )
    } else {
        "No undertime".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "undertime_deduction".to_string(),
        rule_name: "Undertime Deduction".to_string(),
        input: serde_json::json!({
            "undertime_minutes": undertime_minutes.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "apply_undertime_deductions": apply_undertime_deductions
        }),
        output: serde_json::json!({
            "undertime_hours": undertime_hours.normalize().to_string(),
            "amount": amount.normalize().to_string(),
            "applied": applied
        }),
        reasoning,
    };

    Ok(UndertimeDeductionResult {
        undertime_hours,
        amount,
        applied,
        audit_step,
    })
}
