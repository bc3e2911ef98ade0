//! Hourly rate derivation.
//!
//! A monthly salary covers a fixed number of standard hours; the hourly rate
//! used for overtime and undertime is the salary spread over those hours.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of deriving an hourly rate, including the audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// The derived hourly rate.
    pub rate: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate from a monthly salary.
///
/// `hourly_rate = monthly_salary_amount / standard_monthly_hours`
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `standard_monthly_hours` is zero
/// or negative, or if the quotient is out of range.
///
/// # Examples
///
/// ```
/// use bid_earnings::calculation::derive_hourly_rate;
/// use rust_decimal::Decimal;
///
/// let result = derive_hourly_rate(Decimal::from(16000), Decimal::from(160), 1).unwrap();
/// assert_eq!(result.rate, Decimal::from(100));
/// ```
pub fn derive_hourly_rate(
    monthly_salary_amount: Decimal,
    standard_monthly_hours: Decimal,
    step_number: u32,
) -> EngineResult<HourlyRateResult> {
    if standard_monthly_hours <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "standard_monthly_hours",
            format!("must be positive, got {}", standard_monthly_hours),
        ));
    }

    let rate = monthly_salary_amount
        .checked_div(standard_monthly_hours)
        .ok_or_else(|| EngineError::invalid_input("hourly_rate", "value is out of range"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate Derivation".to_string(),
        input: serde_json::json!({
            "monthly_salary_amount": monthly_salary_amount.normalize().to_string(),
            "standard_monthly_hours": standard_monthly_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "Monthly salary ${} over {} standard hours gives ${} per hour",
            monthly_salary_amount.normalize(),
            standard_monthly_hours.normalize(),
            rate.round_dp(2).normalize()
        ),
    };

    Ok(HourlyRateResult { rate, audit_step })
}
