//! Earnings result models.
//!
//! This module contains the [`EarningsResult`] breakdown returned by the
//! calculator, the [`EarningsCalculation`] envelope that wraps it with
//! identity and an audit trace, and the audit types themselves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// The pay breakdown for one work period under one salary basis.
///
/// Recomputed on every call; carries no identity of its own.
///
/// # Example
///
/// ```
/// use bid_earnings::models::EarningsResult;
/// use rust_decimal::Decimal;
///
/// let result = EarningsResult {
///     standard_minutes: Decimal::from(9600),
///     overtime_minutes: Decimal::from(600),
///     undertime_minutes: Decimal::ZERO,
///     hourly_rate: Decimal::from(100),
///     base_earnings: Decimal::from(16000),
///     overtime_earnings: Decimal::from(1500),
///     undertime_deduction: Decimal::ZERO,
///     total_earnings: Decimal::from(17500),
/// };
/// assert!(result.has_overtime());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsResult {
    /// Minutes of standard time in the period.
    pub standard_minutes: Decimal,
    /// Minutes worked beyond standard time.
    pub overtime_minutes: Decimal,
    /// Minutes short of standard time.
    pub undertime_minutes: Decimal,
    /// Monthly salary divided by standard monthly hours.
    pub hourly_rate: Decimal,
    /// The fixed monthly salary.
    pub base_earnings: Decimal,
    /// Pay for overtime minutes at the overtime multiplier.
    pub overtime_earnings: Decimal,
    /// Amount deducted for undertime, zero when deductions are off.
    pub undertime_deduction: Decimal,
    /// Base plus overtime minus undertime deduction.
    pub total_earnings: Decimal,
}

impl EarningsResult {
    /// Returns true if any overtime was worked.
    pub fn has_overtime(&self) -> bool {
        self.overtime_minutes > Decimal::ZERO
    }

    /// Returns true if the period fell short of standard time.
    pub fn has_undertime(&self) -> bool {
        self.undertime_minutes > Decimal::ZERO
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention from an allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// An earnings result together with its identity and audit trail.
///
/// This is what the HTTP API returns for each employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay period, if one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<PayPeriod>,
    /// The computed pay breakdown.
    pub earnings: EarningsResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
