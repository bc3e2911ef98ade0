//! Salary basis model.
//!
//! A [`SalaryBasis`] is the salary configuration an allocator sets for an
//! employee: the monthly amount, how many hours that amount covers, the
//! overtime multiplier and whether short months are deducted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default number of standard hours in a month.
pub const DEFAULT_STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// Default overtime multiplier (150%).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Salary configuration used to compute earnings.
///
/// # Example
///
/// ```
/// use bid_earnings::models::SalaryBasis;
/// use rust_decimal::Decimal;
///
/// let basis = SalaryBasis::new(Decimal::from(16000));
/// assert_eq!(basis.standard_monthly_hours, Decimal::from(160));
/// assert_eq!(basis.overtime_multiplier, Decimal::new(15, 1));
/// assert!(!basis.apply_undertime_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBasis {
    /// The fixed monthly salary.
    pub monthly_salary_amount: Decimal,
    /// Hours the monthly salary is meant to cover.
    #[serde(default = "default_standard_monthly_hours")]
    pub standard_monthly_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Whether hours short of standard time are deducted.
    #[serde(default)]
    pub apply_undertime_deductions: bool,
}

fn default_standard_monthly_hours() -> Decimal {
    DEFAULT_STANDARD_MONTHLY_HOURS
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl SalaryBasis {
    /// Creates a salary basis with default hours and multiplier and no undertime deductions.
    pub fn new(monthly_salary_amount: Decimal) -> Self {
        Self {
            monthly_salary_amount,
            standard_monthly_hours: DEFAULT_STANDARD_MONTHLY_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            apply_undertime_deductions: false,
        }
    }

    /// Returns a copy with undertime deductions switched on or off.
    pub fn with_undertime_deductions(mut self, apply: bool) -> Self {
        self.apply_undertime_deductions = apply;
        self
    }

    /// Checks that the basis can be used for a calculation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when:
    /// - `monthly_salary_amount` is negative
    /// - `standard_monthly_hours` is zero or negative
    /// - `overtime_multiplier` is zero, negative, or below 1
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary_amount < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "monthly_salary_amount",
                format!("must not be negative, got {}", self.monthly_salary_amount),
            ));
        }

        if self.standard_monthly_hours <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "standard_monthly_hours",
                format!("must be positive, got {}", self.standard_monthly_hours),
            ));
        }

        if self.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "overtime_multiplier",
                format!("must be positive, got {}", self.overtime_multiplier),
            ));
        }

        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::invalid_input(
                "overtime_multiplier",
                format!("must be at least 1, got {}", self.overtime_multiplier),
            ));
        }

        Ok(())
    }
}
