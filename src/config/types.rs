//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_STANDARD_MONTHLY_HOURS, SalaryBasis};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollMetadata {
    /// The organization the configuration belongs to.
    pub organization: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

/// Salary settings applied when a request leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDefaults {
    /// Standard hours covered by a monthly salary.
    #[serde(default = "default_standard_monthly_hours")]
    pub standard_monthly_hours: Decimal,
    /// Overtime multiplier.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Whether undertime is deducted.
    #[serde(default)]
    pub apply_undertime_deductions: bool,
}

fn default_standard_monthly_hours() -> Decimal {
    DEFAULT_STANDARD_MONTHLY_HOURS
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl Default for SalaryDefaults {
    fn default() -> Self {
        Self {
            standard_monthly_hours: DEFAULT_STANDARD_MONTHLY_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            apply_undertime_deductions: false,
        }
    }
}

impl SalaryDefaults {
    /// Builds a salary basis for `monthly_salary_amount` from these defaults.
    pub fn basis_for(&self, monthly_salary_amount: Decimal) -> SalaryBasis {
        SalaryBasis {
            monthly_salary_amount,
            standard_monthly_hours: self.standard_monthly_hours,
            overtime_multiplier: self.overtime_multiplier,
            apply_undertime_deductions: self.apply_undertime_deductions,
        }
    }
}

/// The complete payroll configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Configuration metadata.
    pub metadata: PayrollMetadata,
    /// Salary defaults.
    #[serde(default)]
    pub salary_defaults: SalaryDefaults,
}
