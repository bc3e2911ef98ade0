//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryBasis;

use super::types::{PayrollConfig, PayrollMetadata, SalaryDefaults};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/bid/
/// └── payroll.yaml   # Metadata and salary defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use bid_earnings::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/bid").unwrap();
/// let basis = loader.salary_basis(Decimal::from(16000), None, None, None);
/// println!("Standard hours: {}", basis.standard_monthly_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `payroll.yaml` is missing
    /// - `ConfigParseError` if it contains invalid YAML or invalid defaults
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let payroll_path = path.as_ref().join("payroll.yaml");
        let config = Self::load_yaml::<PayrollConfig>(&payroll_path)?;

        Self::from_config(config).map_err(|e| EngineError::ConfigParseError {
            path: payroll_path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Wraps an already-built configuration, validating its salary defaults.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        // Salary is irrelevant here, only the defaults are checked.
        config.salary_defaults.basis_for(Decimal::ZERO).validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.config.metadata
    }

    /// Returns the salary defaults.
    pub fn salary_defaults(&self) -> &SalaryDefaults {
        &self.config.salary_defaults
    }

    /// Builds a salary basis, taking each setting from the override when given
    /// and from the configured defaults otherwise.
    ///
    /// The result is not validated; the calculator does that.
    pub fn salary_basis(
        &self,
        monthly_salary_amount: Decimal,
        standard_monthly_hours: Option<Decimal>,
        overtime_multiplier: Option<Decimal>,
        apply_undertime_deductions: Option<bool>,
    ) -> SalaryBasis {
        let defaults = self.salary_defaults();
        SalaryBasis {
            monthly_salary_amount,
            standard_monthly_hours: standard_monthly_hours
                .unwrap_or(defaults.standard_monthly_hours),
            overtime_multiplier: overtime_multiplier.unwrap_or(defaults.overtime_multiplier),
            apply_undertime_deductions: apply_undertime_deductions
                .unwrap_or(defaults.apply_undertime_deductions),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: PayrollConfig {
                metadata: PayrollMetadata {
                    organization: "BID Task Allocator".to_string(),
                    version: "default".to_string(),
                },
                salary_defaults: SalaryDefaults::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/bid"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().organization, "BID Task Allocator");
        assert_eq!(loader.metadata().version, "2026-01");
    }

    #[test]
    fn test_salary_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.salary_defaults();

        assert_eq!(defaults.standard_monthly_hours, dec("160"));
        assert_eq!(defaults.overtime_multiplier, dec("1.5"));
        assert!(!defaults.apply_undertime_deductions);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_invalid_defaults() {
        let mut config = ConfigLoader::default().config().clone();
        config.salary_defaults.standard_monthly_hours = Decimal::ZERO;

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_salary_basis_uses_defaults() {
        let loader = ConfigLoader::default();
        let basis = loader.salary_basis(dec("16000"), None, None, None);
        assert_eq!(basis, SalaryBasis::new(dec("16000")));
    }

    #[test]
    fn test_salary_basis_overrides_win() {
        let loader = ConfigLoader::default();
        let basis = loader.salary_basis(dec("16000"), Some(dec("176")), Some(dec("2")), Some(true));

        assert_eq!(basis.standard_monthly_hours, dec("176"));
        assert_eq!(basis.overtime_multiplier, dec("2"));
        assert!(basis.apply_undertime_deductions);
    }
}
