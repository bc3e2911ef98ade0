//! Configuration loading and management for the earnings engine.
//!
//! This module loads payroll configuration (metadata and the salary defaults
//! applied when a request omits them) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use bid_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bid").unwrap();
//! println!("Loaded payroll config for: {}", config.metadata().organization);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollMetadata, SalaryDefaults};
