//! Earnings engine for the BID Task Allocator payroll.
//!
//! This crate turns a month of worked time and a fixed monthly salary into an
//! earnings breakdown: standard pay, overtime at a premium multiplier, and an
//! optional deduction for undertime. Every calculation carries an audit trace
//! of the rules applied.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
