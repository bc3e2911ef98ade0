//! HTTP API module for the earnings engine.
//!
//! This module provides the REST endpoints the dashboard calls to compute
//! monthly earnings for one employee or a batch of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_BATCH_SIZE, create_router};
pub use request::{
    BatchEarningsRequest, BreakRequest, EarningsRequest, PayPeriodRequest, SalaryRequest,
    TimesheetEntryRequest,
};
pub use response::{ApiError, ApiErrorResponse, BatchEarningsResponse, BatchItemResult};
pub use state::AppState;
