//! HTTP API module for the staffing engine.
//!
//! This module exposes the payroll, coverage and hourly wage entry points as
//! JSON-over-HTTP GET endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{API_PREFIX, create_router};
pub use request::{CoverageQuery, PayrollQuery, WageQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
