//! HTTP API module for the Settlement Engine.
//!
//! This module provides the REST API endpoints for calculating Colombian
//! employment settlements and building settlement history records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RecordRequest;
pub use response::{ApiError, ApiErrorResponse, StatutoryRatesResponse};
pub use state::AppState;
