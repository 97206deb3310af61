//! HTTP API module for the validation service.
//!
//! This module provides the REST endpoints for validating invoices,
//! payslips, and expense reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExpenseReportRequest, InvoiceRequest, PayslipRequest};
pub use response::ValidationResponse;
pub use state::AppState;
