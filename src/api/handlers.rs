//! HTTP request handlers for the validation service API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ExpenseReport, Invoice, Payslip};
use crate::validation::{validate_expense_report, validate_invoice, validate_payslip};

use super::request::{ExpenseReportRequest, InvoiceRequest, PayslipRequest};
use super::response::ValidationResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/invoices/validate", post(validate_invoice_handler))
        .route("/payslips/validate", post(validate_payslip_handler))
        .route("/reports/validate", post(validate_expense_report_handler))
        .with_state(state)
}

/// Handler for POST /invoices/validate.
async fn validate_invoice_handler(
    State(_state): State<AppState>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice validation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let invoice: Invoice = request.into();
    let errors = validate_invoice(&invoice);
    verdict_response(correlation_id, "invoice", "Invoice is valid", errors)
}

/// Handler for POST /payslips/validate.
async fn validate_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip validation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let payslip: Payslip = request.into();
    let errors = validate_payslip(&payslip, state.today());
    verdict_response(correlation_id, "payslip", "Payslip is valid", errors)
}

/// Handler for POST /reports/validate.
async fn validate_expense_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing expense report validation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let report: ExpenseReport = request.into();
    let errors = validate_expense_report(&report, state.today());
    verdict_response(
        correlation_id,
        "expense_report",
        "Expense report is valid",
        errors,
    )
}

/// Maps a validator verdict to the HTTP response.
fn verdict_response(
    correlation_id: Uuid,
    document: &'static str,
    confirmation: &str,
    errors: Vec<String>,
) -> Response {
    if errors.is_empty() {
        info!(correlation_id = %correlation_id, document, "Validation passed");
        (StatusCode::OK, Json(ValidationResponse::valid(confirmation))).into_response()
    } else {
        info!(
            correlation_id = %correlation_id,
            document,
            error_count = errors.len(),
            "Validation failed"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationResponse::invalid(errors)),
        )
            .into_response()
    }
}

/// Maps a body that could not be parsed into a document to the HTTP response.
///
/// A currency code that failed to resolve is surfaced as the sole message;
/// every other malformed body collapses to a generic one.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let messages = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            parse_failure_messages(&body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            vec!["Invalid request format".to_string()]
        }
        other => {
            warn!(correlation_id = %correlation_id, error = %other.body_text(), "Rejected request body");
            vec!["Invalid request format".to_string()]
        }
    };

    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse::invalid(messages)),
    )
        .into_response()
}

/// Extracts the synthesized currency message from a serde error, if present.
fn parse_failure_messages(body_text: &str) -> Vec<String> {
    if let Some(start) = body_text.find("Invalid currency code:") {
        let tail = &body_text[start..];
        // serde_json appends " at line N column M"; drop it.
        let message = tail.split(" at line").next().unwrap_or(tail);
        return vec![message.trim().to_string()];
    }
    vec!["Invalid request format".to_string()]
}
