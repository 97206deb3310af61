//! Expense report validation rules.

use chrono::NaiveDate;

use crate::models::ExpenseReport;

use super::is_blank;

/// Validates the fields of a given [`ExpenseReport`].
///
/// Checks the report and employee identifiers, the business purpose,
/// currency presence, the submission-date window against the injected
/// `today`, and that an item list was supplied. An empty item list is
/// accepted; only a missing list is rejected.
pub fn validate_expense_report(report: &ExpenseReport, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(report.report_id.as_deref()) {
        errors.push("Report ID must not be empty".to_string());
    }

    if is_blank(report.employee_id.as_deref()) {
        errors.push("Employee ID must not be empty".to_string());
    }

    if is_blank(report.business_purpose.as_deref()) {
        errors.push("Business purpose must not be empty".to_string());
    }

    if report.currency.is_none() {
        errors.push("Currency must not be null".to_string());
    }

    match report.submission_date {
        None => errors.push("Submission date must not be null".to_string()),
        Some(date) if date > today => {
            errors.push("Submission date must not be in the future".to_string());
        }
        Some(_) => {}
    }

    // TODO: validate individual item fields (category, amount, expense date,
    // description) once the rules for them are agreed.
    if report.items.is_none() {
        errors.push("Items must not be null".to_string());
    }

    errors
}
