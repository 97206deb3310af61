//! Payslip validation rules.
//!
//! This is the rule-dense core: salary presence and sign checks, identity
//! fields, pay-period format, payment-date window, per-entry deduction
//! checks with net-salary reconciliation, payment-method-conditional bank
//! account format, employer presence, and hours worked.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::{PaymentMethod, Payslip};

use super::is_blank;

/// IBAN-like structure: two uppercase letters, two digits, then 11-30
/// alphanumeric uppercase characters.
static IBAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]{11,30}$").expect("valid IBAN pattern"));

/// Validates the fields of a given [`Payslip`].
///
/// All rules are evaluated independently per call except where a rule is
/// explicitly conditional (bank-account checks apply to bank transfers only)
/// or internally short-circuited (net-salary reconciliation is skipped when
/// any deduction entry is invalid). `today` is the injected current date
/// used for the payment-date window check.
///
/// Returns the triggered messages appended in rule order; callers must not
/// rely on ordering.
pub fn validate_payslip(payslip: &Payslip, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    match payslip.gross_salary {
        None => errors.push("Gross salary must not be empty".to_string()),
        Some(gross) if gross <= Decimal::ZERO => {
            errors.push("Gross salary must be positive".to_string());
        }
        Some(_) => {}
    }

    match payslip.net_salary {
        None => errors.push("Net salary must not be empty".to_string()),
        Some(net) if net <= Decimal::ZERO => {
            errors.push("Net salary must be positive".to_string());
        }
        Some(_) => {}
    }

    if is_blank(payslip.employee_id.as_deref()) {
        errors.push("Employee ID must not be empty".to_string());
    }

    if is_blank(payslip.employee_name.as_deref()) {
        errors.push("Employee name must not be empty".to_string());
    }

    match payslip.pay_period.as_deref() {
        None => errors.push("Pay period must not be empty".to_string()),
        Some(period) if period.trim().is_empty() => {
            errors.push("Pay period must not be empty".to_string());
        }
        Some(period) if !is_year_month(period) => {
            errors.push("Pay period must follow the format YYYY-MM".to_string());
        }
        Some(_) => {}
    }

    match payslip.payment_date {
        None => errors.push("Payment date must not be empty".to_string()),
        Some(date) if date > today => {
            errors.push("Payment date cannot be in the future".to_string());
        }
        Some(_) => {}
    }

    validate_deductions(payslip, &mut errors);

    if payslip.payment_method.is_none() {
        errors.push("Payment method must not be empty".to_string());
    }

    // Bank account checks apply to bank transfers only.
    if payslip.payment_method == Some(PaymentMethod::BankTransfer) {
        match payslip.bank_account.as_deref() {
            None => {
                errors.push("Bank account (IBAN) must not be empty for bank transfers".to_string());
            }
            Some(account) if account.trim().is_empty() => {
                errors.push("Bank account (IBAN) must not be empty for bank transfers".to_string());
            }
            Some(account) if !IBAN_PATTERN.is_match(account) => {
                errors.push("Bank account (IBAN) format is invalid".to_string());
            }
            Some(_) => {}
        }
    }

    if payslip.employer.is_none() {
        errors.push("Employer must not be empty".to_string());
    }

    if payslip.hours_worked < 0 {
        errors.push("Hours worked must be non-negative".to_string());
    }

    errors
}

/// Per-entry deduction checks plus the net-salary reconciliation.
///
/// Any invalid entry (blank name or missing/negative amount) suppresses the
/// reconciliation; the reconciliation also needs both salary figures present.
fn validate_deductions(payslip: &Payslip, errors: &mut Vec<String>) {
    let Some(deductions) = payslip.deductions.as_ref().filter(|map| !map.is_empty()) else {
        errors.push("Deductions must not be empty".to_string());
        return;
    };

    let mut has_invalid_entry = false;

    for (name, amount) in deductions {
        if name.trim().is_empty() {
            errors.push("Deduction name must not be blank or null".to_string());
            has_invalid_entry = true;
        }

        match amount {
            Some(value) if *value >= Decimal::ZERO => {}
            _ => {
                errors.push(format!(
                    "Deduction amount for '{name}' must be non-negative and not null"
                ));
                has_invalid_entry = true;
            }
        }
    }

    if has_invalid_entry {
        return;
    }

    if let (Some(gross), Some(net)) = (payslip.gross_salary, payslip.net_salary) {
        let sum_deductions: Decimal = deductions.values().flatten().sum();
        let expected_net = gross - sum_deductions;

        // Tolerance of 0.01 absorbs rounding; exact equality is not required.
        if (net - expected_net).abs() > Decimal::new(1, 2) {
            errors.push("Net salary does not match gross salary minus deductions".to_string());
        }
    }
}

/// Checks the exact `YYYY-MM` shape: four digits, a hyphen, a two-digit
/// month in 01-12.
fn is_year_month(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || !bytes[5..].iter().all(u8::is_ascii_digit) {
        return false;
    }
    value[5..7]
        .parse::<u8>()
        .is_ok_and(|month| (1..=12).contains(&month))
}
