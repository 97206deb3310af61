//! Payslip model and related types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the supported methods of salary payment for a payslip.
///
/// Used in [`Payslip`] to specify how the employee was paid; the payment
/// method can influence validation rules (bank transfers require a bank
/// account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Payment made via a bank-to-bank transfer.
    BankTransfer,
    /// Payment issued via a physical cheque.
    Cheque,
    /// Payment made in physical cash.
    Cash,
    /// Automated deposit directly into the employee's account.
    DirectDeposit,
}

/// Represents the employer associated with a [`Payslip`].
///
/// Holds basic metadata about the company that issued the salary payment.
/// Opaque to validation: only its presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// The legal name of the employer or company.
    #[serde(default)]
    pub company_name: String,
    /// A unique identifier for the employer (e.g., internal code or tax ID).
    #[serde(default)]
    pub employer_id: String,
}

/// Represents an employee's payslip for a specific pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the employee.
    pub employee_id: Option<String>,
    /// Full name of the employee receiving the payslip.
    pub employee_name: Option<String>,
    /// The pay period the payslip refers to (e.g., "2025-05").
    pub pay_period: Option<String>,
    /// Date the payment was issued.
    pub payment_date: Option<NaiveDate>,
    /// Gross salary before deductions.
    pub gross_salary: Option<Decimal>,
    /// A map of deduction names (e.g., "Tax", "Pension") to deduction amounts.
    pub deductions: Option<BTreeMap<String, Option<Decimal>>>,
    /// Net salary after all deductions.
    pub net_salary: Option<Decimal>,
    /// Method used to pay the employee.
    pub payment_method: Option<PaymentMethod>,
    /// Bank account to which the payment was made, in IBAN form
    /// (e.g., "IE29AIBK93115212345678"). Only relevant for bank transfers.
    pub bank_account: Option<String>,
    /// Information about the employer who issued the payslip.
    pub employer: Option<Employer>,
    /// Number of hours worked during the pay period.
    pub hours_worked: i32,
}
