//! Request types for the validation service API.
//!
//! Every field of an inbound document may be absent or null; presence is a
//! business rule enforced by the validators, not by deserialization. The
//! one exception is the expense-report currency code, whose well-formedness
//! is checked while parsing (see [`CurrencyCode`]).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CurrencyCode, Employer, ExpenseItem, ExpenseReport, Invoice, PaymentMethod, Payslip,
};

/// Request body for the `/invoices/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Unique identifier for the invoice.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Total amount stated on the invoice.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// ISO 4217 currency code used in the invoice.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request body for the `/payslips/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Full name of the employee.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The pay period the payslip refers to (e.g., "2025-05").
    #[serde(default)]
    pub pay_period: Option<String>,
    /// Date the payment was issued.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Gross salary before deductions.
    #[serde(default)]
    pub gross_salary: Option<Decimal>,
    /// Deduction names mapped to deduction amounts.
    #[serde(default)]
    pub deductions: Option<BTreeMap<String, Option<Decimal>>>,
    /// Net salary after all deductions.
    #[serde(default)]
    pub net_salary: Option<Decimal>,
    /// Method used to pay the employee.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Bank account in IBAN form, for bank transfers.
    #[serde(default)]
    pub bank_account: Option<String>,
    /// The employer who issued the payslip.
    #[serde(default)]
    pub employer: Option<EmployerRequest>,
    /// Number of hours worked during the pay period.
    #[serde(default)]
    pub hours_worked: i32,
}

/// Employer information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerRequest {
    /// The legal name of the employer or company.
    #[serde(default)]
    pub company_name: String,
    /// A unique identifier for the employer.
    #[serde(default)]
    pub employer_id: String,
}

/// Request body for the `/reports/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReportRequest {
    /// Unique identifier for the report.
    #[serde(default)]
    pub report_id: Option<String>,
    /// Unique identifier for the submitting employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Business justification for the claimed expenses.
    #[serde(default)]
    pub business_purpose: Option<String>,
    /// Currency the expenses are claimed in; rejected at parse time when the
    /// code does not resolve to a known currency.
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
    /// Date the report was submitted.
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    /// The claimed expense lines.
    #[serde(default)]
    pub items: Option<Vec<ExpenseItemRequest>>,
}

/// A single expense line in an expense report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItemRequest {
    /// Expense category.
    #[serde(default)]
    pub category: Option<String>,
    /// Amount claimed for this expense.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Date the expense was incurred.
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
    /// Free-text description of the expense.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<InvoiceRequest> for Invoice {
    fn from(req: InvoiceRequest) -> Self {
        Invoice {
            invoice_number: req.invoice_number,
            amount: req.amount,
            currency: req.currency,
        }
    }
}

impl From<PayslipRequest> for Payslip {
    fn from(req: PayslipRequest) -> Self {
        Payslip {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            pay_period: req.pay_period,
            payment_date: req.payment_date,
            gross_salary: req.gross_salary,
            deductions: req.deductions,
            net_salary: req.net_salary,
            payment_method: req.payment_method,
            bank_account: req.bank_account,
            employer: req.employer.map(Into::into),
            hours_worked: req.hours_worked,
        }
    }
}

impl From<EmployerRequest> for Employer {
    fn from(req: EmployerRequest) -> Self {
        Employer {
            company_name: req.company_name,
            employer_id: req.employer_id,
        }
    }
}

impl From<ExpenseReportRequest> for ExpenseReport {
    fn from(req: ExpenseReportRequest) -> Self {
        ExpenseReport {
            report_id: req.report_id,
            employee_id: req.employee_id,
            business_purpose: req.business_purpose,
            currency: req.currency,
            submission_date: req.submission_date,
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<ExpenseItemRequest> for ExpenseItem {
    fn from(req: ExpenseItemRequest) -> Self {
        ExpenseItem {
            category: req.category,
            amount: req.amount,
            expense_date: req.expense_date,
            description: req.description,
        }
    }
}
