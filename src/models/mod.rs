//! Data models for the validation service.
//!
//! Document objects are plain serde value holders with no construction
//! invariants; validity is entirely externalized to the
//! [`validation`](crate::validation) module.

mod currency;
mod expense_report;
mod invoice;
mod payslip;

pub use currency::CurrencyCode;
pub use expense_report::{ExpenseItem, ExpenseReport};
pub use invoice::Invoice;
pub use payslip::{Employer, PaymentMethod, Payslip};
