//! Invoice model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a financial invoice submitted for validation.
///
/// Contains the minimal fields necessary to assess invoice correctness:
/// its identifier, monetary value, and associated currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice (e.g., "INV-001").
    pub invoice_number: Option<String>,
    /// Total amount stated on the invoice, expressed in the given currency.
    pub amount: Option<Decimal>,
    /// ISO 4217 currency code (e.g., "EUR", "USD", "GBP") used in the invoice.
    pub currency: Option<String>,
}
