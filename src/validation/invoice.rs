//! Invoice validation rules.

use rust_decimal::Decimal;

use crate::models::Invoice;

use super::is_blank;

/// Currencies accepted on invoices. Exact, case-sensitive match.
const VALID_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Validates the fields of a given [`Invoice`].
///
/// Checks that the amount is present and non-negative, the currency is
/// supported, and the invoice number is present. Every rule runs on every
/// call; the returned messages are appended in rule order but callers must
/// not rely on ordering.
///
/// # Example
///
/// ```
/// use fincheck::models::Invoice;
/// use fincheck::validation::validate_invoice;
/// use rust_decimal::Decimal;
///
/// let invoice = Invoice {
///     invoice_number: Some("INV001".to_string()),
///     amount: Some(Decimal::new(25000, 1)),
///     currency: Some("EUR".to_string()),
/// };
/// assert!(validate_invoice(&invoice).is_empty());
/// ```
pub fn validate_invoice(invoice: &Invoice) -> Vec<String> {
    let mut errors = Vec::new();

    match invoice.amount {
        None => errors.push("Amount must be provided".to_string()),
        Some(amount) if amount < Decimal::ZERO => {
            errors.push("Amount must not be negative".to_string());
        }
        Some(_) => {}
    }

    let currency = invoice.currency.as_deref();
    if !currency.is_some_and(|code| VALID_CURRENCIES.contains(&code)) {
        errors.push(format!(
            "Invalid currency: {}",
            currency.unwrap_or("null")
        ));
    }

    // Invoice number must be present and not just whitespace.
    if is_blank(invoice.invoice_number.as_deref()) {
        errors.push("Invoice number must not be empty".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_invoice() -> Invoice {
        Invoice {
            invoice_number: Some("INV001".to_string()),
            amount: Some(Decimal::new(25000, 1)),
            currency: Some("EUR".to_string()),
        }
    }

    #[test]
    fn test_valid_invoice_returns_no_errors() {
        let errors = validate_invoice(&base_invoice());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_amount_returns_error() {
        let mut invoice = base_invoice();
        invoice.amount = None;

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Amount must be provided".to_string()));
        assert!(!errors.contains(&"Amount must not be negative".to_string()));
    }

    #[test]
    fn test_negative_amount_returns_error() {
        let mut invoice = base_invoice();
        invoice.amount = Some(Decimal::new(-100, 1));

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Amount must not be negative".to_string()));
        assert!(!errors.contains(&"Amount must be provided".to_string()));
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let mut invoice = base_invoice();
        invoice.amount = Some(Decimal::ZERO);

        let errors = validate_invoice(&invoice);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unsupported_currency_returns_error_with_value() {
        let mut invoice = base_invoice();
        invoice.currency = Some("ABC".to_string());

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Invalid currency: ABC".to_string()));
    }

    #[test]
    fn test_currency_match_is_case_sensitive() {
        let mut invoice = base_invoice();
        invoice.currency = Some("eur".to_string());

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Invalid currency: eur".to_string()));
    }

    #[test]
    fn test_missing_currency_renders_null() {
        let mut invoice = base_invoice();
        invoice.currency = None;

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Invalid currency: null".to_string()));
    }

    #[test]
    fn test_all_supported_currencies_are_accepted() {
        for code in ["USD", "EUR", "GBP"] {
            let mut invoice = base_invoice();
            invoice.currency = Some(code.to_string());
            assert!(
                validate_invoice(&invoice).is_empty(),
                "{} should be accepted",
                code
            );
        }
    }

    #[test]
    fn test_missing_invoice_number_returns_error() {
        let mut invoice = base_invoice();
        invoice.invoice_number = None;

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Invoice number must not be empty".to_string()));
    }

    #[test]
    fn test_whitespace_invoice_number_returns_error() {
        let mut invoice = base_invoice();
        invoice.invoice_number = Some("   ".to_string());

        let errors = validate_invoice(&invoice);
        assert!(errors.contains(&"Invoice number must not be empty".to_string()));
    }

    #[test]
    fn test_multiple_invalid_fields_return_multiple_errors() {
        let invoice = Invoice {
            invoice_number: Some("".to_string()),
            amount: Some(Decimal::new(-100, 1)),
            currency: Some("ABC".to_string()),
        };

        let errors = validate_invoice(&invoice);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&"Amount must not be negative".to_string()));
        assert!(errors.contains(&"Invalid currency: ABC".to_string()));
        assert!(errors.contains(&"Invoice number must not be empty".to_string()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut invoice = base_invoice();
        invoice.currency = Some("ABC".to_string());

        let first = validate_invoice(&invoice);
        let second = validate_invoice(&invoice);
        assert_eq!(first, second);
    }
}
