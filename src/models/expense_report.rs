//! Expense report model and related types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// A single expense line within an [`ExpenseReport`].
///
/// Item fields are carried through but not currently validated; only the
/// presence of the surrounding item list is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Expense category (e.g., "Travel", "Meals").
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

/// Represents an expense report submitted for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseReport {
    /// Unique identifier for the report.
    pub report_id: Option<String>,
    /// Unique identifier for the employee who submitted the report.
    pub employee_id: Option<String>,
    /// Business justification for the claimed expenses.
    pub business_purpose: Option<String>,
    /// Currency the expenses are claimed in. Well-formedness (ISO 4217
    /// existence) is enforced when the inbound payload is parsed, not here.
    pub currency: Option<CurrencyCode>,
    /// Date the report was submitted.
    pub submission_date: Option<NaiveDate>,
    /// The claimed expense lines.
    pub items: Option<Vec<ExpenseItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_expense_report() {
        let json = r#"{
            "report_id": "RPT001",
            "employee_id": "EMP001",
            "business_purpose": "Client visit",
            "currency": "EUR",
            "submission_date": "2025-05-20",
            "items": [
                {
                    "category": "Travel",
                    "amount": 120.50,
                    "expense_date": "2025-05-18",
                    "description": "Train ticket"
                }
            ]
        }"#;

        let report: ExpenseReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.report_id.as_deref(), Some("RPT001"));
        assert_eq!(report.currency.as_ref().map(CurrencyCode::as_str), Some("EUR"));
        assert_eq!(
            report.submission_date,
            Some(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
        );

        let items = report.items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category.as_deref(), Some("Travel"));
        assert_eq!(items[0].amount, Some(Decimal::new(12050, 2)));
    }

    #[test]
    fn test_deserialize_report_with_null_items() {
        let json = r#"{
            "report_id": "RPT002",
            "employee_id": "EMP001",
            "business_purpose": "Conference",
            "currency": "USD",
            "submission_date": "2025-05-20",
            "items": null
        }"#;

        let report: ExpenseReport = serde_json::from_str(json).unwrap();
        assert!(report.items.is_none());
    }

    #[test]
    fn test_deserialize_item_with_missing_fields() {
        // Items are not validated, so sparse entries must still parse.
        let json = r#"{ "category": "Meals" }"#;

        let item: ExpenseItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category.as_deref(), Some("Meals"));
        assert!(item.amount.is_none());
        assert!(item.expense_date.is_none());
        assert!(item.description.is_none());
    }

    #[test]
    fn test_serialize_report_round_trip() {
        let report = ExpenseReport {
            report_id: Some("RPT003".to_string()),
            employee_id: Some("EMP002".to_string()),
            business_purpose: Some("Team offsite".to_string()),
            currency: serde_json::from_str("\"GBP\"").ok(),
            submission_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            items: Some(vec![]),
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ExpenseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
