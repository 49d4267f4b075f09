//! Expense model
//!
//! An expense is created once, listed newest first and deleted by id. It is
//! never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DocumentId;
use super::money::{Money, MoneyParseError};

/// Category used when the user does not pick one
pub const DEFAULT_CATEGORY: &str = "General";

/// Suggested categories for wedding spending
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["Venue", "Dress", "Food", DEFAULT_CATEGORY];

/// Kind of budget entry; everything created here is an expense
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Expense,
    Income,
}

/// Fields of an expense document as kept in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFields {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub item: String,

    #[serde(deserialize_with = "Money::deserialize_lenient")]
    pub amount: Money,

    /// Stored as `type`; documents without it read as expenses
    #[serde(rename = "type", default)]
    pub kind: EntryKind,

    /// Entry date; the expense list is ordered on this field
    pub date: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub id: DocumentId,
    pub category: String,
    pub item: Option<String>,
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Combine a store-assigned id with the stored fields
    pub fn from_fields(id: DocumentId, fields: ExpenseFields) -> Self {
        let item = Some(fields.item.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            id,
            category: fields.category.trim().to_string(),
            item,
            amount: fields.amount,
            date: fields.date,
            created_at: fields.created_at,
        }
    }

    /// Text shown as the primary line of a list row: the item, else the category
    pub fn title(&self) -> &str {
        self.item.as_deref().unwrap_or(&self.category)
    }
}

/// Raw input from the add form, before validation
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub category: Option<String>,
    pub item: String,
    pub amount: String,
}

impl ExpenseInput {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: None,
            item: item.into(),
            amount: amount.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validate the input into a typed expense ready for insertion
    pub fn validate(&self) -> Result<NewExpense, ExpenseValidationError> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err(ExpenseValidationError::MissingItem);
        }
        if item.len() > 200 {
            return Err(ExpenseValidationError::ItemTooLong(item.len()));
        }

        let amount = Money::parse(&self.amount).map_err(ExpenseValidationError::Amount)?;

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        Ok(NewExpense {
            category: category.to_string(),
            item: item.to_string(),
            amount,
        })
    }
}

/// A validated expense not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category: String,
    pub item: String,
    pub amount: Money,
}

impl NewExpense {
    /// Build the stored fields, stamping date and creation time
    pub fn into_fields(self, now: DateTime<Utc>) -> ExpenseFields {
        ExpenseFields {
            category: self.category,
            item: self.item,
            amount: self.amount,
            kind: EntryKind::Expense,
            date: now,
            created_at: now,
        }
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingItem,
    ItemTooLong(usize),
    Amount(MoneyParseError),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingItem => write!(f, "Item is required"),
            Self::ItemTooLong(len) => {
                write!(f, "Item description too long ({} chars, max 200)", len)
            }
            Self::Amount(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults_category() {
        let expense = ExpenseInput::new("Dress fitting", "2,000,000").validate().unwrap();
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.item, "Dress fitting");
        assert_eq!(expense.amount.units(), 2_000_000);

        let expense = ExpenseInput::new("Hall", "5000000")
            .with_category("Venue")
            .validate()
            .unwrap();
        assert_eq!(expense.category, "Venue");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert_eq!(
            ExpenseInput::new("", "1000").validate(),
            Err(ExpenseValidationError::MissingItem)
        );
        assert_eq!(
            ExpenseInput::new("  ", "1000").validate(),
            Err(ExpenseValidationError::MissingItem)
        );
        assert_eq!(
            ExpenseInput::new("Flowers", "").validate(),
            Err(ExpenseValidationError::Amount(MoneyParseError::Empty))
        );
        assert!(matches!(
            ExpenseInput::new("Flowers", "a lot").validate(),
            Err(ExpenseValidationError::Amount(MoneyParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_record_from_fields_normalizes_item() {
        let now = Utc::now();
        let fields = ExpenseFields {
            category: "Food".into(),
            item: "   ".into(),
            amount: Money::from_units(8_000_000),
            kind: EntryKind::Expense,
            date: now,
            created_at: now,
        };
        let record = ExpenseRecord::from_fields(DocumentId::from("3"), fields);
        assert_eq!(record.item, None);
        assert_eq!(record.title(), "Food");
    }

    #[test]
    fn test_fields_accept_string_amount() {
        let json = r#"{
            "category": "Venue",
            "item": "Hall deposit",
            "amount": "5000000",
            "date": "2026-03-01T09:00:00Z",
            "createdAt": "2026-03-01T09:00:00Z"
        }"#;
        let fields: ExpenseFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.amount.units(), 5_000_000);
        assert_eq!(fields.kind, EntryKind::Expense);
    }

    #[test]
    fn test_new_expense_is_stored_with_type() {
        let fields = ExpenseInput::new("Hall", "5000000")
            .validate()
            .unwrap()
            .into_fields(Utc::now());
        let stored = serde_json::to_value(&fields).unwrap();
        assert_eq!(stored["type"], "expense");
        assert_eq!(stored["amount"], 5_000_000);
        assert!(stored.get("createdAt").is_some());
    }
}
