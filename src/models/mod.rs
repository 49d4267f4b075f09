//! Core data models for the wedding planner
//!
//! Expenses, milestones and venues, plus the money, currency and id types
//! they are built from.

pub mod currency;
pub mod expense;
pub mod ids;
pub mod milestone;
pub mod money;
pub mod venue;

pub use currency::Currency;
pub use expense::{
    EntryKind, ExpenseFields, ExpenseInput, ExpenseRecord, ExpenseValidationError, NewExpense,
};
pub use ids::DocumentId;
pub use milestone::{Milestone, MilestoneFields, MilestoneValidationError};
pub use money::{Money, MoneyParseError};
pub use venue::{sample_venues, SortOrder, Venue, VenueSortKey};
