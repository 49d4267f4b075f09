//! Wedding Planner - budget tracking, schedule milestones and venue comparison
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, milestones, venues, money and currency
//! - `storage`: Document store trait with JSON-file and in-memory backends
//! - `budget`: Aggregation, overrun notification and the budget state container
//! - `services`: Typed operations over the store and the venue table
//! - `notify`: Notification sinks
//! - `i18n`: Localized strings with fallback
//! - `display`, `export`, `cli`: Terminal output, file export and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wedding_planner::budget::{BudgetAggregator, BudgetTracker};
//! use wedding_planner::i18n::Catalog;
//! use wedding_planner::models::{Currency, ExpenseInput, Money};
//! use wedding_planner::notify::ConsoleNotifier;
//! use wedding_planner::storage::MemoryDocumentStore;
//!
//! let aggregator = BudgetAggregator::new(
//!     Money::from_units(10_000_000),
//!     Currency::Krw,
//!     Catalog::builtin("en"),
//!     Arc::new(ConsoleNotifier),
//! );
//! let tracker = BudgetTracker::new(Arc::new(MemoryDocumentStore::new()), aggregator);
//! tracker.add(&ExpenseInput::new("Hall", "15,000,000")).await?;
//! ```

pub mod budget;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod notify;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
