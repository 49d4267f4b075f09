//! Service layer
//!
//! Typed operations over the document store, plus the in-memory venue table.

pub mod expense;
pub mod schedule;
pub mod venue;

pub use expense::ExpenseService;
pub use schedule::ScheduleService;
pub use venue::VenueTable;
