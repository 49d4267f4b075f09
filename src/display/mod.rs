//! Display formatting for terminal output

pub mod expense;
pub mod schedule;
pub mod venue;

pub use expense::{format_breakdown, format_expense_table, format_total_line};
pub use schedule::format_milestone_table;
pub use venue::format_venue_table;
