//! Budget tracking
//!
//! [`aggregator`] holds the pure figures (total, breakdown, overrun) and the
//! overrun notification; [`tracker`] wires them to the document store.

pub mod aggregator;
pub mod tracker;

pub use aggregator::{
    check_overrun, compute_breakdown, compute_total, palette_color, BudgetAggregator,
    BudgetSummary, Slice, FALLBACK_LABEL, PALETTE,
};
pub use tracker::{BudgetSnapshot, BudgetTracker};

use crate::models::Money;

/// Target used when none is given
pub const DEFAULT_BUDGET_TARGET: Money = Money::from_units(30_000_000);
