//! Budget aggregation
//!
//! Turns expense records into a total, a per-record breakdown for proportional
//! display, and an overrun signal against the target. Every check that finds
//! the budget overrun dispatches one notification; repeated checks refire.

use std::sync::Arc;

use crate::i18n::Catalog;
use crate::models::{Currency, ExpenseRecord, Money};
use crate::notify::Notifier;

/// Slice colors, assigned by position
pub const PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

/// Label for records with neither category nor item
pub const FALLBACK_LABEL: &str = "Etc";

/// Color for the slice at `index`
///
/// Colors follow list position, so inserting or deleting a record shifts the
/// colors of every record after it.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One labeled share of the budget
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: Money,
    pub color_index: usize,
}

impl Slice {
    pub fn color(&self) -> &'static str {
        palette_color(self.color_index)
    }

    /// Fraction of `total` this slice represents (0.0 when total is zero)
    pub fn share(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.value.units() as f64 / total.units() as f64
        }
    }
}

/// Sum of all amounts; zero for no records
///
/// The sum saturates at `i64::MAX`, which still reads as overrun against any
/// target.
pub fn compute_total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// One slice per record, in input order
pub fn compute_breakdown(records: &[ExpenseRecord]) -> Vec<Slice> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| Slice {
            label: slice_label(record).to_string(),
            value: record.amount,
            color_index: position % PALETTE.len(),
        })
        .collect()
}

fn slice_label(record: &ExpenseRecord) -> &str {
    if !record.category.is_empty() {
        &record.category
    } else {
        record.item.as_deref().unwrap_or(FALLBACK_LABEL)
    }
}

/// Whether spending has gone past the target (strictly)
pub fn check_overrun(total: Money, target: Money) -> bool {
    total > target
}

/// Snapshot of the budget figures for display
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total: Money,
    pub target: Money,
    pub breakdown: Vec<Slice>,
    pub overrun: bool,
}

/// Keeps the current expense list and evaluates it against the target
pub struct BudgetAggregator {
    records: Vec<ExpenseRecord>,
    target: Money,
    currency: Currency,
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
}

impl BudgetAggregator {
    pub fn new(target: Money, currency: Currency, catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            records: Vec::new(),
            target,
            currency,
            catalog,
            notifier,
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn replace_records(&mut self, records: Vec<ExpenseRecord>) {
        self.records = records;
    }

    pub fn target(&self) -> Money {
        self.target
    }

    pub fn set_target(&mut self, target: Money) {
        self.target = target;
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn total(&self) -> Money {
        compute_total(&self.records)
    }

    pub fn summary(&self) -> BudgetSummary {
        let total = self.total();
        BudgetSummary {
            total,
            target: self.target,
            breakdown: compute_breakdown(&self.records),
            overrun: check_overrun(total, self.target),
        }
    }

    /// Check the current total and notify once if it is over target
    ///
    /// Returns whether the budget is overrun.
    pub fn check_and_notify(&self) -> bool {
        let total = self.total();
        if !check_overrun(total, self.target) {
            return false;
        }

        let (title, body) = self.overrun_message(total);
        tracing::info!(
            total = total.units(),
            target = self.target.units(),
            "budget overrun"
        );
        self.notifier.schedule_immediate(&title, &body);
        true
    }

    /// Localized title and body for an overrun notification
    pub fn overrun_message(&self, total: Money) -> (String, String) {
        let title = self.catalog.t("budget_exceeded_title").to_string();
        let total_text = self.currency.format(total);
        let target_text = self.currency.format(self.target);
        let body = self.catalog.format(
            "budget_exceeded_body",
            &[("total", total_text.as_str()), ("target", target_text.as_str())],
        );
        (title, body)
    }
}
