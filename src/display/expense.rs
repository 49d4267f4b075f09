//! Expense display formatting
//!
//! List table, breakdown chart and the spend-versus-target summary line.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::budget::BudgetSummary;
use crate::i18n::Catalog;
use crate::models::{Currency, ExpenseRecord};

const BAR_WIDTH: usize = 20;

/// Format expenses as a table, newest first as given
pub fn format_expense_table(records: &[ExpenseRecord], currency: Currency, catalog: &Catalog) -> String {
    if records.is_empty() {
        return catalog.t("no_expenses").to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Date", "Item", "Category", "Amount"]);
    for record in records {
        builder.push_record([
            record.id.short().to_string(),
            record.date.format("%Y-%m-%d").to_string(),
            record.title().to_string(),
            record.category.clone(),
            currency.format(record.amount),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// "Total spent: ₩15,000,000 / ₩30,000,000"
pub fn format_total_line(summary: &BudgetSummary, currency: Currency, catalog: &Catalog) -> String {
    format!(
        "{}: {} / {}",
        catalog.t("total_spent"),
        currency.format(summary.total),
        currency.format(summary.target)
    )
}

/// Format the breakdown as a horizontal bar chart
pub fn format_breakdown(summary: &BudgetSummary, currency: Currency) -> String {
    if summary.breakdown.is_empty() {
        return String::new();
    }

    let label_width = summary
        .breakdown
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for slice in &summary.breakdown {
        let share = slice.share(summary.total);
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        let padding = label_width.saturating_sub(slice.label.chars().count());
        output.push_str(&format!(
            "{}{}  {}{}  {:>5.1}%  {:>14}  {}\n",
            slice.label,
            " ".repeat(padding),
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH.saturating_sub(filled)),
            share * 100.0,
            currency.format(slice.value),
            slice.color()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{compute_breakdown, compute_total};
    use crate::models::{DocumentId, Money};
    use chrono::Utc;

    fn records() -> Vec<ExpenseRecord> {
        let now = Utc::now();
        [("Venue", 5_000_000), ("Food", 15_000_000)]
            .into_iter()
            .map(|(category, amount)| ExpenseRecord {
                id: DocumentId::generate(),
                category: category.to_string(),
                item: None,
                amount: Money::from_units(amount),
                date: now,
                created_at: now,
            })
            .collect()
    }

    fn summary(records: &[ExpenseRecord]) -> BudgetSummary {
        BudgetSummary {
            total: compute_total(records),
            target: Money::from_units(30_000_000),
            breakdown: compute_breakdown(records),
            overrun: false,
        }
    }

    #[test]
    fn test_empty_table_uses_catalog() {
        let catalog = Catalog::builtin("en");
        assert_eq!(format_expense_table(&[], Currency::Krw, &catalog), "No expenses yet.");
    }

    #[test]
    fn test_table_contains_formatted_amounts() {
        let catalog = Catalog::builtin("en");
        let output = format_expense_table(&records(), Currency::Krw, &catalog);
        assert!(output.contains("₩5,000,000"));
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_total_line() {
        let catalog = Catalog::builtin("ko");
        let line = format_total_line(&summary(&records()), Currency::Krw, &catalog);
        assert_eq!(line, "총 지출: ₩20,000,000 / ₩30,000,000");
    }

    #[test]
    fn test_breakdown_bars_follow_share() {
        let output = format_breakdown(&summary(&records()), Currency::Krw);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), 5);
        assert_eq!(lines[1].matches('█').count(), 15);
        assert!(lines[1].contains("75.0%"));
        assert!(lines[1].contains("#36A2EB"));
    }
}
