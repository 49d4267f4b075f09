//! Budget CLI commands

use std::sync::Arc;

use clap::{Args, Subcommand};

use crate::budget::{BudgetAggregator, BudgetTracker, DEFAULT_BUDGET_TARGET};
use crate::display::{format_breakdown, format_expense_table, format_total_line};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseInput, Money};
use crate::notify::ConsoleNotifier;

use super::PlannerContext;

/// Budget arguments shared by all subcommands
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Spending target for this run, in whole currency units
    #[arg(
        short,
        long,
        global = true,
        env = "WEDDING_BUDGET_TARGET",
        value_parser = parse_target
    )]
    pub target: Option<Money>,

    #[command(subcommand)]
    pub command: BudgetCommands,
}

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// List expenses, newest first
    List,
    /// Add an expense
    Add {
        /// What the money is for (e.g. "Dress fitting")
        item: String,
        /// Amount in whole currency units (e.g. 2000000 or 2,000,000)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Venue, Dress, Food, ...); defaults to General
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense by ID or ID prefix
    Delete {
        /// Expense ID (the short form from `budget list` works)
        expense: String,
    },
    /// Show total against target and the per-item breakdown
    Summary,
}

fn parse_target(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Handle a budget command
pub async fn handle_budget_command(ctx: &PlannerContext, args: BudgetArgs) -> PlannerResult<()> {
    let currency = ctx.settings.currency;
    let aggregator = BudgetAggregator::new(
        args.target.unwrap_or(DEFAULT_BUDGET_TARGET),
        currency,
        ctx.catalog.clone(),
        Arc::new(ConsoleNotifier),
    );
    let tracker = BudgetTracker::new(ctx.store.clone(), aggregator);

    match args.command {
        BudgetCommands::List => {
            tracker.refresh().await?;
            let snapshot = tracker.snapshot()?;
            println!("{}", ctx.catalog.t("budget"));
            println!(
                "{}",
                format_expense_table(&snapshot.records, currency, &ctx.catalog)
            );
            println!("{}", format_total_line(&snapshot.summary, currency, &ctx.catalog));
        }

        BudgetCommands::Add {
            item,
            amount,
            category,
        } => {
            let mut input = ExpenseInput::new(item, amount);
            input.category = category;

            let id = tracker.add(&input).await?;
            let snapshot = tracker.snapshot()?;
            if let Some(notice) = &snapshot.fetch_error {
                eprintln!("{}", notice);
            }
            println!("Added expense {}", id.short());
            println!("{}", format_total_line(&snapshot.summary, currency, &ctx.catalog));
        }

        BudgetCommands::Delete { expense } => {
            tracker.refresh().await?;
            let record = tracker
                .find(&expense)?
                .ok_or_else(|| PlannerError::expense_not_found(&expense))?;

            if !tracker.delete(&record.id).await? {
                return Err(PlannerError::expense_not_found(record.id.as_str()));
            }
            if let Some(notice) = &tracker.snapshot()?.fetch_error {
                eprintln!("{}", notice);
            }
            println!(
                "Deleted expense: {} ({})",
                record.title(),
                currency.format(record.amount)
            );
        }

        BudgetCommands::Summary => {
            tracker.refresh().await?;
            let summary = tracker.snapshot()?.summary;
            println!("{}", format_total_line(&summary, currency, &ctx.catalog));
            if summary.overrun {
                println!(
                    "Over target by {}",
                    currency.format(summary.total - summary.target)
                );
            }
            let chart = format_breakdown(&summary, currency);
            if !chart.is_empty() {
                println!();
                print!("{}", chart);
            }
        }
    }

    Ok(())
}
