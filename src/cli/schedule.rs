//! Schedule CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::display::format_milestone_table;
use crate::error::PlannerResult;
use crate::services::ScheduleService;

use super::PlannerContext;

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// List milestones, earliest first
    List,
    /// Add a milestone
    Add {
        /// Milestone title (e.g. "Meet the families")
        title: String,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,
        /// Optional description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
}

fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
        .and_then(|d| {
            d.and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc())
                .ok_or_else(|| format!("Invalid date '{}'", s))
        })
}

/// Handle a schedule command
pub async fn handle_schedule_command(ctx: &PlannerContext, cmd: ScheduleCommands) -> PlannerResult<()> {
    let service = ScheduleService::new(ctx.store.as_ref());

    match cmd {
        ScheduleCommands::List => {
            let milestones = service.list().await?;
            println!("{}", ctx.catalog.t("schedule"));
            println!(
                "{}",
                format_milestone_table(&milestones, &ctx.settings.date_format, &ctx.catalog)
            );
        }

        ScheduleCommands::Add {
            title,
            date,
            description,
        } => {
            let id = service.add(&title, date, &description).await?;
            println!("Added milestone {}: {}", id.short(), title.trim());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2026-05-20").unwrap();
        assert_eq!(date.to_rfc3339(), "2026-05-20T00:00:00+00:00");
        assert!(parse_date("20/05/2026").is_err());
    }
}
