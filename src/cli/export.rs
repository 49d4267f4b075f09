//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_expenses_csv, export_json, export_milestones_csv, export_yaml, FullExport};
use crate::services::{ExpenseService, ScheduleService};

use super::PlannerContext;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV (single collection only)
    Csv,
    /// JSON
    Json,
    /// YAML, human-readable
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export expenses
    Expenses {
        /// Output file path
        output: PathBuf,
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
    /// Export milestones
    Milestones {
        /// Output file path
        output: PathBuf,
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
    /// Export everything in one file
    All {
        /// Output file path
        output: PathBuf,
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

fn create_output(path: &Path) -> PlannerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PlannerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle an export command
pub async fn handle_export_command(ctx: &PlannerContext, cmd: ExportCommands) -> PlannerResult<()> {
    let expenses = ExpenseService::new(ctx.store.as_ref());
    let schedule = ScheduleService::new(ctx.store.as_ref());

    match cmd {
        ExportCommands::Expenses { output, format } => {
            let records = expenses.list().await?;
            let writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => export_expenses_csv(&records, writer)?,
                ExportFormat::Json => export_json(&records, writer)?,
                ExportFormat::Yaml => export_yaml(&records, writer)?,
            }
            println!("Exported {} expenses to {}", records.len(), output.display());
        }

        ExportCommands::Milestones { output, format } => {
            let milestones = schedule.list().await?;
            let writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => export_milestones_csv(&milestones, writer)?,
                ExportFormat::Json => export_json(&milestones, writer)?,
                ExportFormat::Yaml => export_yaml(&milestones, writer)?,
            }
            println!(
                "Exported {} milestones to {}",
                milestones.len(),
                output.display()
            );
        }

        ExportCommands::All { output, format } => {
            let snapshot = FullExport::new(expenses.list().await?, schedule.list().await?);
            match format {
                ExportFormat::Csv => {
                    return Err(PlannerError::Export(
                        "CSV holds one collection; export expenses or milestones instead".into(),
                    ))
                }
                ExportFormat::Json => export_json(&snapshot, create_output(&output)?)?,
                ExportFormat::Yaml => export_yaml(&snapshot, create_output(&output)?)?,
            }
            println!(
                "Exported {} expenses and {} milestones to {}",
                snapshot.expenses.len(),
                snapshot.milestones.len(),
                output.display()
            );
        }
    }

    Ok(())
}
