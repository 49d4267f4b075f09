//! CSV export
//!
//! Amounts are written as plain whole numbers so spreadsheets can sum them.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseRecord, Milestone};

fn export_err(e: impl std::fmt::Display) -> PlannerError {
    PlannerError::Export(e.to_string())
}

/// Write expenses as CSV
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> PlannerResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Category", "Item", "Amount", "Created"])
        .map_err(export_err)?;

    for record in records {
        out.write_record([
            record.id.to_string(),
            record.date.to_rfc3339(),
            record.category.clone(),
            record.item.clone().unwrap_or_default(),
            record.amount.units().to_string(),
            record.created_at.to_rfc3339(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}

/// Write milestones as CSV
pub fn export_milestones_csv<W: Write>(milestones: &[Milestone], writer: W) -> PlannerResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Title", "Description", "Completed"])
        .map_err(export_err)?;

    for milestone in milestones {
        out.write_record([
            milestone.id.to_string(),
            milestone.date.to_rfc3339(),
            milestone.title.clone(),
            milestone.description.clone(),
            milestone.is_completed.to_string(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}
