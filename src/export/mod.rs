//! Data export
//!
//! - CSV: one collection per file, spreadsheet-friendly
//! - JSON / YAML: a full snapshot of expenses and milestones

pub mod csv;

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseRecord, Milestone};

pub use self::csv::{export_expenses_csv, export_milestones_csv};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Full planner snapshot
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub expenses: Vec<ExpenseRecord>,
    pub milestones: Vec<Milestone>,
}

impl FullExport {
    pub fn new(expenses: Vec<ExpenseRecord>, milestones: Vec<Milestone>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            expenses,
            milestones,
        }
    }
}

/// Write any serializable value as pretty JSON
pub fn export_json<T: Serialize, W: Write>(data: &T, writer: W) -> PlannerResult<()> {
    serde_json::to_writer_pretty(writer, data).map_err(|e| PlannerError::Export(e.to_string()))
}

/// Write any serializable value as YAML
pub fn export_yaml<T: Serialize, W: Write>(data: &T, writer: W) -> PlannerResult<()> {
    serde_yaml::to_writer(writer, data).map_err(|e| PlannerError::Export(e.to_string()))
}
