//! Milestone model
//!
//! A dated, named event on the wedding timeline (e.g. the families' first
//! meeting, the dress fitting).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DocumentId;

/// Fields of a milestone document as kept in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneFields {
    pub title: String,

    /// When the milestone happens; the schedule is ordered on this field
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_completed: bool,

    pub created_at: DateTime<Utc>,
}

impl MilestoneFields {
    /// Create fields for a new, not yet completed milestone
    pub fn new(
        title: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            description: description.into(),
            is_completed: false,
            created_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), MilestoneValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(MilestoneValidationError::EmptyTitle);
        }
        if title.len() > 100 {
            return Err(MilestoneValidationError::TitleTooLong(title.len()));
        }
        Ok(())
    }
}

/// A stored milestone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub id: DocumentId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Milestone {
    pub fn from_fields(id: DocumentId, fields: MilestoneFields) -> Self {
        Self {
            id,
            title: fields.title,
            date: fields.date,
            description: fields.description,
            is_completed: fields.is_completed,
            created_at: fields.created_at,
        }
    }
}

/// Validation errors for milestones
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilestoneValidationError {
    EmptyTitle,
    TitleTooLong(usize),
}

impl fmt::Display for MilestoneValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Milestone title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Milestone title too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for MilestoneValidationError {}
