//! Schedule service
//!
//! Adds milestones to the timeline and lists them in date order.

use chrono::{DateTime, Utc};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{DocumentId, Milestone, MilestoneFields};
use crate::storage::{to_fields, Direction, DocumentStore, MILESTONES_COLLECTION};

/// Service for schedule milestones
pub struct ScheduleService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ScheduleService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Add a milestone; `date` defaults to now
    ///
    /// A blank title is rejected before the store is contacted.
    pub async fn add(
        &self,
        title: &str,
        date: Option<DateTime<Utc>>,
        description: &str,
    ) -> PlannerResult<DocumentId> {
        let now = Utc::now();
        let fields = MilestoneFields::new(title.trim(), date.unwrap_or(now), description.trim(), now);
        fields
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let id = self
            .store
            .insert(MILESTONES_COLLECTION, to_fields(&fields)?)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to add milestone");
                PlannerError::Remote("Failed to add milestone".into())
            })?;

        tracing::info!(%id, title = %fields.title, "added milestone");
        Ok(id)
    }

    /// All milestones, earliest first
    pub async fn list(&self) -> PlannerResult<Vec<Milestone>> {
        let documents = self
            .store
            .query_ordered(MILESTONES_COLLECTION, "date", Direction::Ascending)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to load milestones");
                PlannerError::Remote("Failed to load milestones".into())
            })?;

        let mut milestones = Vec::with_capacity(documents.len());
        for document in documents {
            match document.decode::<MilestoneFields>() {
                Ok(fields) => milestones.push(Milestone::from_fields(document.id, fields)),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable milestone"),
            }
        }
        Ok(milestones)
    }
}
