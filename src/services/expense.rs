//! Expense service
//!
//! Typed access to the budgets collection.

use chrono::Utc;

use crate::error::PlannerResult;
use crate::models::{DocumentId, ExpenseFields, ExpenseRecord, NewExpense};
use crate::storage::{to_fields, Direction, DocumentStore, BUDGETS_COLLECTION};

/// Service for stored expenses
pub struct ExpenseService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Store a validated expense, stamped with the current time
    pub async fn add(&self, expense: NewExpense) -> PlannerResult<DocumentId> {
        let fields = to_fields(&expense.into_fields(Utc::now()))?;
        let id = self.store.insert(BUDGETS_COLLECTION, fields).await?;
        tracing::info!(%id, "added expense");
        Ok(id)
    }

    /// All expenses, newest first
    ///
    /// Documents that cannot be read as expenses (for example a non-numeric
    /// amount written by another client) are skipped with a warning.
    pub async fn list(&self) -> PlannerResult<Vec<ExpenseRecord>> {
        let documents = self
            .store
            .query_ordered(BUDGETS_COLLECTION, "date", Direction::Descending)
            .await?;

        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            match document.decode::<ExpenseFields>() {
                Ok(fields) => records.push(ExpenseRecord::from_fields(document.id, fields)),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable expense"),
            }
        }
        Ok(records)
    }

    /// Delete an expense by id
    pub async fn delete(&self, id: &DocumentId) -> PlannerResult<bool> {
        let removed = self.store.delete_by_id(BUDGETS_COLLECTION, id).await?;
        tracing::info!(%id, removed, "deleted expense");
        Ok(removed)
    }
}
