//! In-memory document store
//!
//! Holds collections in process memory. It can be switched to an unavailable
//! state in which every call fails, the way a remote backend does when the
//! network is gone, and it counts the calls it receives.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{PlannerError, PlannerResult};
use crate::models::DocumentId;

use super::document::{sort_documents, Direction, Document, DocumentStore};

/// Document store kept in memory
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of store calls received so far, failed ones included
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self, operation: &str) -> PlannerResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(PlannerError::Storage(format!(
                "Document store unavailable during {}",
                operation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> PlannerResult<DocumentId> {
        self.begin_call("insert")?;

        let mut collections = self.collections.write().map_err(|e| {
            PlannerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = DocumentId::generate();
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        direction: Direction,
    ) -> PlannerResult<Vec<Document>> {
        self.begin_call("query")?;

        let collections = self.collections.read().map_err(|e| {
            PlannerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut documents = collections.get(collection).cloned().unwrap_or_default();
        sort_documents(&mut documents, order_field, direction);
        Ok(documents)
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> PlannerResult<bool> {
        self.begin_call("delete")?;

        let mut collections = self.collections.write().map_err(|e| {
            PlannerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = documents.len();
        documents.retain(|d| &d.id != id);
        Ok(documents.len() != before)
    }
}
