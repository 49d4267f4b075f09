//! JSON file document store
//!
//! Each collection is one file, `<data_dir>/<collection>.json`, rewritten
//! atomically on every change.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlannerError, PlannerResult};
use crate::models::DocumentId;

use super::document::{sort_documents, Direction, Document, DocumentStore};
use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of a collection file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CollectionData {
    documents: Vec<Document>,
}

/// Document store backed by JSON files
pub struct JsonDocumentStore {
    data_dir: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonDocumentStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            write_lock: Mutex::new(()),
        }
    }

    fn collection_file(&self, collection: &str) -> PlannerResult<PathBuf> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PlannerError::Storage(format!(
                "Invalid collection name: {:?}",
                collection
            )));
        }
        Ok(self.data_dir.join(format!("{}.json", collection)))
    }

    fn load(&self, collection: &str) -> PlannerResult<CollectionData> {
        read_json(self.collection_file(collection)?)
    }

    fn store(&self, collection: &str, data: &CollectionData) -> PlannerResult<()> {
        write_json_atomic(self.collection_file(collection)?, data)
    }

    fn lock(&self) -> PlannerResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> PlannerResult<DocumentId> {
        let _guard = self.lock()?;
        let mut data = self.load(collection)?;

        let id = DocumentId::generate();
        data.documents.push(Document {
            id: id.clone(),
            fields,
        });
        self.store(collection, &data)?;

        tracing::debug!(collection, %id, "inserted document");
        Ok(id)
    }

    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        direction: Direction,
    ) -> PlannerResult<Vec<Document>> {
        let mut documents = self.load(collection)?.documents;
        sort_documents(&mut documents, order_field, direction);

        tracing::debug!(collection, order_field, count = documents.len(), "queried collection");
        Ok(documents)
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> PlannerResult<bool> {
        let _guard = self.lock()?;
        let mut data = self.load(collection)?;

        let before = data.documents.len();
        data.documents.retain(|d| &d.id != id);
        let removed = data.documents.len() != before;

        if removed {
            self.store(collection, &data)?;
        }

        tracing::debug!(collection, %id, removed, "deleted document");
        Ok(removed)
    }
}
