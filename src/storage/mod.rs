//! Storage layer
//!
//! An opaque document collection API with two backends: JSON files on disk
//! and process memory.

pub mod document;
pub mod file_io;
pub mod json_store;
pub mod memory;

pub use document::{
    to_fields, Direction, Document, DocumentStore, BUDGETS_COLLECTION, MILESTONES_COLLECTION,
};
pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonDocumentStore;
pub use memory::MemoryDocumentStore;

use crate::config::paths::PlannerPaths;
use crate::error::PlannerError;

/// Open the on-disk store for a set of paths, creating directories as needed
pub fn open_json_store(paths: &PlannerPaths) -> Result<JsonDocumentStore, PlannerError> {
    paths.ensure_directories()?;
    Ok(JsonDocumentStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        open_json_store(&paths).unwrap();
        assert!(temp_dir.path().join("data").exists());
    }
}
