//! Document store interface
//!
//! The planner treats its backend as an opaque collection API: insert a
//! document and get an id back, query a collection ordered on one field, and
//! delete by id. Everything above this trait speaks typed models.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlannerError, PlannerResult};
use crate::models::DocumentId;

/// Collection holding budget entries
pub const BUDGETS_COLLECTION: &str = "budgets";

/// Collection holding schedule milestones
pub const MILESTONES_COLLECTION: &str = "milestones";

/// Query direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A stored document: its store-assigned id and its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Decode the fields into a typed value
    pub fn decode<T: DeserializeOwned>(&self) -> PlannerResult<T> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            PlannerError::Storage(format!("Malformed document {}: {}", self.id, e))
        })
    }
}

/// Convert a typed value into document fields
pub fn to_fields<T: Serialize>(value: &T) -> PlannerResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(PlannerError::Storage(format!(
            "Documents must be objects, got {}",
            other
        ))),
    }
}

/// Remote document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return the id the store assigned to it
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> PlannerResult<DocumentId>;

    /// All documents of a collection ordered on `order_field`
    ///
    /// Documents without the field are left out. Ties keep insertion order.
    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        direction: Direction,
    ) -> PlannerResult<Vec<Document>>;

    /// Delete a document; `false` if no document had that id
    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> PlannerResult<bool>;
}

/// Sort documents in place the way `query_ordered` promises
pub(crate) fn sort_documents(documents: &mut Vec<Document>, order_field: &str, direction: Direction) {
    documents.retain(|d| d.fields.get(order_field).is_some_and(|v| !v.is_null()));
    documents.sort_by(|a, b| {
        let ordering = compare_values(&a.fields[order_field], &b.fields[order_field]);
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

/// Total order over field values
///
/// Numbers compare numerically and RFC 3339 timestamps chronologically.
/// Values of different kinds order as bool < number < timestamp < string.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(&y),
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Timestamp(x), SortKey::Timestamp(y)) => x.cmp(&y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (x, y) => x.rank().cmp(&y.rank()),
    }
}

enum SortKey<'a> {
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<FixedOffset>),
    Text(&'a str),
    Other,
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
            Self::Text(_) => 3,
            Self::Other => 4,
        }
    }
}

fn sort_key(value: &Value) -> SortKey<'_> {
    match value {
        Value::Bool(b) => SortKey::Bool(*b),
        Value::Number(n) => n.as_f64().map(SortKey::Number).unwrap_or(SortKey::Other),
        Value::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => SortKey::Timestamp(ts),
            Err(_) => SortKey::Text(s),
        },
        _ => SortKey::Other,
    }
}
