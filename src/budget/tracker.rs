//! Budget tracker
//!
//! Local state for the budget area: the last-known expense list, the target,
//! the last fetch error and the in-flight guard on the add path. Every
//! successful fetch re-runs the overrun check.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{DocumentId, ExpenseInput, ExpenseRecord, Money};
use crate::services::ExpenseService;
use crate::storage::DocumentStore;

use super::aggregator::{BudgetAggregator, BudgetSummary};

struct TrackerState {
    aggregator: BudgetAggregator,
    fetch_error: Option<String>,
}

/// Everything needed to render the budget area
#[derive(Debug, Clone)]
pub struct BudgetSnapshot {
    pub records: Vec<ExpenseRecord>,
    pub summary: BudgetSummary,
    pub fetch_error: Option<String>,
}

/// Budget state container backed by a document store
pub struct BudgetTracker {
    store: Arc<dyn DocumentStore>,
    state: RwLock<TrackerState>,
    adding: AtomicBool,
}

/// Clears the in-flight flag when the add attempt ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BudgetTracker {
    pub fn new(store: Arc<dyn DocumentStore>, aggregator: BudgetAggregator) -> Self {
        Self {
            store,
            state: RwLock::new(TrackerState {
                aggregator,
                fetch_error: None,
            }),
            adding: AtomicBool::new(false),
        }
    }

    fn read_state(&self) -> PlannerResult<RwLockReadGuard<'_, TrackerState>> {
        self.state
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_state(&self) -> PlannerResult<RwLockWriteGuard<'_, TrackerState>> {
        self.state
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Whether an add is currently outstanding
    pub fn is_adding(&self) -> bool {
        self.adding.load(Ordering::Acquire)
    }

    /// Fetch expenses and re-run the overrun check
    ///
    /// On failure the last-known records stay in place and the error is kept
    /// for display. There is no retry.
    pub async fn refresh(&self) -> PlannerResult<()> {
        let fetched = ExpenseService::new(self.store.as_ref()).list().await;

        let mut state = self.write_state()?;
        match fetched {
            Ok(records) => {
                tracing::debug!(count = records.len(), "refreshed expenses");
                state.aggregator.replace_records(records);
                state.fetch_error = None;
                state.aggregator.check_and_notify();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch expenses");
                let notice = "Failed to load expenses".to_string();
                state.fetch_error = Some(notice.clone());
                Err(PlannerError::Remote(notice))
            }
        }
    }

    /// Validate and store a new expense, then refresh
    ///
    /// Invalid input is rejected before any store call and leaves the state
    /// untouched. A second add while one is outstanding fails with `Busy`.
    pub async fn add(&self, input: &ExpenseInput) -> PlannerResult<DocumentId> {
        let expense = input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let _in_flight = InFlight::acquire(&self.adding).ok_or(PlannerError::Busy)?;

        let id = ExpenseService::new(self.store.as_ref())
            .add(expense)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to add expense");
                PlannerError::Remote("Failed to add expense".into())
            })?;

        // A failed refresh is already recorded in the state; the add itself stands
        let _ = self.refresh().await;
        Ok(id)
    }

    /// Delete an expense by id, then refresh
    pub async fn delete(&self, id: &DocumentId) -> PlannerResult<bool> {
        let removed = ExpenseService::new(self.store.as_ref())
            .delete(id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to delete expense");
                PlannerError::Remote("Failed to delete".into())
            })?;

        let _ = self.refresh().await;
        Ok(removed)
    }

    /// Find a loaded record by full id or id prefix
    pub fn find(&self, identifier: &str) -> PlannerResult<Option<ExpenseRecord>> {
        let state = self.read_state()?;
        let mut matches = state
            .aggregator
            .records()
            .iter()
            .filter(|r| r.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(Some(record.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(PlannerError::Validation(format!(
                "Identifier '{}' matches more than one expense",
                identifier
            ))),
        }
    }

    pub fn set_target(&self, target: Money) -> PlannerResult<()> {
        self.write_state()?.aggregator.set_target(target);
        Ok(())
    }

    /// Current records and figures, without notifying
    pub fn snapshot(&self) -> PlannerResult<BudgetSnapshot> {
        let state = self.read_state()?;
        Ok(BudgetSnapshot {
            records: state.aggregator.records().to_vec(),
            summary: state.aggregator.summary(),
            fetch_error: state.fetch_error.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::Currency;
    use crate::notify::RecordingNotifier;
    use crate::storage::{Direction, Document, MemoryDocumentStore};
    use async_trait::async_trait;
    use serde_json::{Map, Value};

    fn tracker_with(
        store: Arc<dyn DocumentStore>,
        target: i64,
    ) -> (BudgetTracker, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let aggregator = BudgetAggregator::new(
            Money::from_units(target),
            Currency::Krw,
            Catalog::builtin("en"),
            notifier.clone(),
        );
        (BudgetTracker::new(store, aggregator), notifier)
    }

    async fn seed(tracker: &BudgetTracker) {
        for (category, item, amount) in [
            ("Venue", "Hall", "5000000"),
            ("Dress", "Gown", "2000000"),
            ("Food", "Buffet", "8000000"),
        ] {
            tracker
                .add(&ExpenseInput::new(item, amount).with_category(category))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_under_target_never_notifies() {
        let (tracker, notifier) = tracker_with(Arc::new(MemoryDocumentStore::new()), 30_000_000);
        seed(&tracker).await;

        let snapshot = tracker.snapshot().unwrap();
        assert_eq!(snapshot.summary.total.units(), 15_000_000);
        assert!(!snapshot.summary.overrun);
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_overrun_notifies_on_crossing_fetch() {
        let (tracker, notifier) = tracker_with(Arc::new(MemoryDocumentStore::new()), 10_000_000);
        seed(&tracker).await;

        // 5M, then 7M are under target; the third add brings 15M
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.contains("₩15,000,000"));
        assert!(sent[0].body.contains("₩10,000,000"));

        // Every later fetch refires while still overrun
        tracker.refresh().await.unwrap();
        assert_eq!(notifier.count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_add_makes_no_store_call() {
        let store = Arc::new(MemoryDocumentStore::new());
        let (tracker, _) = tracker_with(store.clone(), 10);

        let err = tracker.add(&ExpenseInput::new("", "1000")).await.unwrap_err();
        assert!(err.is_validation());
        let err = tracker.add(&ExpenseInput::new("Cake", "")).await.unwrap_err();
        assert!(err.is_validation());
        let err = tracker.add(&ExpenseInput::new("Cake", "NaN")).await.unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.call_count(), 0);
        assert!(tracker.snapshot().unwrap().records.is_empty());
        assert!(!tracker.is_adding());
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_record() {
        let (tracker, _) = tracker_with(Arc::new(MemoryDocumentStore::new()), 30_000_000);
        seed(&tracker).await;

        let before = tracker.snapshot().unwrap().records;
        let victim = before[1].id.clone();

        assert!(tracker.delete(&victim).await.unwrap());

        let after = tracker.snapshot().unwrap().records;
        let expected: Vec<_> = before
            .iter()
            .filter(|r| r.id != victim)
            .map(|r| r.id.clone())
            .collect();
        let actual: Vec<_> = after.iter().map(|r| r.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_last_known_state() {
        let store = Arc::new(MemoryDocumentStore::new());
        let (tracker, _) = tracker_with(store.clone(), 30_000_000);
        seed(&tracker).await;

        store.set_unavailable(true);
        let err = tracker.refresh().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load expenses");

        let snapshot = tracker.snapshot().unwrap();
        assert_eq!(snapshot.records.len(), 3);
        assert_eq!(snapshot.summary.total.units(), 15_000_000);
        assert_eq!(snapshot.fetch_error.as_deref(), Some("Failed to load expenses"));

        store.set_unavailable(false);
        tracker.refresh().await.unwrap();
        assert!(tracker.snapshot().unwrap().fetch_error.is_none());
    }

    #[tokio::test]
    async fn test_remote_failures_are_one_line_notices() {
        let store = Arc::new(MemoryDocumentStore::new());
        let (tracker, _) = tracker_with(store.clone(), 30_000_000);
        store.set_unavailable(true);

        let err = tracker.add(&ExpenseInput::new("Cake", "300000")).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to add expense");
        assert!(!tracker.is_adding());

        let err = tracker.delete(&DocumentId::from("missing")).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete");
    }

    #[tokio::test]
    async fn test_out_of_range_amounts_never_reach_the_total() {
        let store = Arc::new(MemoryDocumentStore::new());
        let (tracker, _) = tracker_with(store.clone(), 30_000_000);

        let err = tracker
            .add(&ExpenseInput::new("Hall", "9223372036854775807"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.call_count(), 0);

        // Documents written by another client with an oversized amount are skipped
        let oversized = serde_json::json!({
            "category": "Venue",
            "item": "Hall",
            "amount": i64::MAX,
            "date": "2026-05-01T00:00:00Z",
            "createdAt": "2026-05-01T00:00:00Z",
        });
        store
            .insert(
                crate::storage::BUDGETS_COLLECTION,
                oversized.as_object().cloned().unwrap(),
            )
            .await
            .unwrap();

        tracker.add(&ExpenseInput::new("Dress", "1")).await.unwrap();
        let snapshot = tracker.snapshot().unwrap();
        assert!(snapshot.fetch_error.is_none());
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.summary.total.units(), 1);
    }

    #[tokio::test]
    async fn test_delete_of_missing_record_reports_false() {
        let (tracker, _) = tracker_with(Arc::new(MemoryDocumentStore::new()), 30_000_000);
        let id = tracker.add(&ExpenseInput::new("Hall", "100")).await.unwrap();

        assert!(tracker.delete(&id).await.unwrap());
        assert!(!tracker.delete(&id).await.unwrap());
        assert!(tracker.snapshot().unwrap().records.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_prefix() {
        let (tracker, _) = tracker_with(Arc::new(MemoryDocumentStore::new()), 30_000_000);
        let id = tracker.add(&ExpenseInput::new("Hall", "100")).await.unwrap();

        let found = tracker.find(id.short()).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(tracker.find("zzzz-not-an-id").unwrap().is_none());
    }

    /// Store whose inserts yield once before completing
    struct SlowStore(MemoryDocumentStore);

    #[async_trait]
    impl DocumentStore for SlowStore {
        async fn insert(&self, collection: &str, fields: Map<String, Value>) -> PlannerResult<DocumentId> {
            tokio::task::yield_now().await;
            self.0.insert(collection, fields).await
        }

        async fn query_ordered(
            &self,
            collection: &str,
            order_field: &str,
            direction: Direction,
        ) -> PlannerResult<Vec<Document>> {
            self.0.query_ordered(collection, order_field, direction).await
        }

        async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> PlannerResult<bool> {
            self.0.delete_by_id(collection, id).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_adds_do_not_interleave() {
        let (tracker, _) = tracker_with(Arc::new(SlowStore(MemoryDocumentStore::new())), 30_000_000);

        let first_input = ExpenseInput::new("Hall", "5000000");
        let second_input = ExpenseInput::new("Dress", "2000000");
        let (first, second) = tokio::join!(tracker.add(&first_input), tracker.add(&second_input));

        assert!(first.is_ok());
        assert!(matches!(second, Err(PlannerError::Busy)));
        assert_eq!(tracker.snapshot().unwrap().records.len(), 1);
        assert!(!tracker.is_adding());

        tracker.add(&second_input).await.unwrap();
        assert_eq!(tracker.snapshot().unwrap().records.len(), 2);
    }
}
