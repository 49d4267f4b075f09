//! Venue comparison table
//!
//! Sorting toggles like a clickable column header: picking the column that is
//! already sorted ascending flips it to descending, anything else sorts
//! ascending.

use crate::models::{SortOrder, Venue, VenueSortKey};

/// Venue list with its current sort state
#[derive(Debug, Clone)]
pub struct VenueTable {
    venues: Vec<Venue>,
    sort_key: Option<VenueSortKey>,
    sort_order: SortOrder,
}

impl VenueTable {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self {
            venues,
            sort_key: None,
            sort_order: SortOrder::Asc,
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn sort_key(&self) -> Option<VenueSortKey> {
        self.sort_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Sort on `key`, toggling direction when it is already the ascending key
    pub fn sort_by(&mut self, key: VenueSortKey) {
        let order = if self.sort_key == Some(key) && self.sort_order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.sort_with(key, order);
    }

    /// Sort on `key` in an explicit direction
    pub fn sort_with(&mut self, key: VenueSortKey, order: SortOrder) {
        self.sort_key = Some(key);
        self.sort_order = order;
        self.venues
            .sort_by(|a, b| order.apply(a.compare_by(b, key)));
    }

    /// Header label with an arrow when this column is the sorted one
    pub fn header(&self, key: VenueSortKey, label: &str) -> String {
        if self.sort_key == Some(key) {
            format!("{} {}", label, self.sort_order.arrow())
        } else {
            label.to_string()
        }
    }
}
