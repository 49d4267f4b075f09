//! Venue model
//!
//! Venues are compared side by side on fees, meal cost, minimum guaranteed
//! guests and rating. They live in memory only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ids::DocumentId;
use super::money::Money;

/// A wedding venue candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: DocumentId,
    pub name: String,
    pub hall_fee: Money,
    /// Cost per guest
    pub meal_cost: Money,
    /// Minimum number of guests the venue bills for
    pub min_guarantee: u32,
    /// Rating out of 5
    pub score: f64,
}

impl Venue {
    pub fn new(
        id: impl Into<DocumentId>,
        name: impl Into<String>,
        hall_fee: i64,
        meal_cost: i64,
        min_guarantee: u32,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hall_fee: Money::from_units(hall_fee),
            meal_cost: Money::from_units(meal_cost),
            min_guarantee,
            score,
        }
    }

    /// Compare two venues on a single column
    pub fn compare_by(&self, other: &Self, key: VenueSortKey) -> Ordering {
        match key {
            VenueSortKey::Name => self.name.cmp(&other.name),
            VenueSortKey::HallFee => self.hall_fee.cmp(&other.hall_fee),
            VenueSortKey::MealCost => self.meal_cost.cmp(&other.meal_cost),
            VenueSortKey::MinGuarantee => self.min_guarantee.cmp(&other.min_guarantee),
            VenueSortKey::Score => self.score.total_cmp(&other.score),
        }
    }
}

/// Built-in comparison set
pub fn sample_venues() -> Vec<Venue> {
    vec![
        Venue::new("1", "그랜드 호텔", 5_000_000, 80_000, 250, 4.5),
        Venue::new("2", "노블레스 웨딩", 3_000_000, 65_000, 200, 4.2),
        Venue::new("3", "가든 파티", 4_000_000, 75_000, 150, 4.8),
        Venue::new("4", "채플 웨딩", 2_000_000, 55_000, 300, 3.9),
    ]
}

/// Column a venue list can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueSortKey {
    Name,
    HallFee,
    MealCost,
    MinGuarantee,
    Score,
}

impl VenueSortKey {
    pub fn all() -> &'static [VenueSortKey] {
        &[
            Self::Name,
            Self::HallFee,
            Self::MealCost,
            Self::MinGuarantee,
            Self::Score,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::HallFee => "hall_fee",
            Self::MealCost => "meal_cost",
            Self::MinGuarantee => "min_guarantee",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for VenueSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("Unknown venue column: {}", s))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Arrow shown next to a sorted column header
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_venues() {
        let venues = sample_venues();
        assert_eq!(venues.len(), 4);
        assert_eq!(venues[0].hall_fee.units(), 5_000_000);
        assert_eq!(venues[2].score, 4.8);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("hall-fee".parse::<VenueSortKey>().unwrap(), VenueSortKey::HallFee);
        assert_eq!("Score".parse::<VenueSortKey>().unwrap(), VenueSortKey::Score);
        assert!("capacity".parse::<VenueSortKey>().is_err());
    }

    #[test]
    fn test_compare_by_score() {
        let venues = sample_venues();
        assert_eq!(venues[2].compare_by(&venues[0], VenueSortKey::Score), Ordering::Greater);
        assert_eq!(
            SortOrder::Desc.apply(venues[2].compare_by(&venues[0], VenueSortKey::Score)),
            Ordering::Less
        );
    }
}
