// traffic-core/src/model.rs
//! Catalog-facing data structures: apps, chart queries and ranked lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An app as returned by a keyword search, ordered by relevance by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct App {
    /// Store identifier (bundle id or package name).
    pub app_id: String,
    /// The chart collection the app is listed under (e.g. "topselling_free").
    pub collection: String,
    /// The app's genre, used as the chart category.
    pub genre: String,
    /// Lower bound of the install count reported by the store.
    #[serde(default)]
    pub min_installs: u64,
}

impl App {
    pub fn new(
        app_id: impl Into<String>,
        collection: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            collection: collection.into(),
            genre: genre.into(),
            min_installs: 0,
        }
    }

    pub fn with_min_installs(mut self, min_installs: u64) -> Self {
        self.min_installs = min_installs;
        self
    }
}

/// Composite `(collection, category)` key identifying one ranked chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub collection: String,
    pub category: String,
}

impl CollectionQuery {
    pub fn new(collection: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for CollectionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.category)
    }
}

/// App identifiers of a chart in rank order. Index 0 holds rank 1.
pub type RankedList = Vec<String>;

/// Returns the 1-based position of `app_id` in `list`, or `None` when it is not charted.
pub fn find_rank(list: &[String], app_id: &str) -> Option<usize> {
    list.iter().position(|id| id == app_id).map(|index| index + 1)
}
