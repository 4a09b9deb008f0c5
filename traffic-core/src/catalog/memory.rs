// traffic-core/src/catalog/memory.rs
//! An in-memory `Catalog` backed by a static snapshot of charts and suggestion scores.
//!
//! Useful for tests, fixtures and offline evaluation of keyword lists.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use traffic_calc::{mean, z_score};

use crate::catalog::Catalog;
use crate::model::{App, CollectionQuery, RankedList};

/// Average install count at which the installs score saturates.
pub const DEFAULT_INSTALLS_MAX: u64 = 1_000_000;

/// One ranked chart as stored in a snapshot file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartEntry {
    pub collection: String,
    pub category: String,
    pub app_ids: Vec<String>,
}

/// Serializable contents of a `MemoryCatalog`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub charts: Vec<ChartEntry>,
    pub suggest_scores: HashMap<String, f64>,
    pub installs_max: u64,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            charts: Vec::new(),
            suggest_scores: HashMap::new(),
            installs_max: DEFAULT_INSTALLS_MAX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    charts: HashMap<CollectionQuery, RankedList>,
    suggest_scores: HashMap<String, f64>,
    failing_queries: HashSet<CollectionQuery>,
    installs_max: u64,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
            suggest_scores: HashMap::new(),
            failing_queries: HashSet::new(),
            installs_max: DEFAULT_INSTALLS_MAX,
        }
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `snapshot`. An `installs_max` of 0 is raised to 1.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::new().with_installs_max(snapshot.installs_max);
        catalog.suggest_scores = snapshot.suggest_scores;
        for chart in snapshot.charts {
            catalog
                .charts
                .insert(CollectionQuery::new(chart.collection, chart.category), chart.app_ids);
        }
        catalog
    }

    /// Loads a snapshot from a `.json` file, or YAML for any other extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog snapshot from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog snapshot {}", path.display()))?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        let snapshot: CatalogSnapshot = if is_json {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse catalog snapshot {}", path.display()))?
        } else {
            serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse catalog snapshot {}", path.display()))?
        };

        if snapshot.installs_max == 0 {
            bail!(
                "Invalid catalog snapshot {}: `installs_max` must be greater than zero.",
                path.display()
            );
        }

        debug!(
            "Loaded {} charts and {} suggestion scores.",
            snapshot.charts.len(),
            snapshot.suggest_scores.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn with_chart<I, S>(mut self, query: CollectionQuery, app_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.charts.insert(query, app_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_suggest_score(mut self, keyword: impl Into<String>, score: f64) -> Self {
        self.suggest_scores.insert(keyword.into(), score);
        self
    }

    /// Sets the average install count at which the installs score saturates.
    /// Values below 1 are raised to 1 so an app with no installs never saturates.
    pub fn with_installs_max(mut self, installs_max: u64) -> Self {
        self.installs_max = installs_max.max(1);
        self
    }

    /// Makes every `list` call for `query` fail.
    pub fn with_failing_chart(mut self, query: CollectionQuery) -> Self {
        self.failing_queries.insert(query);
        self
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    fn collection(&self, app: &App) -> String {
        app.collection.clone()
    }

    fn genre(&self, app: &App) -> String {
        app.genre.clone()
    }

    async fn list(&self, query: &CollectionQuery) -> Result<RankedList> {
        if self.failing_queries.contains(query) {
            return Err(anyhow!("chart {} is unavailable", query));
        }
        Ok(self.charts.get(query).cloned().unwrap_or_default())
    }

    async fn suggest_score(&self, keyword: &str) -> Result<f64> {
        Ok(self.suggest_scores.get(keyword).copied().unwrap_or(0.0))
    }

    fn installs_score(&self, apps: &[App]) -> f64 {
        if apps.is_empty() {
            return 0.0;
        }
        let installs: Vec<f64> = apps.iter().map(|app| app.min_installs as f64).collect();
        z_score(self.installs_max as f64, mean(&installs))
    }
}
