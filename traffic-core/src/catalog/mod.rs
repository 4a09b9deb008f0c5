// traffic-core/src/catalog/mod.rs
use anyhow::Result;
use async_trait::async_trait;

use crate::model::{App, CollectionQuery, RankedList};

pub mod memory;

/// Data-access collaborator the scorer pulls every external signal from.
///
/// Implementations wrap a store client (Google Play, iTunes, a cache). The scorer
/// never retries or substitutes defaults: any `Err` aborts the scoring call.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// The chart collection an app belongs to.
    fn collection(&self, app: &App) -> String;

    /// The chart category (genre) an app belongs to.
    fn genre(&self, app: &App) -> String;

    /// The chart query that holds `app`. Charts are fetched once per distinct query.
    fn collection_query(&self, app: &App) -> CollectionQuery {
        CollectionQuery::new(self.collection(app), self.genre(app))
    }

    /// Fetches the ranked chart for a `(collection, category)` pair.
    async fn list(&self, query: &CollectionQuery) -> Result<RankedList>;

    /// How prominently the keyword shows up as a search suggestion, in `[0, 1]`.
    async fn suggest_score(&self, keyword: &str) -> Result<f64>;

    /// Install volume of the sampled apps, in `[0, 1]`. Must tolerate an empty sample.
    fn installs_score(&self, apps: &[App]) -> f64;
}
