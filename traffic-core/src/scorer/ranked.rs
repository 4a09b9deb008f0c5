// traffic-core/src/scorer/ranked.rs
//! Cross-references a keyword's top apps against their category charts.
//!
//! Each distinct `(collection, category)` chart is fetched once, concurrently,
//! and every app is then looked up in the chart matching its own collection and genre.

use futures::future::try_join_all;
use log::debug;
use std::collections::{HashMap, HashSet};

use traffic_calc::{aggregate, i_score, mean, z_score};

use crate::catalog::Catalog;
use crate::config::RankedWeights;
use crate::errors::{Result, TrafficError};
use crate::model::{find_rank, App, CollectionQuery, RankedList};
use crate::stats::RankedStats;

/// Distinct chart queries for `apps`, in order of first occurrence.
pub(crate) fn distinct_queries(catalog: &dyn Catalog, apps: &[App]) -> Vec<CollectionQuery> {
    let mut seen = HashSet::with_capacity(apps.len());
    let mut queries = Vec::with_capacity(apps.len());
    for app in apps {
        let query = catalog.collection_query(app);
        if seen.insert(query.clone()) {
            queries.push(query);
        }
    }
    queries
}

/// Fetches every chart in `queries` concurrently and keys the results by query.
async fn fetch_charts(
    catalog: &dyn Catalog,
    queries: Vec<CollectionQuery>,
) -> Result<HashMap<CollectionQuery, RankedList>> {
    let lists = try_join_all(queries.iter().map(|query| catalog.list(query)))
        .await
        .map_err(|e| TrafficError::catalog("list", e))?;

    let mut charts = HashMap::with_capacity(queries.len());
    for (query, list) in queries.into_iter().zip(lists) {
        charts.insert(query, list);
    }
    Ok(charts)
}

/// Scores how many of `apps` are charted in their category and how high.
///
/// Apps missing from their chart are skipped. When none is charted the result is
/// `RankedStats::unranked()`.
pub async fn ranked_apps(
    catalog: &dyn Catalog,
    weights: &RankedWeights,
    max_rank: usize,
    apps: &[App],
) -> Result<RankedStats> {
    let queries = distinct_queries(catalog, apps);
    debug!("Fetching {} charts for {} apps.", queries.len(), apps.len());
    let charts = fetch_charts(catalog, queries).await?;

    let ranks: Vec<f64> = apps
        .iter()
        .filter_map(|app| {
            let key = CollectionQuery::new(catalog.collection(app), catalog.genre(app));
            charts
                .get(&key)
                .and_then(|list| find_rank(list, &app.app_id))
        })
        .map(|rank| rank as f64)
        .collect();

    if ranks.is_empty() {
        return Ok(RankedStats::unranked());
    }

    let count = ranks.len();
    let avg_rank = mean(&ranks);
    let count_score = z_score(apps.len() as f64, count as f64);
    let avg_rank_score = i_score(1.0, max_rank as f64, avg_rank);

    Ok(RankedStats {
        count,
        avg_rank: Some(avg_rank),
        score: aggregate(&weights.as_array(), &[count_score, avg_rank_score]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryCatalog;

    #[test]
    fn test_distinct_queries_keep_first_occurrence_order() {
        let catalog = MemoryCatalog::new();
        let apps = vec![
            App::new("a", "top", "TOOLS"),
            App::new("b", "top", "GAME"),
            App::new("c", "top", "TOOLS"),
            App::new("d", "paid", "TOOLS"),
        ];

        let queries = distinct_queries(&catalog, &apps);
        assert_eq!(
            queries,
            vec![
                CollectionQuery::new("top", "TOOLS"),
                CollectionQuery::new("top", "GAME"),
                CollectionQuery::new("paid", "TOOLS"),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_apps_is_unranked() {
        let catalog = MemoryCatalog::new();
        let stats = ranked_apps(&catalog, &RankedWeights::default(), 100, &[]).await.unwrap();
        assert_eq!(stats, RankedStats::unranked());
    }

    #[tokio::test]
    async fn test_avg_rank_beyond_max_rank_clamps() {
        let ids: Vec<String> = (1..=150).map(|i| format!("app{}", i)).collect();
        let catalog = MemoryCatalog::new().with_chart(CollectionQuery::new("top", "GAME"), ids);
        let apps = vec![App::new("app120", "top", "GAME")];

        let stats = ranked_apps(&catalog, &RankedWeights::default(), 100, &apps).await.unwrap();
        assert_eq!(stats.avg_rank, Some(120.0));
        // Full count score (weight 5), zero average-rank score (weight 1).
        assert!((stats.score - 5.0 / 6.0).abs() < 1e-10);
    }
}
