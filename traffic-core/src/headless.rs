// File: traffic-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for scoring keywords without managing a scorer by hand.
//! Provides a blocking one-shot entry point for synchronous callers and a
//! concurrent batch helper for async ones.

use futures::future::try_join_all;
use log::debug;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::TrafficConfig;
use crate::errors::Result;
use crate::model::App;
use crate::scorer::KeywordScorer;
use crate::stats::TrafficScore;

/// Scores a single keyword on a private current-thread runtime.
///
/// Must not be called from inside an async context; use `KeywordScorer::score` there.
pub fn score_keyword_blocking(
    catalog: Arc<dyn Catalog>,
    config: TrafficConfig,
    keyword: &str,
    apps: &[App],
) -> Result<TrafficScore> {
    let scorer = KeywordScorer::new(catalog, config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(scorer.score(keyword, apps))
}

/// Scores several keywords concurrently. Each keyword is scored independently;
/// the batch fails with the first error encountered.
pub async fn score_keywords(
    scorer: &KeywordScorer,
    batch: &[(String, Vec<App>)],
) -> Result<Vec<TrafficScore>> {
    debug!("Scoring a batch of {} keywords.", batch.len());
    try_join_all(batch.iter().map(|(keyword, apps)| scorer.score(keyword, apps))).await
}
