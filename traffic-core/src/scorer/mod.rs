// traffic-core/src/scorer/mod.rs
//! The keyword traffic scorer.
//!
//! For one keyword and its relevance-ordered apps, the scorer samples the top apps,
//! gathers four independent signals (suggestions, chart presence, installs, length)
//! and merges them into a single weighted score.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::sync::Arc;

use traffic_calc::aggregate;

use crate::catalog::Catalog;
use crate::config::TrafficConfig;
use crate::errors::{Result, TrafficError};
use crate::model::App;
use crate::stats::{KeywordStats, LengthStats, RankedStats, SignalScore, TrafficScore};

pub mod length;
pub mod ranked;

/// Computes traffic scores for keywords against an injected `Catalog`.
///
/// The scorer holds no per-call state; one instance can score many keywords
/// concurrently.
#[derive(Clone)]
pub struct KeywordScorer {
    catalog: Arc<dyn Catalog>,
    config: TrafficConfig,
}

impl std::fmt::Debug for KeywordScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordScorer")
            .field("catalog", &"<dyn Catalog>")
            .field("config", &self.config)
            .finish()
    }
}

impl KeywordScorer {
    /// Creates a scorer, rejecting configurations that cannot yield a bounded score.
    pub fn new(catalog: Arc<dyn Catalog>, config: TrafficConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Creates a scorer with the default weights and limits.
    pub fn with_defaults(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            config: TrafficConfig::default(),
        }
    }

    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    pub fn keyword_length(&self, keyword: &str) -> LengthStats {
        length::keyword_length(keyword, self.config.max_keyword_length)
    }

    /// Scores chart presence for an already-sampled list of apps.
    pub async fn ranked_apps(&self, apps: &[App]) -> Result<RankedStats> {
        ranked::ranked_apps(
            self.catalog.as_ref(),
            &self.config.ranked,
            self.config.max_rank,
            apps,
        )
        .await
    }

    async fn suggest(&self, keyword: &str) -> Result<SignalScore> {
        let score = self
            .catalog
            .suggest_score(keyword)
            .await
            .map_err(|e| TrafficError::catalog("suggest_score", e))?;
        Ok(SignalScore::new(score))
    }

    /// Weighted combination of the four signals.
    pub fn combine(&self, stats: &KeywordStats) -> f64 {
        aggregate(
            &self.config.weights.as_array(),
            &[
                stats.suggest.score,
                stats.length.score,
                stats.installs.score,
                stats.ranked.score,
            ],
        )
    }

    /// Scores `keyword` using the first `top_apps` entries of `apps`.
    ///
    /// Chart lookups and the suggestion fetch run concurrently. The first catalog
    /// failure aborts the call; no partial result is returned.
    pub async fn score(&self, keyword: &str, apps: &[App]) -> Result<TrafficScore> {
        let top_apps = &apps[..apps.len().min(self.config.top_apps)];
        debug!("Scoring keyword '{}' over {} top apps.", keyword, top_apps.len());

        let (ranked, suggest) =
            tokio::try_join!(self.ranked_apps(top_apps), self.suggest(keyword))?;

        let stats = KeywordStats {
            suggest,
            ranked,
            installs: SignalScore::new(self.catalog.installs_score(top_apps)),
            length: self.keyword_length(keyword),
        };
        let score = self.combine(&stats);
        info!("Keyword '{}' scored {:.4}", keyword, score);

        Ok(TrafficScore {
            keyword: keyword.to_string(),
            stats,
            score,
        })
    }
}
