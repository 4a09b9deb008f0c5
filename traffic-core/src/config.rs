//! Configuration management for `traffic-core`.
//!
//! This module defines the weights and limits used by the `KeywordScorer`.
//! It handles deserialization of YAML configurations and provides utilities
//! for loading, merging, and validating these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::TrafficError;

/// Longest keyword length that still earns a non-zero length score.
pub const DEFAULT_MAX_KEYWORD_LENGTH: usize = 25;
/// Chart position at and beyond which the average-rank score bottoms out.
pub const DEFAULT_MAX_RANK: usize = 100;
/// Number of relevance-ordered apps sampled per keyword.
pub const DEFAULT_TOP_APPS: usize = 10;

/// Weights used to merge the four keyword signals into the final score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalWeights {
    pub suggest: f64,
    pub length: f64,
    pub installs: f64,
    pub ranked: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            suggest: 8.0,
            length: 1.0,
            installs: 2.0,
            ranked: 3.0,
        }
    }
}

impl SignalWeights {
    /// Weights in the order `[suggest, length, installs, ranked]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.suggest, self.length, self.installs, self.ranked]
    }
}

/// Weights used inside the ranked-apps signal.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankedWeights {
    /// Weight of how many sampled apps are charted.
    pub count: f64,
    /// Weight of how high those apps chart on average.
    pub avg_rank: f64,
}

impl Default for RankedWeights {
    fn default() -> Self {
        Self {
            count: 5.0,
            avg_rank: 1.0,
        }
    }
}

impl RankedWeights {
    pub fn as_array(&self) -> [f64; 2] {
        [self.count, self.avg_rank]
    }
}

/// Top-level configuration for keyword traffic scoring.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficConfig {
    pub weights: SignalWeights,
    pub ranked: RankedWeights,
    pub max_keyword_length: usize,
    pub max_rank: usize,
    pub top_apps: usize,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            ranked: RankedWeights::default(),
            max_keyword_length: DEFAULT_MAX_KEYWORD_LENGTH,
            max_rank: DEFAULT_MAX_RANK,
            top_apps: DEFAULT_TOP_APPS,
        }
    }
}

/// Partially specified settings layered over a base `TrafficConfig`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficConfigOverrides {
    pub suggest_weight: Option<f64>,
    pub length_weight: Option<f64>,
    pub installs_weight: Option<f64>,
    pub ranked_weight: Option<f64>,
    pub ranked_count_weight: Option<f64>,
    pub ranked_avg_rank_weight: Option<f64>,
    pub max_keyword_length: Option<usize>,
    pub max_rank: Option<usize>,
    pub top_apps: Option<usize>,
}

impl TrafficConfig {
    /// Loads a configuration from a YAML file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading traffic config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: TrafficConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded traffic config: {:?}", config);

        Ok(config)
    }

    /// Checks that every weight group can produce a bounded score.
    pub fn validate(&self) -> std::result::Result<(), TrafficError> {
        let mut errors = Vec::new();

        check_weight_group("weights", &self.weights.as_array(), &mut errors);
        check_weight_group("ranked", &self.ranked.as_array(), &mut errors);

        if self.max_keyword_length < 2 {
            errors.push(format!(
                "`max_keyword_length` must be at least 2, got {}.",
                self.max_keyword_length
            ));
        }
        if self.max_rank < 2 {
            errors.push(format!("`max_rank` must be at least 2, got {}.", self.max_rank));
        }
        if self.top_apps == 0 {
            errors.push("`top_apps` must be at least 1.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TrafficError::InvalidConfig(errors.join(" ")))
        }
    }

    /// Returns a copy of this config with every provided override applied.
    pub fn merge_overrides(&self, overrides: &TrafficConfigOverrides) -> Self {
        let mut merged = self.clone();

        if let Some(weight) = overrides.suggest_weight {
            debug!("Overriding suggest weight with user value: {}", weight);
            merged.weights.suggest = weight;
        }
        if let Some(weight) = overrides.length_weight {
            debug!("Overriding length weight with user value: {}", weight);
            merged.weights.length = weight;
        }
        if let Some(weight) = overrides.installs_weight {
            debug!("Overriding installs weight with user value: {}", weight);
            merged.weights.installs = weight;
        }
        if let Some(weight) = overrides.ranked_weight {
            debug!("Overriding ranked weight with user value: {}", weight);
            merged.weights.ranked = weight;
        }
        if let Some(weight) = overrides.ranked_count_weight {
            debug!("Overriding ranked count weight with user value: {}", weight);
            merged.ranked.count = weight;
        }
        if let Some(weight) = overrides.ranked_avg_rank_weight {
            debug!("Overriding ranked average-rank weight with user value: {}", weight);
            merged.ranked.avg_rank = weight;
        }
        if let Some(max_keyword_length) = overrides.max_keyword_length {
            merged.max_keyword_length = max_keyword_length;
        }
        if let Some(max_rank) = overrides.max_rank {
            merged.max_rank = max_rank;
        }
        if let Some(top_apps) = overrides.top_apps {
            merged.top_apps = top_apps;
        }

        merged
    }
}

fn check_weight_group(name: &str, weights: &[f64], errors: &mut Vec<String>) {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        errors.push(format!("`{}` weights must be finite and non-negative.", name));
    } else if weights.iter().sum::<f64>() <= 0.0 {
        errors.push(format!("`{}` weights must not all be zero.", name));
    }
}
