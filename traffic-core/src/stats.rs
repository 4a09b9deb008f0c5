//! Provides the per-keyword result structures produced by the `KeywordScorer`.
//!
//! Every sub-result carries a `score` in `[0, 1]`; the auxiliary fields explain
//! where that score came from.

use serde::{Deserialize, Serialize};

/// A bounded signal produced entirely by the catalog (suggestions, installs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SignalScore {
    pub score: f64,
}

impl SignalScore {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

/// Keyword length and its inverted length score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub length: usize,
    pub score: f64,
}

/// Presence of the keyword's top apps in their category charts.
///
/// `avg_rank` is only present when at least one app was found in its chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStats {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rank: Option<f64>,
    pub score: f64,
}

impl RankedStats {
    /// The result when none of the sampled apps is charted. Scored as most favorable.
    pub fn unranked() -> Self {
        Self {
            count: 0,
            avg_rank: None,
            score: 1.0,
        }
    }
}

/// The four independent signals gathered for one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub suggest: SignalScore,
    pub ranked: RankedStats,
    pub installs: SignalScore,
    pub length: LengthStats,
}

/// Final result of scoring one keyword: its signals plus the weighted combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficScore {
    pub keyword: String,
    #[serde(flatten)]
    pub stats: KeywordStats,
    pub score: f64,
}

impl TrafficScore {
    /// Serializes the result as pretty-printed JSON.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
