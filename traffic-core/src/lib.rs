// traffic-core/src/lib.rs
//! # Traffic Core Library
//!
//! `traffic-core` estimates how much search traffic an app-store keyword attracts.
//! It samples the keyword's most relevant apps and merges four independent signals
//! into one normalized score:
//!
//! * **suggest**: how prominently the keyword appears as a search suggestion.
//! * **ranked**: how many sampled apps are charted in their category, and how high.
//! * **installs**: install volume of the sampled apps.
//! * **length**: shorter keywords are assumed to carry more traffic.
//!
//! All store access goes through the pluggable [`Catalog`] trait, so the library itself
//! does no I/O and keeps no state between calls.
//!
//! ## Modules
//!
//! * `catalog`: The `Catalog` collaborator trait and the in-memory `MemoryCatalog`.
//! * `config`: `TrafficConfig` with signal weights and limits, loadable from YAML.
//! * `model`: Apps, chart queries and ranked lists.
//! * `scorer`: The `KeywordScorer` and its per-signal scorers.
//! * `stats`: Result structures for each signal and the final score.
//! * `headless`: Blocking and batch convenience wrappers.
//! * `errors`: The `TrafficError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use traffic_core::{App, CollectionQuery, MemoryCatalog, TrafficConfig, score_keyword_blocking};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = MemoryCatalog::new()
//!         .with_chart(
//!             CollectionQuery::new("topselling_free", "GAME_PUZZLE"),
//!             ["com.example.blocks"],
//!         )
//!         .with_suggest_score("puzzle", 0.8);
//!
//!     let apps = vec![App::new("com.example.blocks", "topselling_free", "GAME_PUZZLE")];
//!     let config = TrafficConfig::default();
//!     let result = score_keyword_blocking(Arc::new(catalog), config, "puzzle", &apps)?;
//!
//!     assert_eq!(result.stats.ranked.count, 1);
//!     println!("{}", result.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Scoring fails fast: the first `Catalog` error aborts the call and is returned as
//! [`TrafficError::Catalog`]. Apps missing from their chart are not errors; they are
//! simply left out of the ranked signal.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod errors;
pub mod headless;
pub mod model;
pub mod scorer;
pub mod stats;

/// Re-exports the collaborator trait and its in-memory implementation.
pub use catalog::Catalog;
pub use catalog::memory::{CatalogSnapshot, ChartEntry, MemoryCatalog};

/// Re-exports the configuration types.
pub use config::{RankedWeights, SignalWeights, TrafficConfig, TrafficConfigOverrides};

pub use errors::TrafficError;

pub use model::{find_rank, App, CollectionQuery, RankedList};

pub use scorer::KeywordScorer;

pub use stats::{KeywordStats, LengthStats, RankedStats, SignalScore, TrafficScore};

/// Re-exports for one-shot and batch scoring.
pub use headless::{score_keyword_blocking, score_keywords};
