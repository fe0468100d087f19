//! # rankmerge
//!
//! Merge search results from several indices into one list, ordered by the
//! ranking formula the indices are configured with.
//!
//! Hosted search engines rank hits by a declarative formula (`typo`, `geo`,
//! `words`, `filters`, `proximity`, `attribute`, `exact`, `custom`). When a
//! query fans out to several indices or replicas, each response is sorted
//! by that formula but the responses are not sorted relative to each other.
//! rankmerge reads the formula from the index settings and merges the
//! responses back into one globally ordered list.
//!
//! ## Quick Start
//!
//! ```rust
//! use rankmerge::prelude::*;
//! use serde_json::json;
//!
//! let merger = ResultMerger::from_settings(&json!({
//!     "ranking": ["typo", "words", "custom"],
//!     "customRanking": ["desc(popularity)"]
//! })).unwrap();
//!
//! let info = json!({
//!     "nbTypos": 0, "geoDistance": 0, "words": 2, "filters": 0,
//!     "nbExactWords": 2, "proximityDistance": 1, "firstMatchedWord": 0
//! });
//! let first = hits_from_response(&json!({
//!     "hits": [{"objectID": "1", "popularity": 4, "_rankingInfo": info.clone()}]
//! })).unwrap();
//! let second = hits_from_response(&json!({
//!     "hits": [{"objectID": "2", "popularity": 8, "_rankingInfo": info}]
//! })).unwrap();
//!
//! let merged = merger.merge_all([first, second]).unwrap();
//! let ids: Vec<_> = merged.iter().map(|hit| hit.object_id().unwrap()).collect();
//! assert_eq!(ids, ["2", "1"]);
//! ```
//!
//! ## Crate Structure
//!
//! rankmerge is composed of several crates:
//!
//! - [`rankmerge-core`](https://docs.rs/rankmerge-core) - Hit records, ranking metadata, dotted-path lookup, errors
//! - [`rankmerge-ranking`](https://docs.rs/rankmerge-ranking) - Ranking formula parsing, comparison and merging
//!
//! ## Features
//!
//! - **Ranking Formula**: Read from index settings at runtime
//! - **Custom Ranking**: `asc(..)` / `desc(..)` on nested attributes
//! - **Duplicate Handling**: Tied hits with the same `objectID` are kept once
//! - **Zero Copy**: Merge borrowed lists and get references back, or move owned lists

// Re-export core types
pub use rankmerge_core::{
    hits_from_response, into_hits,
    ConfigError, Error, Result,
    Hit, HitRecord, RankingInfo,
};

// Re-export ranking
pub use rankmerge_ranking::{
    CustomSortCriterion, RankingCriterion, SortDirection,
    RankingFormula, ResultMerger,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        hits_from_response, into_hits,
        ConfigError, Error, Result,
        Hit, HitRecord, RankingInfo,
        CustomSortCriterion, RankingCriterion, SortDirection,
        RankingFormula, ResultMerger,
    };
}

/// Dotted-path lookup into JSON documents
pub mod path {
    pub use rankmerge_core::path::{as_rank_integer, lookup};
}
