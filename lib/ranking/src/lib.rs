//! # rankmerge Ranking
//!
//! Ranking-formula driven comparison and merging of search hits.
//!
//! Several indices (or several queries against one index) each return a hit
//! list already sorted by the index's ranking formula. This crate merges
//! those lists into one list in the same global order.
//!
//! ## Features
//!
//! - **Ranking Formula**: Parsed from index settings (`ranking` + `customRanking`)
//! - **Lexicographic Comparison**: Criteria applied strictly by priority, never weighted
//! - **Custom Ranking**: `asc(field)` / `desc(field)` on dotted paths, missing values count as 0
//! - **Linear Merge**: Two-pointer merge with `objectID` deduplication of tied hits
//! - **N-way Merge**: Left fold over any number of lists
//!
//! ## Example
//!
//! ```rust
//! use rankmerge_core::{Hit, HitRecord};
//! use rankmerge_ranking::ResultMerger;
//! use serde_json::json;
//!
//! let merger = ResultMerger::from_settings(&json!({
//!     "ranking": ["typo", "words", "custom"],
//!     "customRanking": ["desc(popularity)"]
//! })).unwrap();
//!
//! let info = json!({
//!     "nbTypos": 0, "geoDistance": 0, "words": 1, "filters": 0,
//!     "nbExactWords": 1, "proximityDistance": 0, "firstMatchedWord": 0
//! });
//! let products = vec![HitRecord::new(json!({"objectID": "p1", "popularity": 3, "_rankingInfo": info.clone()}))];
//! let articles = vec![HitRecord::new(json!({"objectID": "a1", "popularity": 9, "_rankingInfo": info}))];
//!
//! let merged = merger.merge_all([&products, &articles]).unwrap();
//! assert_eq!(merged[0].object_id(), Some("a1"));
//! assert_eq!(merged[1].object_id(), Some("p1"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Settings   │────>│RankingFormula│────>│ResultMerger │
//! │   (JSON)    │     │  (criteria)  │     │ (compare)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                     ┌──────────────┐            │
//!                     │ Sorted lists │───────────>│
//!                     │  (N indices) │            ▼
//!                     └──────────────┘     ┌─────────────┐
//!                                          │ Merged hits │
//!                                          └─────────────┘
//! ```

pub mod criterion;
pub mod formula;
pub mod merger;

pub use criterion::{CustomSortCriterion, RankingCriterion, SortDirection};
pub use formula::{RankingFormula, CUSTOM_RANKING_KEY, RANKING_KEY};
pub use merger::ResultMerger;
