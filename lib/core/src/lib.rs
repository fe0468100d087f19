//! # rankmerge Core
//!
//! Core data model for the rankmerge result merger.
//!
//! This crate provides the pieces every merge operates on:
//!
//! - [`HitRecord`] - A search hit: raw JSON document plus decoded ranking metadata
//! - [`RankingInfo`] - Per-hit numeric ranking signals (`_rankingInfo`)
//! - [`Hit`] - The trait the merger is generic over
//! - [`path::lookup`] - Dotted-path lookup into JSON documents
//! - [`Error`] - Errors shared by parsing, comparison and merging
//!
//! ## Example
//!
//! ```rust
//! use rankmerge_core::{Hit, HitRecord};
//! use serde_json::json;
//!
//! let hit = HitRecord::new(json!({
//!     "objectID": "lamp-1",
//!     "stats": {"popularity": 12},
//!     "_rankingInfo": {
//!         "nbTypos": 0, "geoDistance": 0, "words": 2, "filters": 0,
//!         "nbExactWords": 2, "proximityDistance": 1, "firstMatchedWord": 0
//!     }
//! }));
//!
//! assert_eq!(hit.object_id(), Some("lamp-1"));
//! assert_eq!(hit.ranking_info().unwrap().matched_words, 2);
//! assert_eq!(hit.field("stats.popularity"), Some(&json!(12)));
//! ```

pub mod error;
pub mod hit;
pub mod path;
pub mod response;

pub use error::{ConfigError, Error, Result};
pub use hit::{Hit, HitRecord, RankingInfo, OBJECT_ID_KEY, RANKING_INFO_KEY};
pub use response::{hits_from_response, into_hits};
