use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::path;

/// Key holding per-hit ranking metadata in a search response
pub const RANKING_INFO_KEY: &str = "_rankingInfo";

/// Key holding the unique record identifier
pub const OBJECT_ID_KEY: &str = "objectID";

/// Numeric ranking signals the engine attaches to each hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingInfo {
    #[serde(rename = "nbTypos")]
    pub number_of_typos: i64,
    #[serde(rename = "geoDistance")]
    pub geo_distance: i64,
    #[serde(rename = "words")]
    pub matched_words: i64,
    #[serde(rename = "filters")]
    pub filters_score: i64,
    #[serde(rename = "nbExactWords")]
    pub exact_words: i64,
    #[serde(rename = "proximityDistance")]
    pub proximity_distance: i64,
    #[serde(rename = "firstMatchedWord")]
    pub first_matched_word_position: i64,
}

/// A record that can be ranked and merged
pub trait Hit {
    /// Ranking metadata, if the record carries any
    fn ranking_info(&self) -> Option<&RankingInfo>;

    /// Value at a dotted path inside the record
    fn field(&self, path: &str) -> Option<&Value>;

    /// The record's `objectID`
    fn object_id(&self) -> Option<&str>;
}

impl<H: Hit + ?Sized> Hit for &H {
    #[inline]
    fn ranking_info(&self) -> Option<&RankingInfo> {
        (**self).ranking_info()
    }

    #[inline]
    fn field(&self, path: &str) -> Option<&Value> {
        (**self).field(path)
    }

    #[inline]
    fn object_id(&self) -> Option<&str> {
        (**self).object_id()
    }
}

/// A search hit: the raw JSON document plus its decoded ranking metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct HitRecord {
    document: Value,
    ranking_info: Option<RankingInfo>,
}

impl HitRecord {
    /// Wrap a document, decoding its `_rankingInfo` object if present
    #[must_use]
    pub fn new(document: Value) -> Self {
        let ranking_info = document.get(RANKING_INFO_KEY).and_then(|raw| {
            RankingInfo::deserialize(raw)
                .map_err(|e| debug!("Ignoring undecodable {}: {}", RANKING_INFO_KEY, e))
                .ok()
        });
        Self {
            document,
            ranking_info,
        }
    }

    /// Attach ranking metadata, replacing any decoded from the document.
    ///
    /// The metadata is written into the document as well, so only object
    /// documents can carry it.
    pub fn with_ranking_info(mut self, ranking_info: RankingInfo) -> Result<Self> {
        let Value::Object(map) = &mut self.document else {
            return Err(Error::DocumentNotObject);
        };
        map.insert(RANKING_INFO_KEY.to_string(), serde_json::to_value(ranking_info)?);
        self.ranking_info = Some(ranking_info);
        Ok(self)
    }

    #[inline]
    pub fn document(&self) -> &Value {
        &self.document
    }

    #[inline]
    pub fn into_document(self) -> Value {
        self.document
    }
}

impl Hit for HitRecord {
    #[inline]
    fn ranking_info(&self) -> Option<&RankingInfo> {
        self.ranking_info.as_ref()
    }

    #[inline]
    fn field(&self, path: &str) -> Option<&Value> {
        path::lookup(&self.document, path)
    }

    #[inline]
    fn object_id(&self) -> Option<&str> {
        self.document.get(OBJECT_ID_KEY).and_then(Value::as_str)
    }
}

impl From<Value> for HitRecord {
    fn from(document: Value) -> Self {
        HitRecord::new(document)
    }
}

impl From<HitRecord> for Value {
    fn from(hit: HitRecord) -> Self {
        hit.document
    }
}
