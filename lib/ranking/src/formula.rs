//! Ranking formula parsed from index settings
//!
//! Settings carry two ordered string lists:
//!
//! ```json
//! {
//!   "ranking": ["typo", "geo", "words", "filters", "proximity", "attribute", "exact", "custom"],
//!   "customRanking": ["desc(popularity)", "asc(price)"]
//! }
//! ```
//!
//! List order is priority order. `customRanking` is only consulted when
//! `custom` appears in `ranking`.

use crate::criterion::{CustomSortCriterion, RankingCriterion};
use rankmerge_core::{ConfigError, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// Settings key for the ranking criteria
pub const RANKING_KEY: &str = "ranking";

/// Settings key for the custom ranking
pub const CUSTOM_RANKING_KEY: &str = "customRanking";

/// Ordered ranking criteria plus the custom ranking used by the `custom` step.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingFormula {
    criteria: Vec<RankingCriterion>,
    custom_ranking: Vec<CustomSortCriterion>,
}

impl RankingFormula {
    pub fn new(criteria: Vec<RankingCriterion>, custom_ranking: Vec<CustomSortCriterion>) -> Self {
        Self {
            criteria,
            custom_ranking,
        }
    }

    /// Parse the formula from index settings.
    ///
    /// Both `ranking` and `customRanking` must be present as lists of
    /// strings. Every entry must be a known criterion or a well-formed
    /// `asc(..)`/`desc(..)` descriptor.
    pub fn parse(settings: &Value) -> Result<Self> {
        let criteria = string_list(settings, RANKING_KEY)?
            .into_iter()
            .map(|raw| raw.parse::<RankingCriterion>())
            .collect::<std::result::Result<Vec<_>, ConfigError>>()?;

        let custom_ranking = string_list(settings, CUSTOM_RANKING_KEY)?
            .into_iter()
            .map(|raw| raw.parse::<CustomSortCriterion>())
            .collect::<std::result::Result<Vec<_>, ConfigError>>()?;

        debug!(
            criteria = criteria.len(),
            custom_ranking = custom_ranking.len(),
            "Parsed ranking formula"
        );

        Ok(Self::new(criteria, custom_ranking))
    }

    /// Parse the formula from a JSON settings document
    pub fn from_json(settings: &str) -> Result<Self> {
        let settings: Value = serde_json::from_str(settings)?;
        Self::parse(&settings)
    }

    /// Ranking criteria in priority order
    pub fn criteria(&self) -> &[RankingCriterion] {
        &self.criteria
    }

    /// Custom sort criteria in priority order
    pub fn custom_ranking(&self) -> &[CustomSortCriterion] {
        &self.custom_ranking
    }

    /// Whether the `custom` step is part of the formula
    pub fn uses_custom_ranking(&self) -> bool {
        self.criteria.contains(&RankingCriterion::Custom)
    }
}

fn string_list<'a>(settings: &'a Value, key: &str) -> std::result::Result<Vec<&'a str>, ConfigError> {
    let missing = || ConfigError::MissingList {
        key: key.to_string(),
    };

    settings
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(missing)?
        .iter()
        .map(|entry| entry.as_str().ok_or_else(missing))
        .collect()
}

impl TryFrom<&Value> for RankingFormula {
    type Error = rankmerge_core::Error;

    fn try_from(settings: &Value) -> Result<Self> {
        RankingFormula::parse(settings)
    }
}

impl TryFrom<Value> for RankingFormula {
    type Error = rankmerge_core::Error;

    fn try_from(settings: Value) -> Result<Self> {
        RankingFormula::parse(&settings)
    }
}

impl Serialize for RankingFormula {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let ranking: Vec<&str> = self.criteria.iter().map(|c| c.as_str()).collect();
        let custom_ranking: Vec<String> = self.custom_ranking.iter().map(ToString::to_string).collect();

        let mut state = serializer.serialize_struct("RankingFormula", 2)?;
        state.serialize_field(RANKING_KEY, &ranking)?;
        state.serialize_field(CUSTOM_RANKING_KEY, &custom_ranking)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RankingFormula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let settings = Value::deserialize(deserializer)?;
        RankingFormula::try_from(settings).map_err(serde::de::Error::custom)
    }
}
