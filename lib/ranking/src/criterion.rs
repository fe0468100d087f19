//! Ranking criteria and custom sort criteria
//!
//! Built-in criteria have a fixed direction and carry none of their own.
//! Only [`CustomSortCriterion`] holds a caller-chosen [`SortDirection`].

use rankmerge_core::{ConfigError, RankingInfo};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction for a ranking signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smaller values rank first
    Ascending,
    /// Larger values rank first
    Descending,
}

impl SortDirection {
    /// Order two values; `Less` means `lhs` ranks first
    #[inline]
    pub fn compare(self, lhs: i64, rhs: i64) -> Ordering {
        match self {
            SortDirection::Ascending => lhs.cmp(&rhs),
            SortDirection::Descending => rhs.cmp(&lhs),
        }
    }
}

/// One step of a ranking formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingCriterion {
    /// Number of typos (ascending)
    Typo,
    /// Geo distance (ascending)
    Geo,
    /// Number of matched query words (descending)
    Words,
    /// Score from query-time filter boosts (descending)
    Filters,
    /// Number of words matched exactly, without prefix matching (descending)
    Exact,
    /// Distance between matched words in the record (ascending)
    Proximity,
    /// Position of the first matched word (ascending)
    Attribute,
    /// Delegate to the formula's custom ranking
    Custom,
}

impl RankingCriterion {
    pub const ALL: [RankingCriterion; 8] = [
        RankingCriterion::Typo,
        RankingCriterion::Geo,
        RankingCriterion::Words,
        RankingCriterion::Filters,
        RankingCriterion::Exact,
        RankingCriterion::Proximity,
        RankingCriterion::Attribute,
        RankingCriterion::Custom,
    ];

    /// Configuration token for this criterion
    pub fn as_str(self) -> &'static str {
        match self {
            RankingCriterion::Typo => "typo",
            RankingCriterion::Geo => "geo",
            RankingCriterion::Words => "words",
            RankingCriterion::Filters => "filters",
            RankingCriterion::Exact => "exact",
            RankingCriterion::Proximity => "proximity",
            RankingCriterion::Attribute => "attribute",
            RankingCriterion::Custom => "custom",
        }
    }

    /// Compare two hits' ranking signals for a built-in criterion.
    ///
    /// Returns `None` for [`RankingCriterion::Custom`], which is resolved
    /// against the custom ranking instead.
    pub fn compare(self, lhs: &RankingInfo, rhs: &RankingInfo) -> Option<Ordering> {
        use SortDirection::{Ascending, Descending};

        let ordering = match self {
            RankingCriterion::Typo => Ascending.compare(lhs.number_of_typos, rhs.number_of_typos),
            RankingCriterion::Geo => Ascending.compare(lhs.geo_distance, rhs.geo_distance),
            RankingCriterion::Words => Descending.compare(lhs.matched_words, rhs.matched_words),
            RankingCriterion::Filters => Descending.compare(lhs.filters_score, rhs.filters_score),
            RankingCriterion::Exact => Descending.compare(lhs.exact_words, rhs.exact_words),
            RankingCriterion::Proximity => {
                Ascending.compare(lhs.proximity_distance, rhs.proximity_distance)
            }
            RankingCriterion::Attribute => Ascending.compare(
                lhs.first_matched_word_position,
                rhs.first_matched_word_position,
            ),
            RankingCriterion::Custom => return None,
        };
        Some(ordering)
    }
}

impl FromStr for RankingCriterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingCriterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCriterion(s.to_string()))
    }
}

impl fmt::Display for RankingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort criterion of a custom ranking: `asc(<field>)` or `desc(<field>)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomSortCriterion {
    /// Dotted path of the field to sort on
    pub field_name: String,
    pub direction: SortDirection,
}

impl CustomSortCriterion {
    pub fn new(field_name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field_name: field_name.into(),
            direction,
        }
    }

    pub fn ascending(field_name: impl Into<String>) -> Self {
        Self::new(field_name, SortDirection::Ascending)
    }

    pub fn descending(field_name: impl Into<String>) -> Self {
        Self::new(field_name, SortDirection::Descending)
    }
}

impl FromStr for CustomSortCriterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, rest) = if let Some(rest) = s.strip_prefix("asc(") {
            (SortDirection::Ascending, rest)
        } else if let Some(rest) = s.strip_prefix("desc(") {
            (SortDirection::Descending, rest)
        } else {
            return Err(ConfigError::InvalidSortCriterion(s.to_string()));
        };

        // The first closing parenthesis must end the descriptor.
        match rest.find(')') {
            Some(end) if end > 0 && end + 1 == rest.len() => {
                Ok(CustomSortCriterion::new(&rest[..end], direction))
            }
            _ => Err(ConfigError::InvalidSortCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for CustomSortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "asc({})", self.field_name),
            SortDirection::Descending => write!(f, "desc({})", self.field_name),
        }
    }
}
