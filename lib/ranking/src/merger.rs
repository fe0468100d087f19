//! Ranking-aware merge of pre-sorted hit lists
//!
//! Each input list must already be sorted by the same [`RankingFormula`]
//! (best hit first). Merging is a linear two-pointer walk; N lists are
//! merged by folding the pairwise merge from the left.
//!
//! # Ties and duplicates
//!
//! When two heads compare equal the left one is emitted first, and the right
//! one is dropped only if it has the same `objectID`. Deduplication is
//! therefore local to each pairwise step: a record whose copies do not meet
//! head-to-head during some fold step is kept twice.

use crate::criterion::RankingCriterion;
use crate::formula::RankingFormula;
use rankmerge_core::path::as_rank_integer;
use rankmerge_core::{Error, Hit, Result};
use serde_json::Value;
use std::cmp::Ordering;
use tracing::{debug, field, instrument, trace, Span};

/// Compares and merges hits according to a [`RankingFormula`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMerger {
    formula: RankingFormula,
}

impl ResultMerger {
    pub fn new(formula: RankingFormula) -> Self {
        Self { formula }
    }

    /// Build a merger from index settings (`ranking` + `customRanking`)
    pub fn from_settings(settings: &Value) -> Result<Self> {
        RankingFormula::parse(settings).map(Self::new)
    }

    pub fn formula(&self) -> &RankingFormula {
        &self.formula
    }

    /// Compare two hits.
    ///
    /// `Less` means `lhs` ranks before `rhs`. Criteria are applied strictly
    /// in priority order; the first one that differs decides.
    pub fn compare_hits<H: Hit + ?Sized>(&self, lhs: &H, rhs: &H) -> Result<Ordering> {
        let (lhs_info, rhs_info) = match (lhs.ranking_info(), rhs.ranking_info()) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(Error::MissingRankingInfo),
        };

        let ordering = self
            .formula
            .criteria()
            .iter()
            .map(|criterion| match criterion {
                RankingCriterion::Custom => self.compare_custom(lhs, rhs),
                builtin => builtin.compare(lhs_info, rhs_info).unwrap_or(Ordering::Equal),
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal);

        Ok(ordering)
    }

    fn compare_custom<H: Hit + ?Sized>(&self, lhs: &H, rhs: &H) -> Ordering {
        self.formula
            .custom_ranking()
            .iter()
            .map(|sort| {
                sort.direction.compare(
                    custom_value(lhs, &sort.field_name),
                    custom_value(rhs, &sort.field_name),
                )
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Merge two sorted hit lists.
    ///
    /// Accepts anything iterable over hits: pass `&vec` to get references
    /// back, or owned vectors to move the records. Results are unspecified
    /// if either input is not sorted by this merger's formula.
    #[instrument(
        name = "rankmerge::merge_hits",
        level = "debug",
        skip_all,
        fields(
            criteria = self.formula.criteria().len(),
            left_hint = field::Empty,
            right_hint = field::Empty,
            merged = field::Empty,
        )
    )]
    pub fn merge_hits<T, L, R>(&self, left: L, right: R) -> Result<Vec<T>>
    where
        T: Hit,
        L: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();
        let span = Span::current();
        span.record("left_hint", left.size_hint().0);
        span.record("right_hint", right.size_hint().0);
        let mut merged = Vec::with_capacity(left.size_hint().0 + right.size_hint().0);

        loop {
            let (ordering, duplicate) = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => {
                    let ordering = self.compare_hits(l, r)?;
                    let duplicate = ordering == Ordering::Equal && same_object(l, r)?;
                    (ordering, duplicate)
                }
                _ => break,
            };

            match ordering {
                Ordering::Less => merged.extend(left.next()),
                Ordering::Greater => merged.extend(right.next()),
                Ordering::Equal => {
                    merged.extend(left.next());
                    let tied = right.next();
                    if duplicate {
                        trace!(
                            object_id = tied.as_ref().and_then(|hit| hit.object_id()),
                            "Dropping duplicate hit"
                        );
                    } else {
                        merged.extend(tied);
                    }
                }
            }
        }

        merged.extend(left);
        merged.extend(right);
        span.record("merged", merged.len());
        Ok(merged)
    }

    /// Merge any number of sorted hit lists.
    ///
    /// Left fold of [`merge_hits`](Self::merge_hits) seeded with an empty
    /// list: the accumulated result is always the left side. An empty input
    /// yields an empty list and a single list comes back unchanged.
    #[instrument(
        name = "rankmerge::merge_all",
        skip_all,
        fields(
            criteria = self.formula.criteria().len(),
            custom_ranking = self.formula.custom_ranking().len(),
        )
    )]
    pub fn merge_all<T, L, I>(&self, lists: I) -> Result<Vec<T>>
    where
        T: Hit,
        L: IntoIterator<Item = T>,
        I: IntoIterator<Item = L>,
    {
        let mut folded = 0usize;
        let merged = lists.into_iter().try_fold(Vec::new(), |acc, list| {
            folded += 1;
            self.merge_hits(acc, list)
        })?;

        debug!(lists = folded, hits = merged.len(), "Merged hit lists");
        Ok(merged)
    }
}

/// Whether two tied hits are the same record. Both must carry an `objectID`.
fn same_object<H: Hit + ?Sized>(lhs: &H, rhs: &H) -> Result<bool> {
    match (lhs.object_id(), rhs.object_id()) {
        (Some(l), Some(r)) => Ok(l == r),
        _ => Err(Error::MissingIdentifier),
    }
}

/// Custom-ranking value of a hit; missing or non-numeric values count as 0
fn custom_value<H: Hit + ?Sized>(hit: &H, field_name: &str) -> i64 {
    hit.field(field_name).and_then(as_rank_integer).unwrap_or_else(|| {
        trace!(field = field_name, "Custom ranking value missing or non-numeric, using 0");
        0
    })
}
