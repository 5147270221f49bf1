//! Similarity functions for the food dimensions
//!
//! Per-dimension similarity calculations used by the ranker.
//! All functions return a score in range [0.0, 1.0] where 1.0 means identical.
//! Missing optional data (category, allergens) degrades to a zero or
//! neutral contribution, never an error.

use crate::weights::SimilarityWeights;
use ahash::AHashSet;
use mealmatch_core::{Food, FoodCategory};
use serde::Serialize;
use std::hash::Hash;

/// Calculate category similarity
///
/// # Returns
/// 1.0 iff both records carry a category and the values are equal;
/// a missing category on either side scores 0.0
pub fn category_similarity(a: Option<FoodCategory>, b: Option<FoodCategory>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

/// Calculate allergen-profile similarity between two tag lists
///
/// Two records with no known allergens are treated as a positive match,
/// not a neutral one. Otherwise this is the Jaccard index over the tag
/// sets.
pub fn allergen_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let tags_a: AHashSet<&str> = a.iter().map(String::as_str).collect();
    let tags_b: AHashSet<&str> = b.iter().map(String::as_str).collect();
    jaccard(&tags_a, &tags_b)
}

/// Calculate safety-status similarity
///
/// # Returns
/// 1.0 if both values are the same, 0.0 otherwise
pub fn safety_similarity(a: bool, b: bool) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}

/// Calculate name similarity as Jaccard index over lower-cased
/// whitespace tokens
///
/// Two empty token sets score 0.0 (empty union, nothing shared).
pub fn name_similarity(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}

/// Tokenize a name: lower-case, split on runs of whitespace
fn token_set(name: &str) -> AHashSet<String> {
    name.split_whitespace().map(str::to_lowercase).collect()
}

/// Jaccard index `|A ∩ B| / |A ∪ B|`, defined as 0.0 for an empty union
fn jaccard<T: Eq + Hash>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Round a score to two decimal places (half-up; scores are never negative)
pub fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted contribution of each dimension to a pair's similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub category: f64,
    pub allergens: f64,
    pub safety: f64,
    pub name: f64,
}

impl ScoreBreakdown {
    /// Total similarity score: the weighted sum rounded to two decimals
    pub fn total(&self) -> f64 {
        round_score(self.category + self.allergens + self.safety + self.name)
    }
}

/// Compute the per-dimension weighted contributions for a (source, candidate) pair
pub fn score_breakdown(
    source: &Food,
    candidate: &Food,
    weights: &SimilarityWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        category: weights.category * category_similarity(source.category, candidate.category),
        allergens: weights.allergens
            * allergen_similarity(&source.allergens, &candidate.allergens),
        safety: weights.safety * safety_similarity(source.is_safe, candidate.is_safe),
        name: weights.name * name_similarity(&source.name, &candidate.name),
    }
}

/// Similarity score for a (source, candidate) pair in [0, 1], rounded to
/// two decimal places
///
/// Deterministic and symmetric for this data: identical inputs always
/// yield identical outputs, and swapping source and candidate does not
/// change the score.
pub fn similarity_score(source: &Food, candidate: &Food, weights: &SimilarityWeights) -> f64 {
    score_breakdown(source, candidate, weights).total()
}
