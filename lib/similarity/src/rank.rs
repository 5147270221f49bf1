//! Candidate filtering and ranking
//!
//! Applies the similarity metric across a candidate pool, filters by
//! threshold, sorts by score, and truncates to the suggestion cap.
//! A stateless pipeline: no side effects, no input mutation.

use crate::metric::similarity_score;
use crate::weights::{SimilarityWeights, WeightsError};
use mealmatch_core::{Food, FoodCategory, FoodId};
use serde::{Deserialize, Serialize};

/// Candidates scoring at or below this value are never suggested
pub const SCORE_THRESHOLD: f64 = 0.2;

/// Upper bound on suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 20;

/// A ranked suggestion: candidate fields plus the similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarFood {
    pub id: FoodId,
    pub name: String,
    pub category: Option<FoodCategory>,
    pub similarity_score: f64,
}

/// Response envelope echoing the source food id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub food_id: FoodId,
    pub similar_foods: Vec<SimilarFood>,
}

/// Ranker that turns a source food and a candidate pool into ordered
/// suggestions
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: SimilarityWeights,
}

impl Ranker {
    /// Create a ranker with the default dimension weights
    pub fn new() -> Self {
        Self {
            weights: SimilarityWeights::default(),
        }
    }

    /// Create a ranker with custom weights, validated and normalized
    pub fn with_weights(mut weights: SimilarityWeights) -> Result<Self, WeightsError> {
        weights.validate_and_normalize()?;
        Ok(Self { weights })
    }

    /// Get a reference to the weights in use
    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Rank candidates by similarity to the source food
    ///
    /// The candidate pool is expected to be owner-scoped already; any
    /// candidate carrying the source's own id is dropped regardless.
    ///
    /// # Returns
    /// At most [`MAX_SUGGESTIONS`] results with scores strictly above
    /// [`SCORE_THRESHOLD`], ordered by score descending. Ties keep the
    /// incoming candidate order (stable sort). An empty list is a valid
    /// outcome, not an error.
    pub fn rank(&self, source: &Food, candidates: &[Food]) -> Vec<SimilarFood> {
        let mut results: Vec<SimilarFood> = candidates
            .iter()
            .filter(|candidate| candidate.id != source.id)
            .map(|candidate| SimilarFood {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                category: candidate.category,
                similarity_score: similarity_score(source, candidate, &self.weights),
            })
            .filter(|result| result.similarity_score > SCORE_THRESHOLD)
            .collect();

        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(MAX_SUGGESTIONS);
        results
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealmatch_core::OwnerId;

    fn food(id: &str, name: &str) -> Food {
        Food::new(FoodId::from(id), name, OwnerId::from("o1"))
    }

    fn safe_fruit(id: &str, name: &str) -> Food {
        food(id, name)
            .with_category(FoodCategory::Fruit)
            .with_safety(true)
    }

    #[test]
    fn test_rank_sorts_descending() {
        let source = safe_fruit("src", "Apple");
        let candidates = vec![
            // category only: 0.4 + allergens 0.2 = 0.6
            food("c1", "Pear").with_category(FoodCategory::Fruit),
            // category + safety + half name: 0.9
            safe_fruit("c2", "Green Apple"),
            // category + safety: 0.8
            safe_fruit("c3", "Banana"),
        ];

        let results = Ranker::new().rank(&source, &candidates);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, FoodId::from("c2"));
        assert_eq!(results[1].id, FoodId::from("c3"));
        assert_eq!(results[2].id, FoodId::from("c1"));
        for pair in results.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let source = food("src", "Apple")
            .with_category(FoodCategory::Fruit)
            .with_allergens(vec!["apples".to_string()]);

        // Safety matches (both false), nothing else: exactly 0.2 - excluded
        let at_threshold = food("c1", "Lentils").with_category(FoodCategory::Protein);
        // Safety + category: 0.6 - included
        let above = food("c2", "Pear").with_category(FoodCategory::Fruit);

        let results = Ranker::new().rank(&source, &[at_threshold, above]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, FoodId::from("c2"));
    }

    #[test]
    fn test_nothing_clears_threshold() {
        let source = food("src", "Chicken")
            .with_category(FoodCategory::Protein)
            .with_allergens(vec!["peanuts".to_string()])
            .with_safety(true);
        let candidates = vec![food("c1", "Crackers").with_category(FoodCategory::Snack)];

        // Valid empty result, not an error
        assert!(Ranker::new().rank(&source, &candidates).is_empty());
    }

    #[test]
    fn test_self_exclusion() {
        let source = safe_fruit("src", "Apple");
        // Same id with perfect-match attributes; must never appear
        let impostor = safe_fruit("src", "Apple");
        let other = safe_fruit("c1", "Banana");

        let results = Ranker::new().rank(&source, &[impostor, other]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, FoodId::from("c1"));
    }

    #[test]
    fn test_truncation_keeps_highest_scores() {
        // Source carries one allergen; candidate i shares it plus i unique
        // tags, so Jaccard = 1/(1+i) and scores decrease with i (rounding
        // produces a few ties, which stable sort keeps in input order).
        let source = food("src", "Yogurt")
            .with_category(FoodCategory::Dairy)
            .with_allergens(vec!["dairy".to_string()])
            .with_safety(true);

        let candidates: Vec<Food> = (0..25)
            .map(|i| {
                let mut allergens = vec!["dairy".to_string()];
                allergens.extend((0..i).map(|j| format!("tag{}", j)));
                food(&format!("c{:02}", i), &format!("candidate {}", i))
                    .with_category(FoodCategory::Dairy)
                    .with_allergens(allergens)
                    .with_safety(true)
            })
            .collect();

        let results = Ranker::new().rank(&source, &candidates);

        assert_eq!(results.len(), MAX_SUGGESTIONS);
        // The 20 highest-scoring candidates are c00..c19, in order
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.id, FoodId::from(format!("c{:02}", i).as_str()));
        }
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let source = safe_fruit("src", "Apple");
        // All three score identically (category + safety + no-allergen match)
        let candidates = vec![
            safe_fruit("c1", "Banana"),
            safe_fruit("c2", "Mango"),
            safe_fruit("c3", "Papaya"),
        ];

        let results = Ranker::new().rank(&source, &candidates);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let source = safe_fruit("src", "Apple");
        let candidates = vec![
            safe_fruit("c1", "Green Apple"),
            food("c2", "Bread").with_category(FoodCategory::Carb),
            safe_fruit("c3", "Apple Sauce"),
        ];

        let ranker = Ranker::new();
        assert_eq!(ranker.rank(&source, &candidates), ranker.rank(&source, &candidates));
    }

    #[test]
    fn test_rank_empty_candidates() {
        let source = safe_fruit("src", "Apple");
        assert!(Ranker::new().rank(&source, &[]).is_empty());
    }

    #[test]
    fn test_with_weights_rejects_negative() {
        let weights = SimilarityWeights {
            name: -0.2,
            ..Default::default()
        };
        assert!(Ranker::with_weights(weights).is_err());
    }

    #[test]
    fn test_with_weights_normalizes() {
        let ranker = Ranker::with_weights(SimilarityWeights {
            category: 4.0,
            allergens: 2.0,
            safety: 2.0,
            name: 2.0,
        })
        .unwrap();
        assert!((ranker.weights().sum() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_similar_food_serializes_score_key() {
        let result = SimilarFood {
            id: FoodId::from("c1"),
            name: "Green Apple".to_string(),
            category: Some(FoodCategory::Fruit),
            similarity_score: 0.9,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["similarity_score"], 0.9);
        assert_eq!(json["category"], "fruit");
    }

    #[test]
    fn test_similar_response_roundtrip() {
        let response = SimilarResponse {
            food_id: FoodId::from("src"),
            similar_foods: vec![],
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: SimilarResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.food_id, FoodId::from("src"));
        assert!(parsed.similar_foods.is_empty());
    }
}
