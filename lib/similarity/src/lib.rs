//! # MealMatch Similarity
//!
//! The food-similarity engine for MealMatch.
//!
//! Computes a bounded, deterministic similarity score between two food
//! records and ranks candidate pools into "try this instead" suggestions.
//!
//! ## Features
//!
//! - **Weighted dimensions**: category, allergen overlap, safety status,
//!   and name-token overlap, with weights summing to 1.0
//! - **Graceful degradation**: missing categories and absent allergen
//!   lists score zero or neutral, never error
//! - **Explainability**: per-dimension contribution breakdown
//! - **Ranking policy**: strict 0.2 threshold, score-descending stable
//!   sort, top-20 truncation
//!
//! ## Example
//!
//! ```rust
//! use mealmatch_core::{Food, FoodCategory, FoodId, OwnerId};
//! use mealmatch_similarity::Ranker;
//!
//! let owner = OwnerId::from("household-1");
//! let source = Food::new(FoodId::from("apple"), "Apple", owner.clone())
//!     .with_category(FoodCategory::Fruit)
//!     .with_safety(true);
//! let candidates = vec![
//!     Food::new(FoodId::from("green-apple"), "Green Apple", owner.clone())
//!         .with_category(FoodCategory::Fruit)
//!         .with_safety(true),
//!     Food::new(FoodId::from("crackers"), "Crackers", owner)
//!         .with_category(FoodCategory::Snack)
//!         .with_allergens(vec!["gluten".to_string()]),
//! ];
//!
//! let suggestions = Ranker::new().rank(&source, &candidates);
//! assert_eq!(suggestions[0].id, FoodId::from("green-apple"));
//! assert_eq!(suggestions[0].similarity_score, 0.90);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Weights   │────>│    Metric    │────>│    Ranker    │
//! │ (4 x f64)   │     │ (pair score) │     │ (filter/sort │
//! └─────────────┘     └──────────────┘     │  /truncate)  │
//!                                          └──────────────┘
//! ```

pub mod metric;
pub mod rank;
pub mod weights;

// Re-export main types for convenience
pub use metric::{
    allergen_similarity, category_similarity, name_similarity, safety_similarity,
    score_breakdown, similarity_score, ScoreBreakdown,
};
pub use rank::{Ranker, SimilarFood, SimilarResponse, MAX_SUGGESTIONS, SCORE_THRESHOLD};
pub use weights::{SimilarityWeights, WeightsError};
