//! # MealMatch
//!
//! A food-similarity service: given a food a child already knows,
//! recommend alternative foods from the same household scored by
//! category, allergen profile, safety status, and name overlap.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install mealmatch
//! mealmatch --http-port 8080 --seed foods.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use mealmatch::prelude::*;
//!
//! let store = FoodStore::new();
//! let owner = OwnerId::from("household-1");
//!
//! store.upsert(
//!     Food::new(FoodId::from("apple"), "Apple", owner.clone())
//!         .with_category(FoodCategory::Fruit)
//!         .with_safety(true),
//! );
//! store.upsert(
//!     Food::new(FoodId::from("green-apple"), "Green Apple", owner.clone())
//!         .with_category(FoodCategory::Fruit)
//!         .with_safety(true),
//! );
//!
//! let source = store.get(&FoodId::from("apple")).unwrap();
//! let candidates = store.candidates(&owner, &source.id);
//! let suggestions = Ranker::new().rank(&source, &candidates);
//! assert_eq!(suggestions[0].similarity_score, 0.90);
//! ```
//!
//! ## Crate Structure
//!
//! MealMatch is composed of several crates:
//!
//! - [`mealmatch-core`](https://docs.rs/mealmatch-core) - Food records, owner scoping, in-memory store
//! - [`mealmatch-similarity`](https://docs.rs/mealmatch-similarity) - Weighted similarity metric and ranker
//! - [`mealmatch-api`](https://docs.rs/mealmatch-api) - REST API
//!
//! ## Features
//!
//! - **Weighted Similarity**: category, allergens, safety, and name dimensions
//! - **Explainable Scores**: per-dimension contribution breakdown
//! - **Owner Scoping**: candidates never cross the household boundary
//! - **Ranking Policy**: strict threshold, stable ordering, top-20 truncation
//! - **REST API**: food management and similarity lookups

// Re-export core types
pub use mealmatch_core::{
    Error, Food, FoodCategory, FoodId, FoodRepository, FoodStore, OwnerId, Result,
    CANDIDATE_LIMIT,
};

// Re-export the similarity engine
pub use mealmatch_similarity::{
    score_breakdown, similarity_score, Ranker, ScoreBreakdown, SimilarFood, SimilarResponse,
    SimilarityWeights, WeightsError, MAX_SUGGESTIONS, SCORE_THRESHOLD,
};

// Re-export API
pub use mealmatch_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Food, FoodCategory, FoodId, FoodRepository, FoodStore, OwnerId,
        Ranker, SimilarFood, SimilarResponse, SimilarityWeights,
        Error, Result,
        RestApi,
        CANDIDATE_LIMIT, MAX_SUGGESTIONS, SCORE_THRESHOLD,
    };
}
