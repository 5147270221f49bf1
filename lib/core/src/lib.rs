//! # MealMatch Core
//!
//! Core library for the MealMatch food-similarity service.
//!
//! This crate provides the canonical value types and the in-memory store:
//!
//! - [`Food`] - A food record with category, allergens, and safety status
//! - [`FoodId`] / [`OwnerId`] - Opaque identifiers
//! - [`FoodStore`] - Thread-safe in-memory store implementing the
//!   retrieval boundary ([`FoodRepository`])
//!
//! ## Example
//!
//! ```rust
//! use mealmatch_core::{Food, FoodCategory, FoodId, FoodRepository, FoodStore, OwnerId};
//!
//! let store = FoodStore::new();
//! let owner = OwnerId::from("household-1");
//!
//! store.upsert(
//!     Food::new(FoodId::from("apple"), "Apple", owner.clone())
//!         .with_category(FoodCategory::Fruit)
//!         .with_safety(true),
//! );
//!
//! // Candidate lookup is owner-scoped and excludes the source id
//! let candidates = store.candidates(&owner, &FoodId::from("apple"));
//! assert!(candidates.is_empty());
//! ```

pub mod error;
pub mod food;
pub mod store;

pub use error::{Error, Result};
pub use food::{Food, FoodCategory, FoodId, OwnerId};
pub use store::{FoodRepository, FoodStore, CANDIDATE_LIMIT};
