//! # MealMatch API
//!
//! REST boundary for the MealMatch food-similarity service.
//!
//! Exposes food management per owner scope and the similarity endpoint
//! (`POST /similar`) that resolves a source food, pulls its owner-scoped
//! candidate pool from the store, and returns ranked suggestions.

pub mod rest;

pub use rest::RestApi;
