//! In-memory food store
//!
//! Backs the retrieval boundary of the similarity service: owner-scoped
//! candidate lookup with the source record excluded by id. Records live
//! in memory only; an optional JSON seed file can populate the store at
//! startup.

use crate::error::{Error, Result};
use crate::food::{Food, FoodId, OwnerId};
use ahash::AHashMap;
use parking_lot::RwLock;
use std::path::Path;
use tracing::info;

/// Upper bound on the candidate pool handed to the ranker per request
pub const CANDIDATE_LIMIT: usize = 200;

/// Retrieval seam consumed by callers of the similarity engine.
///
/// The engine itself never touches a shared data store; it is handed an
/// already-scoped candidate list produced through this trait.
pub trait FoodRepository {
    /// Fetch a single food record by id
    fn get(&self, id: &FoodId) -> Option<Food>;

    /// Candidate pool for `owner`, never containing `exclude`,
    /// capped at [`CANDIDATE_LIMIT`]
    fn candidates(&self, owner: &OwnerId, exclude: &FoodId) -> Vec<Food>;
}

/// Thread-safe in-memory store of food records keyed by id
pub struct FoodStore {
    foods: RwLock<AHashMap<FoodId, Food>>,
}

impl FoodStore {
    pub fn new() -> Self {
        Self {
            foods: RwLock::new(AHashMap::new()),
        }
    }

    /// Insert or replace a record under its id
    pub fn upsert(&self, food: Food) {
        self.foods.write().insert(food.id.clone(), food);
    }

    /// Fetch a record, failing with [`Error::FoodNotFound`] when absent
    pub fn require(&self, id: &FoodId) -> Result<Food> {
        self.get(id).ok_or_else(|| Error::FoodNotFound(id.clone()))
    }

    /// Remove a record; returns whether it existed
    pub fn remove(&self, id: &FoodId) -> bool {
        self.foods.write().remove(id).is_some()
    }

    /// All foods belonging to `owner`, sorted by id
    pub fn list_by_owner(&self, owner: &OwnerId) -> Vec<Food> {
        let mut foods: Vec<Food> = self
            .foods
            .read()
            .values()
            .filter(|f| &f.owner_id == owner)
            .cloned()
            .collect();
        foods.sort_by(|a, b| a.id.cmp(&b.id));
        foods
    }

    pub fn count(&self) -> usize {
        self.foods.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.read().is_empty()
    }

    /// Load a JSON array of food records from disk, upserting each.
    ///
    /// Returns the number of records loaded.
    pub fn load_seed<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let foods: Vec<Food> =
            serde_json::from_str(&data).map_err(|e| Error::Serialization(e.to_string()))?;

        let count = foods.len();
        for food in foods {
            self.upsert(food);
        }
        info!("Loaded {} foods from {:?}", count, path.as_ref());
        Ok(count)
    }
}

impl Default for FoodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodRepository for FoodStore {
    fn get(&self, id: &FoodId) -> Option<Food> {
        self.foods.read().get(id).cloned()
    }

    fn candidates(&self, owner: &OwnerId, exclude: &FoodId) -> Vec<Food> {
        let mut candidates: Vec<Food> = self
            .foods
            .read()
            .values()
            .filter(|f| &f.owner_id == owner && &f.id != exclude)
            .cloned()
            .collect();
        // Sorted before capping so the pool is stable across identical stores
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        candidates.truncate(CANDIDATE_LIMIT);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::FoodCategory;

    fn food(id: &str, owner: &str) -> Food {
        Food::new(FoodId::from(id), format!("food {}", id), OwnerId::from(owner))
    }

    #[test]
    fn test_upsert_get_remove() {
        let store = FoodStore::new();
        store.upsert(food("f1", "o1").with_category(FoodCategory::Fruit));

        let fetched = store.get(&FoodId::from("f1")).unwrap();
        assert_eq!(fetched.category, Some(FoodCategory::Fruit));

        // Replacing under the same id keeps a single record
        store.upsert(food("f1", "o1").with_safety(true));
        assert_eq!(store.count(), 1);
        assert!(store.get(&FoodId::from("f1")).unwrap().is_safe);

        assert!(store.remove(&FoodId::from("f1")));
        assert!(!store.remove(&FoodId::from("f1")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_require_missing_food() {
        let store = FoodStore::new();
        let err = store.require(&FoodId::from("ghost")).unwrap_err();
        assert!(matches!(err, Error::FoodNotFound(_)));
        assert_eq!(err.to_string(), "Food not found: ghost");
    }

    #[test]
    fn test_candidates_scoped_to_owner() {
        let store = FoodStore::new();
        store.upsert(food("a1", "alice"));
        store.upsert(food("a2", "alice"));
        store.upsert(food("b1", "bob"));

        let candidates = store.candidates(&OwnerId::from("alice"), &FoodId::from("a1"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, FoodId::from("a2"));
    }

    #[test]
    fn test_candidates_excludes_source_id() {
        let store = FoodStore::new();
        store.upsert(food("f1", "o1"));
        store.upsert(food("f2", "o1"));

        let candidates = store.candidates(&OwnerId::from("o1"), &FoodId::from("f1"));
        assert!(candidates.iter().all(|c| c.id != FoodId::from("f1")));
    }

    #[test]
    fn test_candidates_capped() {
        let store = FoodStore::new();
        for i in 0..CANDIDATE_LIMIT + 50 {
            store.upsert(food(&format!("f{:04}", i), "o1"));
        }

        let candidates = store.candidates(&OwnerId::from("o1"), &FoodId::from("f0000"));
        assert_eq!(candidates.len(), CANDIDATE_LIMIT);
    }

    #[test]
    fn test_candidates_deterministic_order() {
        let store = FoodStore::new();
        for i in 0..10 {
            store.upsert(food(&format!("f{}", i), "o1"));
        }

        let first = store.candidates(&OwnerId::from("o1"), &FoodId::from("f0"));
        let second = store.candidates(&OwnerId::from("o1"), &FoodId::from("f0"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foods.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "f1", "name": "Apple", "category": "fruit", "is_safe": true, "owner_id": "o1"},
                {"id": "f2", "name": "Milk", "category": "dairy", "allergens": ["dairy"], "owner_id": "o1"}
            ]"#,
        )
        .unwrap();

        let store = FoodStore::new();
        let loaded = store.load_seed(&path).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(store.count(), 2);
        assert_eq!(
            store.get(&FoodId::from("f2")).unwrap().allergens,
            vec!["dairy".to_string()]
        );
    }

    #[test]
    fn test_load_seed_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FoodStore::new();
        assert!(matches!(
            store.load_seed(&path),
            Err(Error::Serialization(_))
        ));
    }
}
