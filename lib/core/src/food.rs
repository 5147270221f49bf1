use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a food record, stable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    /// Mint a fresh random id for records created without one
    pub fn generate() -> Self {
        FoodId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FoodId {
    fn from(s: String) -> Self {
        FoodId(s)
    }
}

impl From<&str> for FoodId {
    fn from(s: &str) -> Self {
        FoodId(s.to_string())
    }
}

impl From<Uuid> for FoodId {
    fn from(u: Uuid) -> Self {
        FoodId(u.to_string())
    }
}

/// Identifies the household/user scope a food belongs to.
///
/// Candidate sets never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        OwnerId(s)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        OwnerId(s.to_string())
    }
}

/// Closed set of food categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carb,
    Dairy,
    Fruit,
    Vegetable,
    Snack,
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carb => "carb",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Snack => "snack",
        };
        write!(f, "{}", label)
    }
}

/// A food record as consumed by the similarity engine.
///
/// `category` and `allergens` are optional data: a missing category and
/// an absent/empty allergen list both degrade gracefully in scoring
/// rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    /// Allergen tags; absent in the wire format means "no known allergens"
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Owner-specific judgment: is this food currently tolerated?
    #[serde(default)]
    pub is_safe: bool,
    pub owner_id: OwnerId,
}

impl Food {
    #[inline]
    #[must_use]
    pub fn new(id: FoodId, name: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            allergens: Vec::new(),
            is_safe: false,
            owner_id,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_allergens(mut self, allergens: Vec<String>) -> Self {
        self.allergens = allergens;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_safety(mut self, is_safe: bool) -> Self {
        self.is_safe = is_safe;
        self
    }

    /// True when the record carries at least one allergen tag
    #[inline]
    pub fn has_allergens(&self) -> bool {
        !self.allergens.is_empty()
    }
}
