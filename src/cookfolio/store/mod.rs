//! # Storage Layer
//!
//! The persistence boundary for the recipe collection. The whole collection
//! lives under a single storage key as one JSON blob; every save rewrites the
//! blob in full (no deltas, no merging).
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind the [`RecipeStore`] trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the catalog logic **decoupled** from where the blob lives
//! - Make the store an injected capability rather than a hidden global
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage; the blob is a single
//!   `cookfolio_recipes.json` file in the data directory. When no data
//!   directory can be resolved the store runs in degraded mode: loads are
//!   empty, saves are silent no-ops.
//!
//! - [`memory::InMemoryStore`]: Holds the serialized blob in memory. Used in
//!   tests so the same codec path is exercised as in production.
//!
//! ## Blob Format
//!
//! A JSON array of recipe records with camelCase keys and RFC 3339
//! timestamps, compatible with blobs written by earlier versions of the app.
//! Loading validates each record individually: records that don't match the
//! schema are dropped (and counted); a blob that isn't readable JSON at all
//! degrades to the empty collection. [`LoadReport`] carries that accounting
//! so the caller can warn the user.

use crate::error::Result;
use crate::model::Recipe;

pub mod fs;
pub mod memory;

/// Name of the single storage key the collection is persisted under.
pub const STORAGE_KEY: &str = "cookfolio_recipes";

/// Outcome of loading the persisted collection.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub recipes: Vec<Recipe>,
    /// Records dropped because they failed schema validation.
    pub dropped: usize,
    /// True when the stored blob was unreadable and the collection was
    /// reset to empty.
    pub reset: bool,
}

impl LoadReport {
    pub fn clean(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            dropped: 0,
            reset: false,
        }
    }
}

/// Abstract interface for collection persistence.
///
/// Implementations move the serialized blob to and from the medium; the
/// codec itself is shared (see [`encode_collection`] / [`decode_collection`]).
pub trait RecipeStore {
    /// Load the persisted collection. A missing blob is an empty collection,
    /// not an error; a malformed blob is repaired per [`LoadReport`].
    fn load(&self) -> Result<LoadReport>;

    /// Serialize the full collection and write it under the storage key,
    /// replacing any prior value.
    fn save(&mut self, recipes: &[Recipe]) -> Result<()>;
}

/// Serialize a collection to its blob form.
pub fn encode_collection(recipes: &[Recipe]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recipes)?)
}

/// Decode a stored blob, validating each record against the recipe schema.
///
/// Malformed records are dropped and counted rather than failing the load;
/// a blob that isn't a JSON array at all resets the collection to empty.
/// Deterministic: the same blob always yields the same report.
pub fn decode_collection(blob: &str) -> LoadReport {
    let values: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(values) => values,
        Err(_) => {
            return LoadReport {
                recipes: Vec::new(),
                dropped: 0,
                reset: true,
            }
        }
    };

    let total = values.len();
    let recipes: Vec<Recipe> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    LoadReport {
        dropped: total - recipes.len(),
        recipes,
        reset: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, Recipe, RecipeDraft};

    fn pasta() -> Recipe {
        Recipe::new(RecipeDraft {
            title: "Pasta".to_string(),
            description: "Simple".to_string(),
            ingredients: vec![Ingredient {
                name: "Pasta".to_string(),
                amount: "200".to_string(),
                unit: "g".to_string(),
            }],
            instructions: vec!["Boil water".to_string(), "Cook pasta".to_string()],
            cooking_time: 20,
            servings: 2,
            image: None,
            category: None,
        })
    }

    #[test]
    fn encode_decode_round_trips() {
        let recipes = vec![pasta(), pasta()];
        let blob = encode_collection(&recipes).unwrap();
        let report = decode_collection(&blob);
        assert_eq!(report.recipes, recipes);
        assert_eq!(report.dropped, 0);
        assert!(!report.reset);
    }

    #[test]
    fn round_trip_preserves_timestamps_exactly() {
        let recipe = pasta();
        let blob = encode_collection(std::slice::from_ref(&recipe)).unwrap();
        let report = decode_collection(&blob);
        assert_eq!(report.recipes[0].created_at, recipe.created_at);
        assert_eq!(report.recipes[0].updated_at, recipe.updated_at);
    }

    #[test]
    fn unreadable_blob_resets_to_empty() {
        let report = decode_collection("not json at all {{{");
        assert!(report.recipes.is_empty());
        assert!(report.reset);

        // An object instead of an array counts as unreadable too
        let report = decode_collection(r#"{"id": "x"}"#);
        assert!(report.recipes.is_empty());
        assert!(report.reset);
    }

    #[test]
    fn malformed_records_are_dropped_individually() {
        let good = pasta();
        let mut values = vec![serde_json::to_value(&good).unwrap()];
        values.push(serde_json::json!({"title": "missing everything else"}));
        let blob = serde_json::to_string(&values).unwrap();

        let report = decode_collection(&blob);
        assert_eq!(report.recipes.len(), 1);
        assert_eq!(report.recipes[0].id, good.id);
        assert_eq!(report.dropped, 1);
        assert!(!report.reset);
    }

    #[test]
    fn decoding_is_deterministic() {
        let blob = r#"[{"bogus": true}, 42]"#;
        let a = decode_collection(blob);
        let b = decode_collection(blob);
        assert_eq!(a.recipes.len(), b.recipes.len());
        assert_eq!(a.dropped, b.dropped);
        assert_eq!(a.dropped, 2);
    }
}
