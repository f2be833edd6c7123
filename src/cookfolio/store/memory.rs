use super::{decode_collection, encode_collection, LoadReport, RecipeStore};
use crate::error::Result;
use crate::model::Recipe;

/// In-memory store for testing. Keeps the serialized blob itself (not the
/// decoded recipes) so loads go through the same codec as `FileStore`.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw blob, e.g. corrupt data for recovery tests.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl RecipeStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        match &self.blob {
            Some(blob) => Ok(decode_collection(blob)),
            None => Ok(LoadReport::default()),
        }
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.blob = Some(encode_collection(recipes)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Ingredient, RecipeDraft};

    pub fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            description: format!("Description for {}", title),
            ingredients: vec![Ingredient {
                name: "Salt".to_string(),
                amount: "1".to_string(),
                unit: "tsp".to_string(),
            }],
            instructions: vec!["Do the thing".to_string()],
            cooking_time: 30,
            servings: 4,
            image: None,
            category: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            let mut recipes = Vec::new();
            for i in 0..count {
                recipes.push(Recipe::new(draft(&format!("Test Recipe {}", i + 1))));
            }
            self.store.save(&recipes).unwrap();
            self
        }

        pub fn with_corrupt_blob(mut self) -> Self {
            self.store.blob = Some("{{not a collection".to_string());
            self
        }
    }
}
