//! # Catalog
//!
//! The collection controller: owns the authoritative in-memory recipe list
//! for the lifetime of a session and keeps it synchronized with the store.
//!
//! Every mutation follows the same shape: update the in-memory list first,
//! then persist the FULL collection. There is no delta persistence and no
//! rollback — if the save fails the error propagates but the in-memory
//! mutation stands, leaving the persisted copy one step behind. That matches
//! the best-effort-cache failure model this app was built around.
//!
//! Generic over [`RecipeStore`] so tests run against `InMemoryStore` and
//! production against `FileStore`.

use crate::error::Result;
use crate::model::{Recipe, RecipeDraft};
use crate::store::RecipeStore;
use uuid::Uuid;

/// Recovery accounting from the initial load, surfaced so a UI can warn the
/// user that stored data was repaired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recovery {
    pub dropped: usize,
    pub reset: bool,
}

impl Recovery {
    pub fn is_clean(&self) -> bool {
        self.dropped == 0 && !self.reset
    }
}

pub struct Catalog<S: RecipeStore> {
    store: S,
    recipes: Vec<Recipe>,
    recovery: Recovery,
}

impl<S: RecipeStore> Catalog<S> {
    /// Open the catalog, loading the persisted collection once. An absent
    /// blob yields an empty catalog, not an error.
    pub fn open(store: S) -> Result<Self> {
        let report = store.load()?;
        Ok(Self {
            store,
            recipes: report.recipes,
            recovery: Recovery {
                dropped: report.dropped,
                reset: report.reset,
            },
        })
    }

    /// What the initial load had to repair, if anything.
    pub fn recovery(&self) -> Recovery {
        self.recovery
    }

    /// All recipes, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == *id)
    }

    /// Add a recipe: assigns id and timestamps, appends at the end, persists
    /// the full collection. Duplicate titles are allowed.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<&Recipe> {
        let recipe = Recipe::new(draft);
        self.recipes.push(recipe);
        self.store.save(&self.recipes)?;
        Ok(self.recipes.last().expect("just pushed"))
    }

    /// Delete by id. Returns the removed recipe, or `None` when no entry
    /// matched — a silent no-op, never an error.
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<Recipe>> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == *id) else {
            return Ok(None);
        };
        let removed = self.recipes.remove(pos);
        self.store.save(&self.recipes)?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use crate::store::memory::fixtures::draft;
    use crate::store::memory::InMemoryStore;
    use crate::store::RecipeStore;

    #[test]
    fn opens_empty_on_fresh_store() {
        let catalog = Catalog::open(InMemoryStore::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.recovery().is_clean());
    }

    #[test]
    fn add_appends_and_persists() {
        let mut catalog = Catalog::open(InMemoryStore::new()).unwrap();
        catalog.add(draft("First")).unwrap();
        let added = catalog.add(draft("Second")).unwrap();
        assert_eq!(added.title, "Second");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.recipes()[1].title, "Second");

        // A reload from the same backing state sees both, in order
        let mut probe = InMemoryStore::new();
        probe.save(catalog.recipes()).unwrap();
        let reloaded = Catalog::open(probe).unwrap();
        assert_eq!(reloaded.recipes(), catalog.recipes());
    }

    #[test]
    fn add_preserves_submitted_fields_verbatim() {
        let mut catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let submitted = RecipeDraft {
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
        };
        let added = catalog.add(submitted.clone()).unwrap();

        assert_eq!(added.created_at, added.updated_at);
        assert_eq!(added.title, submitted.title);
        assert_eq!(added.ingredients, submitted.ingredients);
        assert_eq!(added.instructions, submitted.instructions);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_titles_are_allowed() {
        let mut catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let a = catalog.add(draft("Pasta")).unwrap().id;
        let b = catalog.add(draft("Pasta")).unwrap().id;
        assert_ne!(a, b);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_and_persists() {
        let mut catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let first = catalog.add(draft("First")).unwrap().id;
        catalog.add(draft("Second")).unwrap();

        let removed = catalog.delete(&first).unwrap();
        assert_eq!(removed.unwrap().title, "First");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recipes()[0].title, "Second");
        assert!(catalog.get(&first).is_none());
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let mut catalog = Catalog::open(InMemoryStore::new()).unwrap();
        catalog.add(draft("Only")).unwrap();
        let before = catalog.recipes().to_vec();

        let removed = catalog.delete(&uuid::Uuid::new_v4()).unwrap();
        assert!(removed.is_none());
        assert_eq!(catalog.recipes(), before.as_slice());
    }

    #[test]
    fn deleted_id_is_gone_from_subsequent_loads() {
        let mut store = InMemoryStore::new();
        let mut seed = Catalog::open(InMemoryStore::new()).unwrap();
        let victim = seed.add(draft("Victim")).unwrap().id;
        seed.add(draft("Survivor")).unwrap();
        store.save(seed.recipes()).unwrap();

        let mut catalog = Catalog::open(store).unwrap();
        catalog.delete(&victim).unwrap();

        let mut probe = InMemoryStore::new();
        probe.save(catalog.recipes()).unwrap();
        let reloaded = Catalog::open(probe).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get(&victim).is_none());
    }

    #[test]
    fn corrupt_store_opens_empty_with_recovery_flagged() {
        let catalog = Catalog::open(InMemoryStore::with_blob("oops")).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.recovery().reset);
        assert!(!catalog.recovery().is_clean());
    }
}
