use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ingredient line. Owned by exactly one recipe, no identity of
/// its own. Amount is a free-form string ("200", "1/2", "a pinch").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// The persisted record shape: camelCase keys, RFC 3339 timestamps,
/// `image`/`category` omitted when absent. This is the on-disk contract and
/// must keep reading blobs written by older versions of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    /// One entry per step; order is execution order.
    pub instructions: Vec<String>,
    /// Minutes. Expected positive but not enforced.
    pub cooking_time: u32,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    // Set once at creation. There is no edit operation, so this never moves
    // after that; kept in the record for forward compatibility.
    pub updated_at: DateTime<Utc>,
}

/// A recipe as submitted by the user: everything except the system-assigned
/// id and timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: u32,
    pub servings: u32,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl Recipe {
    /// Promote a draft to a full recipe: fresh v4 id, both timestamps set to
    /// the same instant.
    pub fn new(draft: RecipeDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            cooking_time: draft.cooking_time,
            servings: draft.servings,
            image: draft.image,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            description: "A test recipe".to_string(),
            cooking_time: 20,
            servings: 2,
            ..Default::default()
        }
    }

    #[test]
    fn new_recipe_gets_matching_timestamps() {
        let recipe = Recipe::new(draft("Pasta"));
        assert_eq!(recipe.created_at, recipe.updated_at);
    }

    #[test]
    fn new_recipes_get_distinct_ids() {
        let a = Recipe::new(draft("A"));
        let b = Recipe::new(draft("A"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let recipe = Recipe::new(draft("Pasta"));
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"cookingTime\":20"));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn optional_fields_omitted_when_absent() {
        let recipe = Recipe::new(draft("Pasta"));
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(!json.contains("image"));
        assert!(!json.contains("category"));
    }

    #[test]
    fn reads_records_written_by_the_original_app() {
        // Shape produced by JSON.stringify on the browser version, including
        // millisecond-precision ISO dates.
        let json = r#"{
            "id": "7f2c1a34-9b1d-4e5f-8a6b-0c1d2e3f4a5b",
            "title": "Pancakes",
            "description": "Weekend breakfast",
            "ingredients": [{"name": "Flour", "amount": "250", "unit": "g"}],
            "instructions": ["Mix", "Fry"],
            "cookingTime": 15,
            "servings": 4,
            "category": "Breakfast",
            "createdAt": "2024-01-15T10:30:00.000Z",
            "updatedAt": "2024-01-15T10:30:00.000Z"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.cooking_time, 15);
        assert_eq!(recipe.category.as_deref(), Some("Breakfast"));
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.ingredients[0].unit, "g");
    }
}
