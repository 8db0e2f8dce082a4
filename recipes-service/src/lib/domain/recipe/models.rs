use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::recipe::errors::RecipeIdError;

/// Recipe aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a new recipe from a creation command, stamping id and publish time.
    pub fn publish(command: RecipeCommand) -> Self {
        Self {
            id: RecipeId::new(),
            name: command.name,
            tags: command.tags,
            ingredients: command.ingredients,
            instructions: command.instructions,
            published_at: Utc::now(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Recipe unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    /// Generate a new random recipe ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a recipe ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RecipeIdError> {
        Uuid::parse_str(s)
            .map(RecipeId)
            .map_err(|e| RecipeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Editable recipe fields, used both to create and to replace a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCommand {
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_round_trip() {
        let id = RecipeId::new();
        assert_eq!(RecipeId::from_string(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_recipe_id_invalid() {
        assert!(RecipeId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_publish_stamps_id_and_time() {
        let before = Utc::now();
        let recipe = Recipe::publish(RecipeCommand {
            name: "Pizza".to_string(),
            tags: vec!["italian".to_string()],
            ingredients: vec!["flour".to_string()],
            instructions: vec!["bake".to_string()],
        });

        assert_eq!(recipe.name, "Pizza");
        assert!(recipe.published_at >= before);
        assert!(recipe.has_tag("italian"));
        assert!(!recipe.has_tag("french"));
    }
}
