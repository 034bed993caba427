use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Recipe;
use super::value_objects::IngredientLine;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
    /// Fails with `NotFound` when the recipe itself is gone.
    async fn get_ingredient_lines(&self, id: Uuid)
    -> Result<Vec<IngredientLine>, RepositoryError>;
    /// Inserts or replaces the recipe with its ingredient lines and tags.
    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
