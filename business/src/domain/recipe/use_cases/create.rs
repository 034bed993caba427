use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::value_objects::IngredientLine;
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeParams {
    pub user_id: UserId,
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError>;
}
