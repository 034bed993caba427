use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeView;
use crate::domain::recipe::value_objects::IngredientLine;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateRecipeParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeView, RecipeError>;
}
