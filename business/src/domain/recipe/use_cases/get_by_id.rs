use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeView;
use crate::domain::shared::value_objects::UserId;

pub struct GetRecipeByIdParams {
    pub id: Uuid,
    pub viewer: Option<UserId>,
}

#[async_trait]
pub trait GetRecipeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeView, RecipeError>;
}
