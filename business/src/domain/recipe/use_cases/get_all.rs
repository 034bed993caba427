use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeView;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllRecipesParams {
    /// `None` for anonymous callers.
    pub viewer: Option<UserId>,
}

#[async_trait]
pub trait GetAllRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllRecipesParams) -> Result<Vec<RecipeView>, RecipeError>;
}
