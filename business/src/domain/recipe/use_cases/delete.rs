use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteRecipeParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError>;
}
