use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct GenerateShoppingListParams {
    pub user_id: UserId,
}

/// Builds the downloadable plain-text shopping list for the caller's cart.
#[async_trait]
pub trait GenerateShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: GenerateShoppingListParams)
    -> Result<String, ShoppingListError>;
}
