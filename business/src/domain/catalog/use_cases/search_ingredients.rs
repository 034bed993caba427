use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Ingredient;

pub struct SearchIngredientsParams {
    pub name: Option<String>,
}

#[async_trait]
pub trait SearchIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchIngredientsParams,
    ) -> Result<Vec<Ingredient>, CatalogError>;
}
