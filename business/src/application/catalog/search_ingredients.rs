use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Ingredient;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::search_ingredients::{
    SearchIngredientsParams, SearchIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct SearchIngredientsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchIngredientsUseCase for SearchIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchIngredientsParams,
    ) -> Result<Vec<Ingredient>, CatalogError> {
        // A blank search term lists everything.
        let prefix = params
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        self.logger
            .debug(&format!("Searching ingredients with prefix {:?}", prefix));

        Ok(self.repository.search_ingredients(prefix).await?)
    }
}
