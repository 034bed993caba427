use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::list_tags::ListTagsUseCase;
use crate::domain::logger::Logger;

pub struct ListTagsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListTagsUseCase for ListTagsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.debug("Listing tags");
        Ok(self.repository.get_tags().await?)
    }
}
