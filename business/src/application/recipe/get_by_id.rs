use std::sync::Arc;

use async_trait::async_trait;

use super::flags::MembershipFlags;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeView;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub flags: MembershipFlags,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeView, RecipeError> {
        self.logger.debug(&format!("Fetching recipe: {}", params.id));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        Ok(self.flags.view(params.viewer.as_ref(), recipe).await?)
    }
}
