use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipeProps, Recipe};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError> {
        self.logger.info(&format!(
            "Creating recipe '{}' for author {}",
            params.name, params.user_id
        ));

        let recipe = Recipe::new(NewRecipeProps {
            author_id: params.user_id,
            name: params.name,
            text: params.text,
            cooking_time: params.cooking_time,
            ingredients: params.ingredients,
            tags: params.tags,
        })?;

        self.repository.save(&recipe).await?;

        self.logger
            .info(&format!("Recipe created with id: {}", recipe.id));
        Ok(recipe)
    }
}
