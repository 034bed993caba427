use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        self.logger.info(&format!("Deleting recipe: {}", params.id));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if !recipe.is_authored_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} tried to delete recipe {} owned by {}",
                params.user_id, recipe.id, recipe.author_id
            ));
            return Err(RecipeError::Forbidden);
        }

        // Cart and favorite rows go with it through ON DELETE CASCADE.
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Recipe deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::Recipe;
    use crate::domain::recipe::value_objects::{CookingTime, IngredientLine};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError>;
            async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
            async fn get_ingredient_lines(&self, id: Uuid) -> Result<Vec<IngredientLine>, RepositoryError>;
            async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn recipe_by(
        author: &'static str,
    ) -> impl Fn(Uuid) -> Result<Recipe, RepositoryError> + Send + 'static {
        move |id| {
            Ok(Recipe::from_repository(
                id,
                UserId::new(author),
                "Salad".to_string(),
                "Chop everything.".to_string(),
                CookingTime::new(5).unwrap(),
                vec![IngredientLine::new("tomato", "pcs", 2).unwrap()],
                vec!["vegan".to_string()],
                chrono::Utc::now(),
            ))
        }
    }

    #[tokio::test]
    async fn should_delete_when_caller_is_author() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(recipe_by("author"));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("author"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_when_caller_is_not_author() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(recipe_by("author"));
        mock_repo.expect_delete().never();

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("someone-else"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::Forbidden));
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: Uuid::new_v4(),
                user_id: UserId::new("author"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }
}
