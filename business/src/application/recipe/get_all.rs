use std::sync::Arc;

use async_trait::async_trait;

use super::flags::MembershipFlags;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeView;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_all::{GetAllRecipesParams, GetAllRecipesUseCase};

pub struct GetAllRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub flags: MembershipFlags,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRecipesUseCase for GetAllRecipesUseCaseImpl {
    async fn execute(&self, params: GetAllRecipesParams) -> Result<Vec<RecipeView>, RecipeError> {
        self.logger.debug("Fetching all recipes");

        let recipes = self.repository.get_all().await?;
        let views = self.flags.view_all(params.viewer.as_ref(), recipes).await?;

        self.logger
            .debug(&format!("Found {} recipes", views.len()));
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::membership::model::{Membership, Relation};
    use crate::domain::membership::repository::MembershipRepository;
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
        pub MembershipRepo {}

        #[async_trait]
        impl MembershipRepository for MembershipRepo {
            fn relation(&self) -> Relation;
            async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
            async fn add(&self, membership: &Membership) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<u64, RepositoryError>;
            async fn get_recipe_ids(&self, user_id: &UserId) -> Result<Vec<Uuid>, RepositoryError>;
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

    fn recipe(name: &str) -> Recipe {
        Recipe::from_repository(
            Uuid::new_v4(),
            UserId::new("author"),
            name.to_string(),
            "Cook it.".to_string(),
            CookingTime::new(25).unwrap(),
            vec![IngredientLine::new("salt", "g", 5).unwrap()],
            vec!["dinner".to_string()],
            chrono::Utc::now(),
        )
    }

    fn ids_store(ids: Vec<Uuid>) -> Arc<dyn MembershipRepository> {
        let mut store = MockMembershipRepo::new();
        store
            .expect_get_recipe_ids()
            .returning(move |_| Ok(ids.clone()));
        Arc::new(store)
    }

    #[tokio::test]
    async fn should_list_recipes_in_repository_order() {
        let recipes = vec![recipe("Newest"), recipe("Oldest")];
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_all()
            .times(1)
            .returning(move || Ok(recipes.clone()));

        let use_case = GetAllRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: MembershipFlags {
                shopping_cart: ids_store(vec![]),
                favorites: ids_store(vec![]),
            },
            logger: mock_logger(),
        };

        let views = use_case
            .execute(GetAllRecipesParams { viewer: None })
            .await
            .unwrap();

        let names: Vec<&str> = views.iter().map(|v| v.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Oldest"]);
        assert!(views.iter().all(|v| !v.is_favorited && !v.is_in_shopping_cart));
    }

    #[tokio::test]
    async fn should_flag_caller_memberships_in_list() {
        let carted = recipe("Carted");
        let carted_id = carted.id;
        let recipes = vec![carted, recipe("Plain")];
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(recipes.clone()));

        let use_case = GetAllRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: MembershipFlags {
                shopping_cart: ids_store(vec![carted_id]),
                favorites: ids_store(vec![]),
            },
            logger: mock_logger(),
        };

        let views = use_case
            .execute(GetAllRecipesParams {
                viewer: Some(UserId::new("reader")),
            })
            .await
            .unwrap();

        assert!(views[0].is_in_shopping_cart);
        assert!(!views[1].is_in_shopping_cart);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllRecipesUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: MembershipFlags {
                shopping_cart: ids_store(vec![]),
                favorites: ids_store(vec![]),
            },
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllRecipesParams { viewer: None }).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
