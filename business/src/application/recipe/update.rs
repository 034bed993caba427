use std::sync::Arc;

use async_trait::async_trait;

use super::flags::MembershipFlags;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeChanges, RecipeView};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};

pub struct UpdateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub flags: MembershipFlags,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecipeUseCase for UpdateRecipeUseCaseImpl {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeView, RecipeError> {
        self.logger.info(&format!("Updating recipe: {}", params.id));

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
                "User {} tried to update recipe {} owned by {}",
                params.user_id, recipe.id, recipe.author_id
            ));
            return Err(RecipeError::Forbidden);
        }

        let updated = recipe.update(RecipeChanges {
            name: params.name,
            text: params.text,
            cooking_time: params.cooking_time,
            ingredients: params.ingredients,
            tags: params.tags,
        })?;

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Recipe updated: {}", updated.id));
        Ok(self.flags.view(Some(&params.user_id), updated).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn store(is_member: bool) -> Arc<dyn MembershipRepository> {
        let mut store = MockMembershipRepo::new();
        store
            .expect_exists()
            .returning(move |_, _| Ok(is_member));
        Arc::new(store)
    }

    fn flags(in_cart: bool, favorited: bool) -> MembershipFlags {
        MembershipFlags {
            shopping_cart: store(in_cart),
            favorites: store(favorited),
        }
    }

    fn stored(id: Uuid) -> Result<Recipe, RepositoryError> {
        Ok(Recipe::from_repository(
            id,
            UserId::new("author"),
            "Stew".to_string(),
            "Braise slowly.".to_string(),
            CookingTime::new(120).unwrap(),
            vec![IngredientLine::new("beef", "g", 800).unwrap()],
            vec!["dinner".to_string()],
            chrono::Utc::now(),
        ))
    }

    fn params(id: Uuid, user: &str) -> UpdateRecipeParams {
        UpdateRecipeParams {
            id,
            user_id: UserId::new(user),
            name: "Quick stew".to_string(),
            text: "Pressure cook.".to_string(),
            cooking_time: 45,
            ingredients: vec![
                IngredientLine::new("beef", "g", 600).unwrap(),
                IngredientLine::new("carrot", "pcs", 2).unwrap(),
            ],
            tags: vec!["dinner".to_string(), "quick".to_string()],
        }
    }

    #[tokio::test]
    async fn should_save_new_content_when_caller_is_author() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(stored);
        mock_repo
            .expect_save()
            .withf(move |recipe| {
                recipe.id == id && recipe.name == "Quick stew" && recipe.ingredients.len() == 2
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: flags(false, false),
            logger: mock_logger(),
        };

        let view = use_case.execute(params(id, "author")).await.unwrap();

        assert_eq!(view.recipe.cooking_time.minutes(), 45);
        assert_eq!(view.recipe.author_id, UserId::new("author"));
    }

    #[tokio::test]
    async fn should_forbid_when_caller_is_not_author() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(stored);
        mock_repo.expect_save().never();

        let use_case = UpdateRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: flags(false, false),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), "intruder")).await;

        assert!(matches!(result.unwrap_err(), RecipeError::Forbidden));
    }

    #[tokio::test]
    async fn should_reject_invalid_content_without_saving() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(stored);
        mock_repo.expect_save().never();

        let use_case = UpdateRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: flags(false, false),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateRecipeParams {
                cooking_time: 301,
                ..params(Uuid::new_v4(), "author")
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::InvalidCookingTime
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: flags(false, false),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), "author")).await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }

    #[tokio::test]
    async fn should_report_authors_own_flags_after_update() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_get_by_id().returning(stored);
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            flags: flags(true, false),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(params(Uuid::new_v4(), "author"))
            .await
            .unwrap();

        assert!(view.is_in_shopping_cart);
        assert!(!view.is_favorited);
    }
}
