use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::{Membership, MembershipCreated};
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::add::{AddMembershipParams, AddMembershipUseCase};
use crate::domain::recipe::repository::RecipeRepository;

/// Adds a recipe to one relation. The relation is whatever `memberships` stores,
/// so the same type serves both the shopping cart and favorites.
pub struct AddMembershipUseCaseImpl {
    pub memberships: Arc<dyn MembershipRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddMembershipUseCase for AddMembershipUseCaseImpl {
    async fn execute(
        &self,
        params: AddMembershipParams,
    ) -> Result<MembershipCreated, MembershipError> {
        let relation = self.memberships.relation();
        self.logger.info(&format!(
            "Adding recipe {} to {} of user {}",
            params.recipe_id, relation, params.user_id
        ));

        let recipe = self
            .recipes
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::RecipeNotFound,
                other => MembershipError::Repository(other),
            })?;

        if self
            .memberships
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            return Err(MembershipError::AlreadyExists(relation));
        }

        let membership = Membership::new(params.user_id, params.recipe_id, relation);

        // A concurrent add can slip past the check above; the unique constraint catches it.
        self.memberships
            .add(&membership)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => MembershipError::AlreadyExists(relation),
                other => MembershipError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Recipe {} added to {}",
            membership.recipe_id, relation
        ));
        Ok(MembershipCreated {
            membership,
            recipe: recipe.summary(),
        })
    }
}
