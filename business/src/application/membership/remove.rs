use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::remove::{
    RemoveMembershipParams, RemoveMembershipUseCase,
};
use crate::domain::recipe::repository::RecipeRepository;

pub struct RemoveMembershipUseCaseImpl {
    pub memberships: Arc<dyn MembershipRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveMembershipUseCase for RemoveMembershipUseCaseImpl {
    async fn execute(&self, params: RemoveMembershipParams) -> Result<(), MembershipError> {
        let relation = self.memberships.relation();
        self.logger.info(&format!(
            "Removing recipe {} from {} of user {}",
            params.recipe_id, relation, params.user_id
        ));

        if !self.recipes.exists(params.recipe_id).await? {
            return Err(MembershipError::RecipeNotFound);
        }

        if !self
            .memberships
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            return Err(MembershipError::NotAMember(relation));
        }

        let removed = self
            .memberships
            .remove(&params.user_id, params.recipe_id)
            .await?;
        if removed == 0 {
            // Lost a race with another remove for the same pair.
            return Err(MembershipError::NotAMember(relation));
        }

        self.logger.info(&format!(
            "Recipe {} removed from {}",
            params.recipe_id, relation
        ));
        Ok(())
    }
}
