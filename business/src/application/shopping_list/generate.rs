use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::model::Relation;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::report;
use crate::domain::shopping_list::use_cases::generate::{
    GenerateShoppingListParams, GenerateShoppingListUseCase,
};

pub struct GenerateShoppingListUseCaseImpl {
    /// Must be the shopping-cart store.
    pub cart: Arc<dyn MembershipRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateShoppingListUseCase for GenerateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateShoppingListParams,
    ) -> Result<String, ShoppingListError> {
        self.logger.info(&format!(
            "Generating shopping list for user {}",
            params.user_id
        ));

        let relation = self.cart.relation();
        if relation != Relation::ShoppingCart {
            self.logger.error(&format!(
                "Shopping list wired to the {} store instead of the shopping cart",
                relation
            ));
            return Err(ShoppingListError::MisconfiguredStore(relation));
        }

        let recipe_ids = self.cart.get_recipe_ids(&params.user_id).await?;

        let mut lines = Vec::new();
        for recipe_id in &recipe_ids {
            match self.recipes.get_ingredient_lines(*recipe_id).await {
                Ok(recipe_lines) => lines.extend(recipe_lines),
                Err(RepositoryError::NotFound) => {
                    self.logger.warn(&format!(
                        "Recipe {} left the cart while building the list, skipping",
                        recipe_id
                    ));
                }
                Err(other) => return Err(other.into()),
            }
        }

        let list = ShoppingList::aggregate(lines);
        self.logger.info(&format!(
            "Shopping list built from {} recipes: {} rows",
            recipe_ids.len(),
            list.lines().len()
        ));

        Ok(report::render(&list))
    }
}
