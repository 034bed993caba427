use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::recipe::model::{Recipe, RecipeView};
use crate::domain::shared::value_objects::UserId;

/// Marks recipes with the caller's cart and favorites membership.
pub struct MembershipFlags {
    pub shopping_cart: Arc<dyn MembershipRepository>,
    pub favorites: Arc<dyn MembershipRepository>,
}

impl MembershipFlags {
    pub async fn view(
        &self,
        viewer: Option<&UserId>,
        recipe: Recipe,
    ) -> Result<RecipeView, RepositoryError> {
        let Some(user_id) = viewer else {
            return Ok(RecipeView::anonymous(recipe));
        };

        let is_in_shopping_cart = self.shopping_cart.exists(user_id, recipe.id).await?;
        let is_favorited = self.favorites.exists(user_id, recipe.id).await?;

        Ok(RecipeView {
            recipe,
            is_favorited,
            is_in_shopping_cart,
        })
    }

    /// One lookup per store, whatever the number of recipes.
    pub async fn view_all(
        &self,
        viewer: Option<&UserId>,
        recipes: Vec<Recipe>,
    ) -> Result<Vec<RecipeView>, RepositoryError> {
        let Some(user_id) = viewer else {
            return Ok(recipes.into_iter().map(RecipeView::anonymous).collect());
        };

        let cart: HashSet<Uuid> = self
            .shopping_cart
            .get_recipe_ids(user_id)
            .await?
            .into_iter()
            .collect();
        let favorites: HashSet<Uuid> = self
            .favorites
            .get_recipe_ids(user_id)
            .await?
            .into_iter()
            .collect();

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeView {
                is_favorited: favorites.contains(&recipe.id),
                is_in_shopping_cart: cart.contains(&recipe.id),
                recipe,
            })
            .collect())
    }
}
