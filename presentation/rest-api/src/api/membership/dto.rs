use poem_openapi::Object;

use business::domain::membership::model::MembershipCreated;

/// Short recipe card returned after adding to the cart or favorites.
#[derive(Debug, Clone, Object)]
pub struct MembershipResponse {
    pub id: String,
    pub name: String,
    /// Cooking time in minutes
    pub cooking_time: u16,
}

impl From<MembershipCreated> for MembershipResponse {
    fn from(created: MembershipCreated) -> Self {
        Self {
            id: created.recipe.id.to_string(),
            name: created.recipe.name,
            cooking_time: created.recipe.cooking_time.minutes(),
        }
    }
}
