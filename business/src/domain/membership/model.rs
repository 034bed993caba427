use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::recipe::model::RecipeSummary;
use crate::domain::shared::value_objects::UserId;

/// Per-user recipe collections guarded by the same at-most-once rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    ShoppingCart,
    Favorites,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::ShoppingCart => write!(f, "shopping_cart"),
            Relation::Favorites => write!(f, "favorites"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub relation: Relation,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(user_id: UserId, recipe_id: Uuid, relation: Relation) -> Self {
        Self {
            user_id,
            recipe_id,
            relation,
            created_at: Utc::now(),
        }
    }
}

/// Result of a successful add: the stored row plus what the caller shows.
#[derive(Debug, Clone)]
pub struct MembershipCreated {
    pub membership: Membership,
    pub recipe: RecipeSummary,
}
