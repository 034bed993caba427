use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Membership, Relation};

/// Store for one relation (cart or favorites).
///
/// Implementations must back `(user_id, recipe_id)` with a uniqueness
/// constraint and report a violation as `RepositoryError::Duplicated`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    fn relation(&self) -> Relation;
    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
    async fn add(&self, membership: &Membership) -> Result<(), RepositoryError>;
    /// Returns the number of rows removed.
    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<u64, RepositoryError>;
    async fn get_recipe_ids(&self, user_id: &UserId) -> Result<Vec<Uuid>, RepositoryError>;
}
