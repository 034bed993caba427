use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveMembershipParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait RemoveMembershipUseCase: Send + Sync {
    async fn execute(&self, params: RemoveMembershipParams) -> Result<(), MembershipError>;
}
