use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::MembershipCreated;
use crate::domain::shared::value_objects::UserId;

pub struct AddMembershipParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait AddMembershipUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddMembershipParams,
    ) -> Result<MembershipCreated, MembershipError>;
}
