use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::membership::model::{Membership, Relation};
use business::domain::membership::repository::MembershipRepository;
use business::domain::shared::value_objects::UserId;

use crate::errors::to_repository_error;

/// One table per relation, each with `UNIQUE (user_id, recipe_id)`.
fn table_for(relation: Relation) -> &'static str {
    match relation {
        Relation::ShoppingCart => "shopping_cart",
        Relation::Favorites => "favorites",
    }
}

pub struct MembershipRepositoryPostgres {
    pool: PgPool,
    relation: Relation,
    table: &'static str,
}

impl MembershipRepositoryPostgres {
    pub fn new(pool: PgPool, relation: Relation) -> Self {
        Self {
            pool,
            relation,
            table: table_for(relation),
        }
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryPostgres {
    fn relation(&self) -> Relation {
        self.relation
    }

    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE user_id = $1 AND recipe_id = $2)",
            self.table
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(user_id.as_str())
            .bind(recipe_id)
            .fetch_one(&self.pool)
            .await
            .map_err(to_repository_error)
    }

    async fn add(&self, membership: &Membership) -> Result<(), RepositoryError> {
        let query = format!(
            "INSERT INTO {} (user_id, recipe_id, created_at) VALUES ($1, $2, $3)",
            self.table
        );
        sqlx::query(&query)
            .bind(membership.user_id.as_str())
            .bind(membership.recipe_id)
            .bind(membership.created_at)
            .execute(&self.pool)
            .await
            .map_err(to_repository_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<u64, RepositoryError> {
        let query = format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            self.table
        );
        let result = sqlx::query(&query)
            .bind(user_id.as_str())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(to_repository_error)?;

        Ok(result.rows_affected())
    }

    async fn get_recipe_ids(&self, user_id: &UserId) -> Result<Vec<Uuid>, RepositoryError> {
        let query = format!(
            "SELECT recipe_id FROM {} WHERE user_id = $1 ORDER BY created_at",
            self.table
        );
        sqlx::query_scalar::<_, Uuid>(&query)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(to_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_each_relation_in_its_own_table() {
        assert_eq!(table_for(Relation::ShoppingCart), "shopping_cart");
        assert_eq!(table_for(Relation::Favorites), "favorites");
    }
}
