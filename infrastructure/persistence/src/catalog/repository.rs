use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::Ingredient;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::IngredientEntity;
use crate::errors::to_repository_error;

/// Escapes LIKE wildcards so the user's text matches literally, then anchors it as a prefix.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_tags(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT slug FROM recipe_tags ORDER BY slug")
            .fetch_all(&self.pool)
            .await
            .map_err(to_repository_error)
    }

    async fn search_ingredients<'a>(
        &self,
        name_prefix: Option<&'a str>,
    ) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = match name_prefix {
            Some(prefix) => {
                sqlx::query_as::<_, IngredientEntity>(
                    r#"SELECT id, name, measurement_unit FROM ingredients
                    WHERE name ILIKE $1 ESCAPE '\'
                    ORDER BY name, measurement_unit"#,
                )
                .bind(like_prefix(prefix))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, IngredientEntity>(
                    "SELECT id, name, measurement_unit FROM ingredients ORDER BY name, measurement_unit",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(to_repository_error)?;

        Ok(entities.into_iter().map(Ingredient::from).collect())
    }
}
