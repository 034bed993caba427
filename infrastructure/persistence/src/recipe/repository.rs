use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::repository::RecipeRepository;
use business::domain::recipe::value_objects::IngredientLine;

use super::entity::{IngredientLineEntity, RecipeEntity};
use crate::errors::to_repository_error;

const SELECT_LINES: &str = r#"SELECT i.name, i.measurement_unit, ri.amount
    FROM recipe_ingredients ri
    JOIN ingredients i ON i.id = ri.ingredient_id
    WHERE ri.recipe_id = $1
    ORDER BY i.name, i.measurement_unit"#;

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_lines(&self, id: Uuid) -> Result<Vec<IngredientLineEntity>, RepositoryError> {
        sqlx::query_as::<_, IngredientLineEntity>(SELECT_LINES)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(to_repository_error)
    }

    async fn fetch_tags(&self, id: Uuid) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT slug FROM recipe_tags WHERE recipe_id = $1 ORDER BY slug",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(to_repository_error)
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(
            "SELECT id, author_id, name, text, cooking_time, created_at FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(to_repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        let lines = self.fetch_lines(id).await?;
        let tags = self.fetch_tags(id).await?;

        entity.into_domain(lines, tags)
    }

    async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeEntity>(
            "SELECT id, author_id, name, text, cooking_time, created_at FROM recipes ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(to_repository_error)?;

        let mut recipes = Vec::with_capacity(entities.len());
        for entity in entities {
            let lines = self.fetch_lines(entity.id).await?;
            let tags = self.fetch_tags(entity.id).await?;
            recipes.push(entity.into_domain(lines, tags)?);
        }

        Ok(recipes)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(to_repository_error)
    }

    async fn get_ingredient_lines(
        &self,
        id: Uuid,
    ) -> Result<Vec<IngredientLine>, RepositoryError> {
        if !self.exists(id).await? {
            return Err(RepositoryError::NotFound);
        }

        self.fetch_lines(id)
            .await?
            .into_iter()
            .map(IngredientLineEntity::into_domain)
            .collect()
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(to_repository_error)?;

        sqlx::query(
            r#"INSERT INTO recipes (id, author_id, name, text, cooking_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                text = EXCLUDED.text,
                cooking_time = EXCLUDED.cooking_time"#,
        )
        .bind(recipe.id)
        .bind(recipe.author_id.as_str())
        .bind(&recipe.name)
        .bind(&recipe.text)
        .bind(recipe.cooking_time.minutes() as i16)
        .bind(recipe.created_at)
        .execute(&mut *tx)
        .await
        .map_err(to_repository_error)?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(to_repository_error)?;
        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(to_repository_error)?;

        for line in &recipe.ingredients {
            // The no-op update makes RETURNING yield the id of an existing row too.
            let ingredient_id = sqlx::query_scalar::<_, i64>(
                r#"INSERT INTO ingredients (name, measurement_unit)
                VALUES ($1, $2)
                ON CONFLICT (name, measurement_unit) DO UPDATE SET name = EXCLUDED.name
                RETURNING id"#,
            )
            .bind(&line.ingredient_name)
            .bind(&line.measurement_unit)
            .fetch_one(&mut *tx)
            .await
            .map_err(to_repository_error)?;

            sqlx::query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
            )
            .bind(recipe.id)
            .bind(ingredient_id)
            .bind(line.amount as i32)
            .execute(&mut *tx)
            .await
            .map_err(to_repository_error)?;
        }

        for slug in &recipe.tags {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, slug) VALUES ($1, $2)")
                .bind(recipe.id)
                .bind(slug)
                .execute(&mut *tx)
                .await
                .map_err(to_repository_error)?;
        }

        tx.commit().await.map_err(to_repository_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(to_repository_error)?;

        Ok(())
    }
}
