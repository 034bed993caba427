use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Distinct tag slugs in use, ascending.
    async fn get_tags(&self) -> Result<Vec<String>, RepositoryError>;
    /// Ingredients whose name starts with `name_prefix`, ignoring case.
    /// `None` lists the whole catalog. Ordered by name, then unit.
    async fn search_ingredients<'a>(
        &self,
        name_prefix: Option<&'a str>,
    ) -> Result<Vec<Ingredient>, RepositoryError>;
}
