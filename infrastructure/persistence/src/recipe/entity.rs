use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::value_objects::{CookingTime, IngredientLine};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub author_id: String,
    pub name: String,
    pub text: String,
    pub cooking_time: i16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct IngredientLineEntity {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl IngredientLineEntity {
    pub fn into_domain(self) -> Result<IngredientLine, RepositoryError> {
        let amount = u32::try_from(self.amount).map_err(|_| {
            tracing::error!(
                amount = self.amount,
                ingredient = %self.name,
                "stored ingredient amount is negative"
            );
            RepositoryError::Persistence
        })?;

        Ok(IngredientLine {
            ingredient_name: self.name,
            measurement_unit: self.measurement_unit,
            amount,
        })
    }
}

impl RecipeEntity {
    pub fn into_domain(
        self,
        ingredients: Vec<IngredientLineEntity>,
        tags: Vec<String>,
    ) -> Result<Recipe, RepositoryError> {
        let minutes = u16::try_from(self.cooking_time).map_err(|_| {
            tracing::error!(
                recipe_id = %self.id,
                cooking_time = self.cooking_time,
                "stored cooking time is negative"
            );
            RepositoryError::Persistence
        })?;
        let ingredients = ingredients
            .into_iter()
            .map(IngredientLineEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe::from_repository(
            self.id,
            UserId::new(self.author_id),
            self.name,
            self.text,
            CookingTime::from_repository(minutes),
            ingredients,
            tags,
            self.created_at,
        ))
    }
}
