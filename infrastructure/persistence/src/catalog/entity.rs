use sqlx::FromRow;

use business::domain::catalog::model::Ingredient;

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl From<IngredientEntity> for Ingredient {
    fn from(entity: IngredientEntity) -> Self {
        Ingredient {
            id: entity.id,
            name: entity.name,
            measurement_unit: entity.measurement_unit,
        }
    }
}
