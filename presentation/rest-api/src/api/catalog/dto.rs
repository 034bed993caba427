use poem_openapi::Object;

use business::domain::catalog::model::Ingredient;

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}
