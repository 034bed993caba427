use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::recipe::model::RecipeView;
use business::domain::recipe::value_objects::IngredientLine;

#[derive(Debug, Clone, Object)]
pub struct IngredientLineDto {
    /// Ingredient name, e.g. "flour" (at most 200 characters)
    pub name: String,
    /// Measurement unit, e.g. "g" (at most 200 characters)
    pub measurement_unit: String,
    /// Amount required (1..=10000)
    pub amount: u32,
}

impl From<IngredientLine> for IngredientLineDto {
    fn from(line: IngredientLine) -> Self {
        Self {
            name: line.ingredient_name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

impl From<IngredientLineDto> for IngredientLine {
    fn from(dto: IngredientLineDto) -> Self {
        Self {
            ingredient_name: dto.name,
            measurement_unit: dto.measurement_unit,
            amount: dto.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    /// Recipe name (cannot be empty, at most 200 characters)
    pub name: String,
    /// Preparation instructions
    pub text: String,
    /// Cooking time in minutes (1..=300)
    pub cooking_time: u16,
    /// Ingredient lines, at least one, no repeated name+unit
    pub ingredients: Vec<IngredientLineDto>,
    /// Tag slugs, at least one, no repeats, at most 200 characters each
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Recipe unique identifier
    pub id: String,
    /// Author user id
    pub author_id: String,
    pub name: String,
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientLineDto>,
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Whether the caller has this recipe in favorites
    pub is_favorited: bool,
    /// Whether the caller has this recipe in the shopping cart
    pub is_in_shopping_cart: bool,
}

impl From<RecipeView> for RecipeResponse {
    fn from(view: RecipeView) -> Self {
        let recipe = view.recipe;
        Self {
            id: recipe.id.to_string(),
            author_id: recipe.author_id.to_string(),
            name: recipe.name,
            text: recipe.text,
            cooking_time: recipe.cooking_time.minutes(),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            tags: recipe.tags,
            created_at: recipe.created_at,
            is_favorited: view.is_favorited,
            is_in_shopping_cart: view.is_in_shopping_cart,
        }
    }
}
