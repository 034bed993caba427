#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.name_too_long")]
    NameTooLong,
    #[error("recipe.text_empty")]
    TextEmpty,
    #[error("recipe.invalid_cooking_time")]
    InvalidCookingTime,
    #[error("recipe.no_ingredients")]
    NoIngredients,
    #[error("recipe.ingredient_name_empty")]
    IngredientNameEmpty,
    #[error("recipe.ingredient_name_too_long")]
    IngredientNameTooLong,
    #[error("recipe.measurement_unit_empty")]
    MeasurementUnitEmpty,
    #[error("recipe.measurement_unit_too_long")]
    MeasurementUnitTooLong,
    #[error("recipe.invalid_amount")]
    InvalidAmount,
    #[error("recipe.duplicated_ingredient")]
    DuplicatedIngredient,
    #[error("recipe.no_tags")]
    NoTags,
    #[error("recipe.tag_empty")]
    TagEmpty,
    #[error("recipe.tag_too_long")]
    TagTooLong,
    #[error("recipe.duplicated_tag")]
    DuplicatedTag,
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
