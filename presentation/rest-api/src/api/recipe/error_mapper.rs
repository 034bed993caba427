use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RecipeError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            RecipeError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
            RecipeError::NameEmpty
            | RecipeError::NameTooLong
            | RecipeError::TextEmpty
            | RecipeError::InvalidCookingTime
            | RecipeError::NoIngredients
            | RecipeError::IngredientNameEmpty
            | RecipeError::IngredientNameTooLong
            | RecipeError::MeasurementUnitEmpty
            | RecipeError::MeasurementUnitTooLong
            | RecipeError::InvalidAmount
            | RecipeError::DuplicatedIngredient
            | RecipeError::NoTags
            | RecipeError::TagEmpty
            | RecipeError::TagTooLong
            | RecipeError::DuplicatedTag => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (status, ErrorResponse::new(name, &message))
    }
}
