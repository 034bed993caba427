use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Parses a recipe path id, answering `recipe.invalid_id` on malformed input.
pub fn parse_recipe_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::new("ValidationError", "recipe.invalid_id"))
}
