use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let name = match &self {
            ShoppingListError::MisconfiguredStore(_) | ShoppingListError::Repository(_) => {
                "InternalError"
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(name, &message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::membership::model::Relation;

    #[test]
    fn should_map_misconfigured_store_to_internal_error() {
        let (status, json) =
            ShoppingListError::MisconfiguredStore(Relation::Favorites).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "shopping_list.misconfigured_store");
    }

    #[test]
    fn should_hide_repository_details_when_persistence_fails() {
        let (status, json) =
            ShoppingListError::Repository(RepositoryError::NotFound).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
