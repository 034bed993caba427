use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::membership::errors::MembershipError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MembershipError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            MembershipError::RecipeNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            MembershipError::AlreadyExists(_) | MembershipError::NotAMember(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            MembershipError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::new(name, &message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::membership::model::Relation;

    #[test]
    fn should_map_duplicate_to_bad_request_with_relation_code() {
        let (status, json) =
            MembershipError::AlreadyExists(Relation::Favorites).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "favorites.already_exists");
    }

    #[test]
    fn should_map_non_member_to_bad_request() {
        let (status, json) =
            MembershipError::NotAMember(Relation::ShoppingCart).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "shopping_cart.not_a_member");
    }

    #[test]
    fn should_map_missing_recipe_to_not_found() {
        let (status, json) = MembershipError::RecipeNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "recipe.not_found");
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let (status, _) =
            MembershipError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
