use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::membership::use_cases::add::{AddMembershipParams, AddMembershipUseCase};
use business::domain::membership::use_cases::remove::{
    RemoveMembershipParams, RemoveMembershipUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_recipe_id};
use crate::api::membership::dto::MembershipResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

/// Add/remove pair bound to one relation store.
pub struct MembershipHandlers {
    pub add: Arc<dyn AddMembershipUseCase>,
    pub remove: Arc<dyn RemoveMembershipUseCase>,
}

impl MembershipHandlers {
    async fn add(&self, user_id: String, raw_id: &str) -> AddMembershipResponse {
        let recipe_id = match parse_recipe_id(raw_id) {
            Ok(id) => id,
            Err(json) => return AddMembershipResponse::BadRequest(json),
        };
        let params = AddMembershipParams {
            user_id: UserId::new(user_id),
            recipe_id,
        };

        match self.add.execute(params).await {
            Ok(created) => AddMembershipResponse::Created(Json(created.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddMembershipResponse::BadRequest(json),
                    404 => AddMembershipResponse::NotFound(json),
                    _ => AddMembershipResponse::InternalError(json),
                }
            }
        }
    }

    async fn remove(&self, user_id: String, raw_id: &str) -> RemoveMembershipResponse {
        let recipe_id = match parse_recipe_id(raw_id) {
            Ok(id) => id,
            Err(json) => return RemoveMembershipResponse::BadRequest(json),
        };
        let params = RemoveMembershipParams {
            user_id: UserId::new(user_id),
            recipe_id,
        };

        match self.remove.execute(params).await {
            Ok(()) => RemoveMembershipResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveMembershipResponse::BadRequest(json),
                    404 => RemoveMembershipResponse::NotFound(json),
                    _ => RemoveMembershipResponse::InternalError(json),
                }
            }
        }
    }
}

pub struct MembershipApi {
    shopping_cart: MembershipHandlers,
    favorites: MembershipHandlers,
}

impl MembershipApi {
    pub fn new(shopping_cart: MembershipHandlers, favorites: MembershipHandlers) -> Self {
        Self {
            shopping_cart,
            favorites,
        }
    }
}

/// Shopping cart and favorites API
///
/// A recipe can be in a user's cart or favorites at most once.
#[OpenApi]
impl MembershipApi {
    /// Add a recipe to the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "post",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn add_to_shopping_cart(&self, auth: JwtBearer, id: Path<String>) -> AddMembershipResponse {
        self.shopping_cart.add(auth.0, &id.0).await
    }

    /// Remove a recipe from the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "delete",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn remove_from_shopping_cart(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> RemoveMembershipResponse {
        self.shopping_cart.remove(auth.0, &id.0).await
    }

    /// Add a recipe to favorites
    #[oai(path = "/recipes/:id/favorite", method = "post", tag = "ApiTags::Favorites")]
    async fn add_to_favorites(&self, auth: JwtBearer, id: Path<String>) -> AddMembershipResponse {
        self.favorites.add(auth.0, &id.0).await
    }

    /// Remove a recipe from favorites
    #[oai(path = "/recipes/:id/favorite", method = "delete", tag = "ApiTags::Favorites")]
    async fn remove_from_favorites(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> RemoveMembershipResponse {
        self.favorites.remove(auth.0, &id.0).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddMembershipResponse {
    #[oai(status = 201)]
    Created(Json<MembershipResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveMembershipResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
