use std::sync::Arc;

use poem::http::HeaderMap;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::recipe::model::RecipeView;
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_all::{GetAllRecipesParams, GetAllRecipesUseCase};
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_recipe_id};
use crate::api::recipe::dto::{CreateRecipeRequest, RecipeResponse};
use crate::api::security::{JwtBearer, optional_user};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    get_all_use_case: Arc<dyn GetAllRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    update_use_case: Arc<dyn UpdateRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        get_all_use_case: Arc<dyn GetAllRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        update_use_case: Arc<dyn UpdateRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn viewer(headers: &HeaderMap) -> Option<UserId> {
    optional_user(headers).map(UserId::new)
}

/// Recipe management API
#[OpenApi]
impl RecipeApi {
    /// Create a recipe
    ///
    /// The authenticated caller becomes the author.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create(&self, auth: JwtBearer, body: Json<CreateRecipeRequest>) -> CreateRecipeResponse {
        let body = body.0;
        let params = CreateRecipeParams {
            user_id: UserId::new(auth.0),
            name: body.name,
            text: body.text,
            cooking_time: body.cooking_time,
            ingredients: body.ingredients.into_iter().map(Into::into).collect(),
            tags: body.tags,
        };

        match self.create_use_case.execute(params).await {
            // A new recipe is in nobody's cart or favorites yet.
            Ok(recipe) => CreateRecipeResponse::Created(Json(RecipeView::anonymous(recipe).into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// List recipes
    ///
    /// Newest first. Authentication is optional. With a valid bearer token the
    /// favorite and cart flags describe the caller, otherwise they are false.
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    async fn list(&self, headers: &HeaderMap) -> ListRecipesResponse {
        let params = GetAllRecipesParams {
            viewer: viewer(headers),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(views) => {
                ListRecipesResponse::Ok(Json(views.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListRecipesResponse::InternalError(json)
            }
        }
    }

    /// Get a recipe by id
    ///
    /// Authentication is optional, as for the list.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_by_id(&self, id: Path<String>, headers: &HeaderMap) -> GetRecipeResponse {
        let id = match parse_recipe_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetRecipeResponse::BadRequest(json),
        };
        let params = GetRecipeByIdParams {
            id,
            viewer: viewer(headers),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(view) => GetRecipeResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeResponse::NotFound(json),
                    _ => GetRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a recipe
    ///
    /// Only the author may update a recipe. The body replaces the whole content,
    /// ingredients and tags included, and is validated as on creation.
    #[oai(path = "/recipes/:id", method = "patch", tag = "ApiTags::Recipes")]
    async fn update(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<CreateRecipeRequest>,
    ) -> UpdateRecipeResponse {
        let id = match parse_recipe_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateRecipeResponse::BadRequest(json),
        };
        let body = body.0;
        let params = UpdateRecipeParams {
            id,
            user_id: UserId::new(auth.0),
            name: body.name,
            text: body.text,
            cooking_time: body.cooking_time,
            ingredients: body.ingredients.into_iter().map(Into::into).collect(),
            tags: body.tags,
        };

        match self.update_use_case.execute(params).await {
            Ok(view) => UpdateRecipeResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateRecipeResponse::BadRequest(json),
                    403 => UpdateRecipeResponse::Forbidden(json),
                    404 => UpdateRecipeResponse::NotFound(json),
                    _ => UpdateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a recipe
    ///
    /// Only the author may delete a recipe. Cart and favorite entries go with it.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteRecipeResponse {
        let id = match parse_recipe_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteRecipeResponse::BadRequest(json),
        };
        let params = DeleteRecipeParams {
            id,
            user_id: UserId::new(auth.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteRecipeResponse::Forbidden(json),
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
