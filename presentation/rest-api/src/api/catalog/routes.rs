use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::use_cases::list_tags::ListTagsUseCase;
use business::domain::catalog::use_cases::search_ingredients::{
    SearchIngredientsParams, SearchIngredientsUseCase,
};

use crate::api::catalog::dto::IngredientResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    list_tags_use_case: Arc<dyn ListTagsUseCase>,
    search_ingredients_use_case: Arc<dyn SearchIngredientsUseCase>,
}

impl CatalogApi {
    pub fn new(
        list_tags_use_case: Arc<dyn ListTagsUseCase>,
        search_ingredients_use_case: Arc<dyn SearchIngredientsUseCase>,
    ) -> Self {
        Self {
            list_tags_use_case,
            search_ingredients_use_case,
        }
    }
}

/// Read-only tag and ingredient catalogs
#[OpenApi]
impl CatalogApi {
    /// List tags
    ///
    /// Every tag slug used by at least one recipe, ascending.
    #[oai(path = "/tags", method = "get", tag = "ApiTags::Catalog")]
    async fn list_tags(&self) -> ListTagsResponse {
        match self.list_tags_use_case.execute().await {
            Ok(tags) => ListTagsResponse::Ok(Json(tags)),
            Err(err) => ListTagsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Search ingredients
    ///
    /// `name` matches the start of the ingredient name, ignoring case.
    /// Without it the whole catalog is listed.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Catalog")]
    async fn search_ingredients(&self, name: Query<Option<String>>) -> SearchIngredientsResponse {
        let params = SearchIngredientsParams { name: name.0 };

        match self.search_ingredients_use_case.execute(params).await {
            Ok(found) => {
                SearchIngredientsResponse::Ok(Json(found.into_iter().map(Into::into).collect()))
            }
            Err(err) => SearchIngredientsResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListTagsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
