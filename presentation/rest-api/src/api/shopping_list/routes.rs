use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::use_cases::generate::{
    GenerateShoppingListParams, GenerateShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

const FILENAME: &str = "shopping_list.txt";

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", filename)
}

pub struct ShoppingListApi {
    generate_use_case: Arc<dyn GenerateShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(generate_use_case: Arc<dyn GenerateShoppingListUseCase>) -> Self {
        Self { generate_use_case }
    }
}

#[OpenApi]
impl ShoppingListApi {
    /// Download the shopping list
    ///
    /// Sums the ingredients of every recipe in the caller's cart, one row per
    /// ingredient and unit, as a plain-text attachment.
    #[oai(
        path = "/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn download(&self, auth: JwtBearer) -> DownloadShoppingListResponse {
        let params = GenerateShoppingListParams {
            user_id: UserId::new(auth.0),
        };

        match self.generate_use_case.execute(params).await {
            Ok(report) => DownloadShoppingListResponse::Ok(PlainText(report), attachment(FILENAME)),
            Err(err) => {
                let (_, json) = err.into_error_response();
                DownloadShoppingListResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingListResponse {
    #[oai(status = 200)]
    Ok(
        PlainText<String>,
        #[oai(header = "Content-Disposition")] String,
    ),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
