use axum::{Json, Router, extract::State, response::Response, routing::get};

use crate::{
    dto::products::{CreateProductRequest, ProductList},
    error::AppResult,
    extract::ApiJson,
    models::Product,
    response::ApiResponse,
    routes::created,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products).post(create_product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Missing or negative price"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> AppResult<Response> {
    let resp = product_service::create_product(&state, payload).await?;
    let location = resp.data.as_ref().map(|p| format!("/api/products/{}", p.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}
