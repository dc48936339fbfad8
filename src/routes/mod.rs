use axum::{
    Json, Router,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod doc;
pub mod health;
pub mod menu_groups;
pub mod menus;
pub mod order_tables;
pub mod orders;
pub mod products;
pub mod table_groups;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/menu-groups", menu_groups::router())
        .nest("/menus", menus::router())
        .nest("/order-tables", order_tables::router())
        .nest("/table-groups", table_groups::router())
        .nest("/orders", orders::router())
}

/// Full application router: health, `/api`, docs and the 404 fallback.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

/// `201 Created` with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(location: Option<String>, body: ApiResponse<T>) -> Response {
    match location {
        Some(location) => (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(body),
        )
            .into_response(),
        None => (StatusCode::CREATED, Json(body)).into_response(),
    }
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
