use axum::{
    Json, Router,
    extract::State,
    response::Response,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::order_tables::{
        ChangeEmptyRequest, ChangeNumberOfGuestsRequest, CreateOrderTableRequest, OrderTableList,
    },
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::OrderTable,
    response::ApiResponse,
    routes::created,
    services::order_table_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order_tables).post(create_order_table))
        .route("/{id}/empty", put(change_empty))
        .route("/{id}/number-of-guests", put(change_number_of_guests))
}

#[utoipa::path(
    post,
    path = "/api/order-tables",
    request_body = CreateOrderTableRequest,
    responses(
        (status = 201, description = "Order table created", body = ApiResponse<OrderTable>),
    ),
    tag = "Order Tables"
)]
pub async fn create_order_table(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderTableRequest>,
) -> AppResult<Response> {
    let resp = order_table_service::create_order_table(&state, payload).await?;
    let location = resp
        .data
        .as_ref()
        .map(|t| format!("/api/order-tables/{}", t.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    get,
    path = "/api/order-tables",
    responses(
        (status = 200, description = "List order tables", body = ApiResponse<OrderTableList>)
    ),
    tag = "Order Tables"
)]
pub async fn list_order_tables(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrderTableList>>> {
    let resp = order_table_service::list_order_tables(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/order-tables/{id}/empty",
    params(
        ("id" = Uuid, Path, description = "Order table ID")
    ),
    request_body = ChangeEmptyRequest,
    responses(
        (status = 200, description = "Empty status changed", body = ApiResponse<OrderTable>),
        (status = 404, description = "Order table not found"),
        (status = 409, description = "Table is grouped or has a cooking/meal order"),
    ),
    tag = "Order Tables"
)]
pub async fn change_empty(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ChangeEmptyRequest>,
) -> AppResult<Json<ApiResponse<OrderTable>>> {
    let resp = order_table_service::change_empty(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/order-tables/{id}/number-of-guests",
    params(
        ("id" = Uuid, Path, description = "Order table ID")
    ),
    request_body = ChangeNumberOfGuestsRequest,
    responses(
        (status = 200, description = "Guest count changed", body = ApiResponse<OrderTable>),
        (status = 400, description = "Negative guest count"),
        (status = 404, description = "Order table not found"),
        (status = 409, description = "Table is empty"),
    ),
    tag = "Order Tables"
)]
pub async fn change_number_of_guests(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ChangeNumberOfGuestsRequest>,
) -> AppResult<Json<ApiResponse<OrderTable>>> {
    let resp = order_table_service::change_number_of_guests(&state, id, payload).await?;
    Ok(Json(resp))
}
