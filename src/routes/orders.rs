use axum::{
    Json, Router,
    extract::State,
    response::Response,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::orders::{ChangeOrderStatusRequest, CreateOrderRequest, OrderList, OrderWithItems},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    response::ApiResponse,
    routes::created,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}/order-status", put(change_order_status))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderWithItems>,
            headers(("location" = String, description = "URI of the new order"))),
        (status = 400, description = "No line items or the table is empty"),
        (status = 404, description = "Unknown menu or order table"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderRequest>,
) -> AppResult<Response> {
    let resp = order_service::create_order(&state, payload).await?;
    let location = resp
        .data
        .as_ref()
        .map(|o| format!("/api/orders/{}", o.order.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "List orders with their line items", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/order-status",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = ChangeOrderStatusRequest,
    responses(
        (status = 200, description = "Order status changed", body = ApiResponse<OrderWithItems>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already completed"),
    ),
    tag = "Orders"
)]
pub async fn change_order_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ChangeOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::change_order_status(&state, id, payload).await?;
    Ok(Json(resp))
}
