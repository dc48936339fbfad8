use axum::{Json, Router, extract::State, response::Response, routing::get};

use crate::{
    dto::menus::{CreateMenuRequest, MenuList, MenuWithProducts},
    error::AppResult,
    extract::ApiJson,
    response::ApiResponse,
    routes::created,
    services::menu_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_menus).post(create_menu))
}

#[utoipa::path(
    post,
    path = "/api/menus",
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created", body = ApiResponse<MenuWithProducts>),
        (status = 400, description = "Invalid price, unknown menu group or product, or overpriced menu"),
    ),
    tag = "Menus"
)]
pub async fn create_menu(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMenuRequest>,
) -> AppResult<Response> {
    let resp = menu_service::create_menu(&state, payload).await?;
    let location = resp
        .data
        .as_ref()
        .map(|m| format!("/api/menus/{}", m.menu.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    get,
    path = "/api/menus",
    responses(
        (status = 200, description = "List menus with their products", body = ApiResponse<MenuList>)
    ),
    tag = "Menus"
)]
pub async fn list_menus(State(state): State<AppState>) -> AppResult<Json<ApiResponse<MenuList>>> {
    let resp = menu_service::list_menus(&state).await?;
    Ok(Json(resp))
}
