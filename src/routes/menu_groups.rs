use axum::{Json, Router, extract::State, response::Response, routing::get};

use crate::{
    dto::menu_groups::{CreateMenuGroupRequest, MenuGroupList},
    error::AppResult,
    extract::ApiJson,
    models::MenuGroup,
    response::ApiResponse,
    routes::created,
    services::menu_group_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_menu_groups).post(create_menu_group))
}

#[utoipa::path(
    post,
    path = "/api/menu-groups",
    request_body = CreateMenuGroupRequest,
    responses(
        (status = 201, description = "Menu group created", body = ApiResponse<MenuGroup>),
    ),
    tag = "Menu Groups"
)]
pub async fn create_menu_group(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMenuGroupRequest>,
) -> AppResult<Response> {
    let resp = menu_group_service::create_menu_group(&state, payload).await?;
    let location = resp
        .data
        .as_ref()
        .map(|g| format!("/api/menu-groups/{}", g.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    get,
    path = "/api/menu-groups",
    responses(
        (status = 200, description = "List menu groups", body = ApiResponse<MenuGroupList>)
    ),
    tag = "Menu Groups"
)]
pub async fn list_menu_groups(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MenuGroupList>>> {
    let resp = menu_group_service::list_menu_groups(&state).await?;
    Ok(Json(resp))
}
