use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{delete, post},
};
use uuid::Uuid;

use crate::{
    dto::table_groups::{CreateTableGroupRequest, TableGroupWithTables},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    response::ApiResponse,
    routes::created,
    services::table_group_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_table_group))
        .route("/{id}", delete(ungroup))
}

#[utoipa::path(
    post,
    path = "/api/table-groups",
    request_body = CreateTableGroupRequest,
    responses(
        (status = 201, description = "Tables grouped", body = ApiResponse<TableGroupWithTables>),
        (status = 400, description = "Fewer than two tables"),
        (status = 404, description = "A member table does not exist"),
        (status = 409, description = "A member table is occupied or already grouped"),
    ),
    tag = "Table Groups"
)]
pub async fn create_table_group(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTableGroupRequest>,
) -> AppResult<Response> {
    let resp = table_group_service::create_table_group(&state, payload).await?;
    let location = resp
        .data
        .as_ref()
        .map(|g| format!("/api/table-groups/{}", g.table_group.id));
    Ok(created(location, resp))
}

#[utoipa::path(
    delete,
    path = "/api/table-groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Table group ID")
    ),
    responses(
        (status = 204, description = "Tables ungrouped"),
        (status = 400, description = "A member table has a cooking or meal order"),
        (status = 404, description = "Table group not found"),
    ),
    tag = "Table Groups"
)]
pub async fn ungroup(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    table_group_service::ungroup(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
