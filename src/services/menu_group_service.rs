use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::menu_groups::{CreateMenuGroupRequest, MenuGroupList},
    entity::menu_groups::{ActiveModel, Model as MenuGroupModel},
    error::AppResult,
    models::MenuGroup,
    repository::MenuGroupRepository,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_menu_group(
    state: &AppState,
    payload: CreateMenuGroupRequest,
) -> AppResult<ApiResponse<MenuGroup>> {
    let txn = state.orm.begin().await?;
    let group = MenuGroupRepository::new(&txn)
        .insert(ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            created_at: Set(Utc::now().into()),
        })
        .await?;
    txn.commit().await?;

    tracing::info!(menu_group_id = %group.id, "menu group created");

    Ok(ApiResponse::success(
        "Menu group created",
        menu_group_from_entity(group),
        Some(Meta::empty()),
    ))
}

pub async fn list_menu_groups(state: &AppState) -> AppResult<ApiResponse<MenuGroupList>> {
    let items: Vec<MenuGroup> = MenuGroupRepository::new(&state.orm)
        .find_all()
        .await?
        .into_iter()
        .map(menu_group_from_entity)
        .collect();

    let meta = Meta::all(items.len());
    Ok(ApiResponse::success("Menu groups", MenuGroupList { items }, Some(meta)))
}

fn menu_group_from_entity(model: MenuGroupModel) -> MenuGroup {
    MenuGroup {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
