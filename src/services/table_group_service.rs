use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::table_groups::{CreateTableGroupRequest, TableGroupWithTables},
    entity::{
        order_tables::ActiveModel as OrderTableActive,
        table_groups::{ActiveModel as TableGroupActive, Model as TableGroupModel},
    },
    error::{AppError, AppResult},
    models::TableGroup,
    repository::{OrderRepository, OrderTableRepository, TableGroupRepository},
    response::{ApiResponse, Meta},
    services::order_table_service::order_table_from_entity,
    state::AppState,
};

/// Groups two or more empty, ungrouped tables and occupies them as a unit.
///
/// All checks run before the first write, and the writes share one
/// transaction, so a rejected request leaves every table untouched.
pub async fn create_table_group(
    state: &AppState,
    payload: CreateTableGroupRequest,
) -> AppResult<ApiResponse<TableGroupWithTables>> {
    let mut seen = HashSet::new();
    let ids: Vec<Uuid> = payload
        .order_table_ids
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect();
    if ids.len() < 2 {
        return Err(AppError::BadRequest(
            "at least two distinct tables are required".into(),
        ));
    }

    let txn = state.orm.begin().await?;
    let tables = OrderTableRepository::new(&txn);

    let members = tables.find_all_by_ids(&ids).await?;
    if members.len() != ids.len() {
        let found: HashSet<Uuid> = members.iter().map(|t| t.id).collect();
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !found.contains(*id))
            .map(Uuid::to_string)
            .collect();
        return Err(AppError::NotFound(format!(
            "order table not found: {}",
            missing.join(", ")
        )));
    }

    if let Some(busy) = members
        .iter()
        .find(|t| !t.empty || t.table_group_id.is_some())
    {
        tracing::debug!(order_table_id = %busy.id, "table cannot join a group");
        return Err(AppError::Conflict(format!(
            "cannot group non-empty or already-grouped table {}",
            busy.id
        )));
    }

    let group = TableGroupRepository::new(&txn)
        .insert(TableGroupActive {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now().into()),
        })
        .await?;

    let mut order_tables = Vec::with_capacity(members.len());
    for member in members {
        let mut active: OrderTableActive = member.into();
        active.table_group_id = Set(Some(group.id));
        active.empty = Set(false);
        let updated = tables.update(active).await?;
        order_tables.push(order_table_from_entity(updated));
    }

    txn.commit().await?;

    tracing::info!(
        table_group_id = %group.id,
        tables = order_tables.len(),
        "table group created"
    );

    Ok(ApiResponse::success(
        "Table group created",
        TableGroupWithTables {
            table_group: table_group_from_entity(group),
            order_tables,
        },
        Some(Meta::empty()),
    ))
}

/// Releases every member table from the group. Blocked while any member
/// still has a cooking or meal order.
pub async fn ungroup(state: &AppState, id: Uuid) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    TableGroupRepository::new(&txn)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("table group {id} not found")))?;

    let tables = OrderTableRepository::new(&txn);
    let members = tables.find_all_by_table_group_id(id).await?;
    let member_ids: Vec<Uuid> = members.iter().map(|t| t.id).collect();

    if OrderRepository::new(&txn)
        .has_active_order(&member_ids)
        .await?
    {
        tracing::debug!(table_group_id = %id, "ungroup blocked by active order");
        return Err(AppError::BadRequest(
            "cannot ungroup while a member table has a cooking or meal order".into(),
        ));
    }

    for member in members {
        let mut active: OrderTableActive = member.into();
        active.table_group_id = Set(None);
        tables.update(active).await?;
    }

    txn.commit().await?;

    tracing::info!(table_group_id = %id, tables = member_ids.len(), "table group ungrouped");
    Ok(())
}

fn table_group_from_entity(model: TableGroupModel) -> TableGroup {
    TableGroup {
        id: model.id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
