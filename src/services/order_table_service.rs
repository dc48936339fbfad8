use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::order_tables::{
        ChangeEmptyRequest, ChangeNumberOfGuestsRequest, CreateOrderTableRequest, OrderTableList,
    },
    entity::order_tables::{ActiveModel, Model as OrderTableModel},
    error::{AppError, AppResult},
    models::OrderTable,
    repository::{OrderRepository, OrderTableRepository},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_order_table(
    state: &AppState,
    payload: CreateOrderTableRequest,
) -> AppResult<ApiResponse<OrderTable>> {
    let txn = state.orm.begin().await?;
    let table = OrderTableRepository::new(&txn)
        .insert(ActiveModel {
            id: Set(Uuid::new_v4()),
            table_group_id: Set(None),
            number_of_guests: Set(payload.number_of_guests),
            empty: Set(payload.empty),
            created_at: Set(Utc::now().into()),
        })
        .await?;
    txn.commit().await?;

    tracing::info!(order_table_id = %table.id, empty = table.empty, "order table created");

    Ok(ApiResponse::success(
        "Order table created",
        order_table_from_entity(table),
        Some(Meta::empty()),
    ))
}

pub async fn list_order_tables(state: &AppState) -> AppResult<ApiResponse<OrderTableList>> {
    let items: Vec<OrderTable> = OrderTableRepository::new(&state.orm)
        .find_all()
        .await?
        .into_iter()
        .map(order_table_from_entity)
        .collect();

    let meta = Meta::all(items.len());
    Ok(ApiResponse::success("Order tables", OrderTableList { items }, Some(meta)))
}

pub async fn change_empty(
    state: &AppState,
    id: Uuid,
    payload: ChangeEmptyRequest,
) -> AppResult<ApiResponse<OrderTable>> {
    let txn = state.orm.begin().await?;
    let tables = OrderTableRepository::new(&txn);

    let table = tables
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order table {id} not found")))?;

    if table.table_group_id.is_some() {
        tracing::debug!(order_table_id = %id, "empty change on grouped table rejected");
        return Err(AppError::Conflict(
            "grouped tables cannot change empty status directly".into(),
        ));
    }

    if OrderRepository::new(&txn).has_active_order(&[id]).await? {
        tracing::debug!(order_table_id = %id, "empty change blocked by active order");
        return Err(AppError::Conflict(
            "a table with a cooking or meal order cannot change empty status".into(),
        ));
    }

    let mut active: ActiveModel = table.into();
    active.empty = Set(payload.empty);
    let table = tables.update(active).await?;
    txn.commit().await?;

    tracing::info!(order_table_id = %table.id, empty = table.empty, "order table empty status changed");

    Ok(ApiResponse::success(
        "Order table updated",
        order_table_from_entity(table),
        Some(Meta::empty()),
    ))
}

pub async fn change_number_of_guests(
    state: &AppState,
    id: Uuid,
    payload: ChangeNumberOfGuestsRequest,
) -> AppResult<ApiResponse<OrderTable>> {
    if payload.number_of_guests < 0 {
        tracing::debug!(
            order_table_id = %id,
            number_of_guests = payload.number_of_guests,
            "negative guest count rejected"
        );
        return Err(AppError::BadRequest(
            "number of guests cannot be negative".into(),
        ));
    }

    let txn = state.orm.begin().await?;
    let tables = OrderTableRepository::new(&txn);

    let table = tables
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order table {id} not found")))?;

    if table.empty {
        tracing::debug!(order_table_id = %id, "guest count on empty table rejected");
        return Err(AppError::Conflict(
            "cannot set guest count on an empty table".into(),
        ));
    }

    let mut active: ActiveModel = table.into();
    active.number_of_guests = Set(payload.number_of_guests);
    let table = tables.update(active).await?;
    txn.commit().await?;

    tracing::info!(
        order_table_id = %table.id,
        number_of_guests = table.number_of_guests,
        "order table guest count changed"
    );

    Ok(ApiResponse::success(
        "Order table updated",
        order_table_from_entity(table),
        Some(Meta::empty()),
    ))
}

pub(crate) fn order_table_from_entity(model: OrderTableModel) -> OrderTable {
    OrderTable {
        id: model.id,
        table_group_id: model.table_group_id,
        number_of_guests: model.number_of_guests,
        empty: model.empty,
    }
}
