use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::orders::{ChangeOrderStatusRequest, CreateOrderRequest, OrderList, OrderWithItems},
    entity::{
        order_line_items::{ActiveModel as LineItemActive, Model as LineItemModel},
        orders::{ActiveModel as OrderActive, Model as OrderModel},
    },
    error::{AppError, AppResult},
    models::{Order, OrderLineItem, OrderStatus},
    repository::{MenuRepository, OrderRepository, OrderTableRepository},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Places an order against an occupied table. New orders start `COOKING`.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    if payload.order_line_items.is_empty() {
        tracing::debug!(
            order_table_id = %payload.order_table_id,
            "order without line items rejected"
        );
        return Err(AppError::BadRequest(
            "at least one order line item is required".into(),
        ));
    }
    if payload.order_line_items.iter().any(|line| line.quantity < 0) {
        tracing::debug!(
            order_table_id = %payload.order_table_id,
            "negative line item quantity rejected"
        );
        return Err(AppError::BadRequest(
            "order line item quantity cannot be negative".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    let mut seen = HashSet::new();
    let menu_ids: Vec<Uuid> = payload
        .order_line_items
        .iter()
        .map(|line| line.menu_id)
        .filter(|id| seen.insert(*id))
        .collect();
    let existing: HashSet<Uuid> = MenuRepository::new(&txn)
        .find_existing_ids(&menu_ids)
        .await?
        .into_iter()
        .collect();
    if let Some(missing) = menu_ids.iter().find(|id| !existing.contains(*id)) {
        tracing::debug!(menu_id = %missing, "order references unknown menu");
        return Err(AppError::NotFound(format!("menu {missing} not found")));
    }

    let table = OrderTableRepository::new(&txn)
        .find_by_id(payload.order_table_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("order table {} not found", payload.order_table_id))
        })?;
    if table.empty {
        tracing::debug!(order_table_id = %table.id, "order against empty table rejected");
        return Err(AppError::BadRequest(
            "cannot order against an empty table".into(),
        ));
    }

    let orders = OrderRepository::new(&txn);
    let order = orders
        .insert(OrderActive {
            id: Set(Uuid::new_v4()),
            order_table_id: Set(table.id),
            order_status: Set(OrderStatus::Cooking.as_str().to_string()),
            ordered_time: Set(Utc::now().into()),
        })
        .await?;

    let mut items = Vec::with_capacity(payload.order_line_items.len());
    for (seq, line) in payload.order_line_items.iter().enumerate() {
        let saved = orders
            .insert_line_item(LineItemActive {
                id: Set(Uuid::new_v4()),
                order_id: Set(order.id),
                menu_id: Set(line.menu_id),
                quantity: Set(line.quantity),
                seq: Set(seq as i32),
            })
            .await?;
        items.push(order_line_item_from_entity(saved));
    }

    txn.commit().await?;

    tracing::info!(
        order_id = %order.id,
        order_table_id = %order.order_table_id,
        line_items = items.len(),
        "order created"
    );

    Ok(ApiResponse::success(
        "Order created",
        OrderWithItems {
            order: order_from_entity(order)?,
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let orders = OrderRepository::new(&state.orm);
    let models = orders.find_all().await?;
    let ids: Vec<Uuid> = models.iter().map(|o| o.id).collect();
    let mut line_items = orders.find_line_items_by_order_ids(&ids).await?;

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        let order_items = line_items
            .remove(&model.id)
            .unwrap_or_default()
            .into_iter()
            .map(order_line_item_from_entity)
            .collect();
        items.push(OrderWithItems {
            order: order_from_entity(model)?,
            items: order_items,
        });
    }

    let meta = Meta::all(items.len());
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

/// Overwrites the status of a non-completed order.
///
/// Any non-terminal status may move to any other status, backwards
/// included; only `COMPLETION` is final.
pub async fn change_order_status(
    state: &AppState,
    id: Uuid,
    payload: ChangeOrderStatusRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let next = payload
        .order_status
        .parse::<OrderStatus>()
        .map_err(|err| {
            tracing::debug!(order_id = %id, error = %err, "unknown order status rejected");
            AppError::BadRequest(err.to_string())
        })?;

    let txn = state.orm.begin().await?;
    let orders = OrderRepository::new(&txn);

    let order = orders
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;

    let current = parse_status(&order.order_status)?;
    if current.is_terminal() {
        tracing::debug!(order_id = %id, "status change on completed order rejected");
        return Err(AppError::Conflict(
            "cannot change status of a completed order".into(),
        ));
    }

    let mut active: OrderActive = order.into();
    active.order_status = Set(next.as_str().to_string());
    let order = orders.update(active).await?;

    let items = orders
        .find_line_items_by_order_ids(&[order.id])
        .await?
        .remove(&order.id)
        .unwrap_or_default()
        .into_iter()
        .map(order_line_item_from_entity)
        .collect();

    txn.commit().await?;

    tracing::info!(order_id = %order.id, from = %current, to = %next, "order status changed");

    Ok(ApiResponse::success(
        "Order updated",
        OrderWithItems {
            order: order_from_entity(order)?,
            items,
        },
        Some(Meta::empty()),
    ))
}

fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    raw.parse::<OrderStatus>()
        .map_err(|err| AppError::Internal(anyhow::Error::new(err).context("stored order status")))
}

fn order_from_entity(model: OrderModel) -> AppResult<Order> {
    Ok(Order {
        id: model.id,
        order_table_id: model.order_table_id,
        order_status: parse_status(&model.order_status)?,
        ordered_time: model.ordered_time.with_timezone(&Utc),
    })
}

fn order_line_item_from_entity(model: LineItemModel) -> OrderLineItem {
    OrderLineItem {
        id: model.id,
        order_id: model.order_id,
        menu_id: model.menu_id,
        quantity: model.quantity,
    }
}
