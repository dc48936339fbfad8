#![allow(dead_code)]

use kitchenpos::{
    db::{create_orm_conn, run_migrations},
    dto::{
        menu_groups::CreateMenuGroupRequest,
        menus::{CreateMenuRequest, MenuProductRequest},
        order_tables::CreateOrderTableRequest,
        orders::{ChangeOrderStatusRequest, CreateOrderRequest, OrderLineItemRequest},
        products::CreateProductRequest,
        table_groups::CreateTableGroupRequest,
    },
    models::{Menu, MenuGroup, Order, OrderStatus, OrderTable, Product, TableGroup},
    services::{
        menu_group_service, menu_service, order_service, order_table_service, product_service,
        table_group_service,
    },
    state::AppState,
};
use uuid::Uuid;

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn product(state: &AppState, name: &str, price: i64) -> anyhow::Result<Product> {
    let resp = product_service::create_product(
        state,
        CreateProductRequest {
            name: name.to_string(),
            price: Some(price),
        },
    )
    .await?;
    Ok(resp.data.expect("product"))
}

pub async fn menu_group(state: &AppState, name: &str) -> anyhow::Result<MenuGroup> {
    let resp = menu_group_service::create_menu_group(
        state,
        CreateMenuGroupRequest {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(resp.data.expect("menu group"))
}

pub fn menu_request(
    name: &str,
    price: Option<i64>,
    menu_group_id: Uuid,
    lines: &[(Uuid, i64)],
) -> CreateMenuRequest {
    CreateMenuRequest {
        name: name.to_string(),
        price,
        menu_group_id,
        menu_products: lines
            .iter()
            .map(|(product_id, quantity)| MenuProductRequest {
                product_id: *product_id,
                quantity: *quantity,
            })
            .collect(),
    }
}

/// A one-product menu priced at the product's price.
pub async fn menu(state: &AppState) -> anyhow::Result<Menu> {
    let group = menu_group(state, "Singles").await?;
    let chicken = product(state, "Fried chicken", 16000).await?;
    let resp = menu_service::create_menu(
        state,
        menu_request("Fried chicken", Some(16000), group.id, &[(chicken.id, 1)]),
    )
    .await?;
    Ok(resp.data.expect("menu").menu)
}

pub async fn table(state: &AppState, empty: bool, guests: i32) -> anyhow::Result<OrderTable> {
    let resp = order_table_service::create_order_table(
        state,
        CreateOrderTableRequest {
            number_of_guests: guests,
            empty,
        },
    )
    .await?;
    Ok(resp.data.expect("order table"))
}

pub async fn order(state: &AppState, table_id: Uuid, menu_id: Uuid) -> anyhow::Result<Order> {
    let resp = order_service::create_order(
        state,
        CreateOrderRequest {
            order_table_id: table_id,
            order_line_items: vec![OrderLineItemRequest {
                menu_id,
                quantity: 1,
            }],
        },
    )
    .await?;
    Ok(resp.data.expect("order").order)
}

pub async fn set_status(state: &AppState, order_id: Uuid, status: OrderStatus) -> anyhow::Result<Order> {
    let resp = order_service::change_order_status(
        state,
        order_id,
        ChangeOrderStatusRequest {
            order_status: status.to_string(),
        },
    )
    .await?;
    Ok(resp.data.expect("order").order)
}

pub async fn group(state: &AppState, ids: &[Uuid]) -> anyhow::Result<TableGroup> {
    let resp = table_group_service::create_table_group(
        state,
        CreateTableGroupRequest {
            order_table_ids: ids.to_vec(),
        },
    )
    .await?;
    Ok(resp.data.expect("table group").table_group)
}

pub async fn find_table(state: &AppState, id: Uuid) -> anyhow::Result<OrderTable> {
    let resp = order_table_service::list_order_tables(state).await?;
    let table = resp
        .data
        .expect("order tables")
        .items
        .into_iter()
        .find(|t| t.id == id)
        .expect("table present");
    Ok(table)
}
