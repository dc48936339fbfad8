use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Order, OrderLineItem};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderLineItemRequest {
    pub menu_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub order_table_id: Uuid,
    pub order_line_items: Vec<OrderLineItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeOrderStatusRequest {
    /// One of `COOKING`, `MEAL`, `COMPLETION`.
    pub order_status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderLineItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<OrderWithItems>)]
    pub items: Vec<OrderWithItems>,
}
