use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuGroup {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Menu {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub menu_group_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuProduct {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderTable {
    pub id: Uuid,
    pub table_group_id: Option<Uuid>,
    pub number_of_guests: i32,
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableGroup {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of an order. `Completion` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table busy.
    pub const ACTIVE: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COOKING" => Ok(OrderStatus::Cooking),
            "MEAL" => Ok(OrderStatus::Meal),
            "COMPLETION" => Ok(OrderStatus::Completion),
            _ => Err(UnknownOrderStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_table_id: Uuid,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_id: Uuid,
    pub quantity: i64,
}
