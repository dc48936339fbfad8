use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderTable;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderTableRequest {
    #[serde(default)]
    pub number_of_guests: i32,
    pub empty: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeEmptyRequest {
    pub empty: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeNumberOfGuestsRequest {
    pub number_of_guests: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderTableList {
    #[schema(value_type = Vec<OrderTable>)]
    pub items: Vec<OrderTable>,
}
