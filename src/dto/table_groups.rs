use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{OrderTable, TableGroup};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTableGroupRequest {
    pub order_table_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TableGroupWithTables {
    pub table_group: TableGroup,
    pub order_tables: Vec<OrderTable>,
}
