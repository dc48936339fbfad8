use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MenuGroup;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuGroupRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MenuGroupList {
    #[schema(value_type = Vec<MenuGroup>)]
    pub items: Vec<MenuGroup>,
}
