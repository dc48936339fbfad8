use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Menu, MenuProduct};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MenuProductRequest {
    pub product_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuRequest {
    pub name: String,
    pub price: Option<i64>,
    pub menu_group_id: Uuid,
    pub menu_products: Vec<MenuProductRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuWithProducts {
    pub menu: Menu,
    pub menu_products: Vec<MenuProduct>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MenuList {
    #[schema(value_type = Vec<MenuWithProducts>)]
    pub items: Vec<MenuWithProducts>,
}
