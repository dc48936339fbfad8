use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entity::{
    menu_products::{
        ActiveModel as MenuProductActive, Column as MenuProductCol, Entity as MenuProducts,
        Model as MenuProductModel,
    },
    menus::{ActiveModel, Column, Entity as Menus, Model},
};

/// Menus and the menu products they own.
pub struct MenuRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn insert_menu_product(
        &self,
        active: MenuProductActive,
    ) -> Result<MenuProductModel, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        Menus::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    /// Menu products of the given menus, grouped by menu id, each group in
    /// insertion order.
    pub async fn find_menu_products_by_menu_ids(
        &self,
        menu_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<MenuProductModel>>, DbErr> {
        let mut grouped: HashMap<Uuid, Vec<MenuProductModel>> = HashMap::new();
        if menu_ids.is_empty() {
            return Ok(grouped);
        }
        let rows = MenuProducts::find()
            .filter(MenuProductCol::MenuId.is_in(menu_ids.iter().copied()))
            .order_by_asc(MenuProductCol::MenuId)
            .order_by_asc(MenuProductCol::Seq)
            .all(self.conn)
            .await?;
        for row in rows {
            grouped.entry(row.menu_id).or_default().push(row);
        }
        Ok(grouped)
    }

    /// Ids among `ids` that refer to an existing menu.
    pub async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let menus = Menus::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(self.conn)
            .await?;
        Ok(menus.into_iter().map(|m| m.id).collect())
    }
}
