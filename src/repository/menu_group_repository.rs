use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::entity::menu_groups::{ActiveModel, Column, Entity as MenuGroups, Model};

pub struct MenuGroupRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MenuGroupRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        MenuGroups::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn exists_by_id(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = MenuGroups::find()
            .filter(Column::Id.eq(id))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
