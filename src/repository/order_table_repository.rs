use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entity::order_tables::{ActiveModel, Column, Entity as OrderTables, Model};

pub struct OrderTableRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderTableRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn update(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.update(self.conn).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbErr> {
        OrderTables::find_by_id(id).one(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        OrderTables::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_all_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        OrderTables::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_all_by_table_group_id(&self, table_group_id: Uuid) -> Result<Vec<Model>, DbErr> {
        OrderTables::find()
            .filter(Column::TableGroupId.eq(table_group_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }
}
