use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entity::products::{ActiveModel, Column, Entity as Products, Model};

pub struct ProductRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        Products::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_all_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Products::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(self.conn)
            .await
    }
}
