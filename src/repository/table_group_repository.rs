use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entity::table_groups::{ActiveModel, Entity as TableGroups, Model};

pub struct TableGroupRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TableGroupRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbErr> {
        TableGroups::find_by_id(id).one(self.conn).await
    }
}
