use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "table_groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_tables::Entity")]
    OrderTables,
}

impl Related<super::order_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
