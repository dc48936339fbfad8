use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_table_id: Uuid,
    pub order_status: String,
    pub ordered_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_tables::Entity",
        from = "Column::OrderTableId",
        to = "super::order_tables::Column::Id"
    )]
    OrderTables,
    #[sea_orm(has_many = "super::order_line_items::Entity")]
    OrderLineItems,
}

impl Related<super::order_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTables.def()
    }
}

impl Related<super::order_line_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLineItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
