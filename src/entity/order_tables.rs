use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_tables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub table_group_id: Option<Uuid>,
    pub number_of_guests: i32,
    pub empty: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::table_groups::Entity",
        from = "Column::TableGroupId",
        to = "super::table_groups::Column::Id"
    )]
    TableGroups,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::table_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableGroups.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
