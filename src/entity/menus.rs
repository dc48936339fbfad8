use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub menu_group_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_groups::Entity",
        from = "Column::MenuGroupId",
        to = "super::menu_groups::Column::Id"
    )]
    MenuGroups,
    #[sea_orm(has_many = "super::menu_products::Entity")]
    MenuProducts,
    #[sea_orm(has_many = "super::order_line_items::Entity")]
    OrderLineItems,
}

impl Related<super::menu_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuGroups.def()
    }
}

impl Related<super::menu_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuProducts.def()
    }
}

impl Related<super::order_line_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLineItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
