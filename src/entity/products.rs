use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_products::Entity")]
    MenuProducts,
}

impl Related<super::menu_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
