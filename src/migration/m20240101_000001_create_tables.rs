use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{
    MenuGroups, MenuProducts, Menus, OrderLineItems, OrderTables, Orders, Products, TableGroups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}

async fn drop_entity<E>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Referenced tables first so foreign keys resolve on postgres.
        create(manager, &schema, Products).await?;
        create(manager, &schema, MenuGroups).await?;
        create(manager, &schema, Menus).await?;
        create(manager, &schema, MenuProducts).await?;
        create(manager, &schema, TableGroups).await?;
        create(manager, &schema, OrderTables).await?;
        create(manager, &schema, Orders).await?;
        create(manager, &schema, OrderLineItems).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_order_table_id")
                    .table(Orders)
                    .col(crate::entity::orders::Column::OrderTableId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_tables_table_group_id")
                    .table(OrderTables)
                    .col(crate::entity::order_tables::Column::TableGroupId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity(manager, OrderLineItems).await?;
        drop_entity(manager, Orders).await?;
        drop_entity(manager, OrderTables).await?;
        drop_entity(manager, TableGroups).await?;
        drop_entity(manager, MenuProducts).await?;
        drop_entity(manager, Menus).await?;
        drop_entity(manager, MenuGroups).await?;
        drop_entity(manager, Products).await
    }
}
