use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity::{
        order_line_items::{
            ActiveModel as LineItemActive, Column as LineItemCol, Entity as OrderLineItems,
            Model as LineItemModel,
        },
        orders::{ActiveModel, Column, Entity as Orders, Model},
    },
    models::OrderStatus,
};

/// Orders and their line items.
pub struct OrderRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn update(&self, active: ActiveModel) -> Result<Model, DbErr> {
        active.update(self.conn).await
    }

    pub async fn insert_line_item(&self, active: LineItemActive) -> Result<LineItemModel, DbErr> {
        active.insert(self.conn).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbErr> {
        Orders::find_by_id(id).one(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        Orders::find()
            .order_by_asc(Column::OrderedTime)
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_line_items_by_order_ids(
        &self,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<LineItemModel>>, DbErr> {
        let mut grouped: HashMap<Uuid, Vec<LineItemModel>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(grouped);
        }
        let rows = OrderLineItems::find()
            .filter(LineItemCol::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(LineItemCol::OrderId)
            .order_by_asc(LineItemCol::Seq)
            .all(self.conn)
            .await?;
        for row in rows {
            grouped.entry(row.order_id).or_default().push(row);
        }
        Ok(grouped)
    }

    /// True when any of `order_table_ids` has an order still cooking or at
    /// the meal stage.
    pub async fn has_active_order(&self, order_table_ids: &[Uuid]) -> Result<bool, DbErr> {
        if order_table_ids.is_empty() {
            return Ok(false);
        }
        let active_statuses = OrderStatus::ACTIVE.iter().map(|s| s.as_str());
        let count = Orders::find()
            .filter(
                Condition::all()
                    .add(Column::OrderTableId.is_in(order_table_ids.iter().copied()))
                    .add(Column::OrderStatus.is_in(active_statuses)),
            )
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
