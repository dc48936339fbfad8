//! Per-entity data access.
//!
//! Every repository borrows a [`ConnectionTrait`](sea_orm::ConnectionTrait)
//! implementor, so the same code runs against the pooled connection for
//! reads and against a `DatabaseTransaction` inside a mutating operation.

pub mod menu_group_repository;
pub mod menu_repository;
pub mod order_repository;
pub mod order_table_repository;
pub mod product_repository;
pub mod table_group_repository;

pub use menu_group_repository::MenuGroupRepository;
pub use menu_repository::MenuRepository;
pub use order_repository::OrderRepository;
pub use order_table_repository::OrderTableRepository;
pub use product_repository::ProductRepository;
pub use table_group_repository::TableGroupRepository;
