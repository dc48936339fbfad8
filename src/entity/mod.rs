pub mod menu_groups;
pub mod menu_products;
pub mod menus;
pub mod order_line_items;
pub mod order_tables;
pub mod orders;
pub mod products;
pub mod table_groups;

pub use menu_groups::Entity as MenuGroups;
pub use menu_products::Entity as MenuProducts;
pub use menus::Entity as Menus;
pub use order_line_items::Entity as OrderLineItems;
pub use order_tables::Entity as OrderTables;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use table_groups::Entity as TableGroups;
