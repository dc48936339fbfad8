pub mod menu_groups;
pub mod menus;
pub mod order_tables;
pub mod orders;
pub mod products;
pub mod table_groups;
