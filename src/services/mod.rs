pub mod menu_group_service;
pub mod menu_service;
pub mod order_service;
pub mod order_table_service;
pub mod product_service;
pub mod table_group_service;
