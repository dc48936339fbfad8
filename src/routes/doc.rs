use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        menu_groups::{CreateMenuGroupRequest, MenuGroupList},
        menus::{CreateMenuRequest, MenuList, MenuProductRequest, MenuWithProducts},
        order_tables::{
            ChangeEmptyRequest, ChangeNumberOfGuestsRequest, CreateOrderTableRequest,
            OrderTableList,
        },
        orders::{
            ChangeOrderStatusRequest, CreateOrderRequest, OrderLineItemRequest, OrderList,
            OrderWithItems,
        },
        products::{CreateProductRequest, ProductList},
        table_groups::{CreateTableGroupRequest, TableGroupWithTables},
    },
    models::{
        Menu, MenuGroup, MenuProduct, Order, OrderLineItem, OrderStatus, OrderTable, Product,
        TableGroup,
    },
    response::{ApiResponse, Meta},
    routes::{health, menu_groups, menus, order_tables, orders, products, table_groups},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "kitchenpos", description = "Restaurant point-of-sale backend"),
    paths(
        health::health_check,
        products::create_product,
        products::list_products,
        menu_groups::create_menu_group,
        menu_groups::list_menu_groups,
        menus::create_menu,
        menus::list_menus,
        order_tables::create_order_table,
        order_tables::list_order_tables,
        order_tables::change_empty,
        order_tables::change_number_of_guests,
        table_groups::create_table_group,
        table_groups::ungroup,
        orders::create_order,
        orders::list_orders,
        orders::change_order_status
    ),
    components(
        schemas(
            Product,
            MenuGroup,
            Menu,
            MenuProduct,
            OrderTable,
            TableGroup,
            Order,
            OrderLineItem,
            OrderStatus,
            CreateProductRequest,
            CreateMenuGroupRequest,
            CreateMenuRequest,
            MenuProductRequest,
            CreateOrderTableRequest,
            ChangeEmptyRequest,
            ChangeNumberOfGuestsRequest,
            CreateTableGroupRequest,
            CreateOrderRequest,
            OrderLineItemRequest,
            ChangeOrderStatusRequest,
            ProductList,
            MenuGroupList,
            MenuList,
            MenuWithProducts,
            OrderTableList,
            TableGroupWithTables,
            OrderList,
            OrderWithItems,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<MenuWithProducts>,
            ApiResponse<OrderTable>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog"),
        (name = "Menu Groups", description = "Menu group catalog"),
        (name = "Menus", description = "Menu catalog"),
        (name = "Order Tables", description = "Order table registry"),
        (name = "Table Groups", description = "Table grouping"),
        (name = "Orders", description = "Order management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
