use kitchenpos::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        menu_groups::CreateMenuGroupRequest,
        menus::{CreateMenuRequest, MenuProductRequest},
        order_tables::CreateOrderTableRequest,
        products::CreateProductRequest,
    },
    services::{menu_group_service, menu_service, order_table_service, product_service},
    state::AppState,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    let products = seed_products(&state).await?;
    let menu_group_id = seed_menu_group(&state, "Two-chicken combos").await?;
    seed_menus(&state, menu_group_id, &products).await?;
    seed_tables(&state, 8).await?;

    println!("Seed completed. Menu group ID: {menu_group_id}");
    Ok(())
}

async fn seed_products(state: &AppState) -> anyhow::Result<Vec<(String, Uuid)>> {
    let catalog = [
        ("Fried chicken", 16000),
        ("Spicy chicken", 16000),
        ("Soy garlic chicken", 17000),
        ("Boneless chicken", 17500),
    ];

    let mut ids = Vec::with_capacity(catalog.len());
    for (name, price) in catalog {
        let resp = product_service::create_product(
            state,
            CreateProductRequest {
                name: name.to_string(),
                price: Some(price),
            },
        )
        .await?;
        if let Some(product) = resp.data {
            ids.push((product.name, product.id));
        }
    }

    println!("Seeded {} products", ids.len());
    Ok(ids)
}

async fn seed_menu_group(state: &AppState, name: &str) -> anyhow::Result<Uuid> {
    let resp = menu_group_service::create_menu_group(
        state,
        CreateMenuGroupRequest {
            name: name.to_string(),
        },
    )
    .await?;
    let group = resp
        .data
        .ok_or_else(|| anyhow::anyhow!("menu group was not returned"))?;
    Ok(group.id)
}

async fn seed_menus(
    state: &AppState,
    menu_group_id: Uuid,
    products: &[(String, Uuid)],
) -> anyhow::Result<()> {
    for pair in products.windows(2) {
        let [(first_name, first), (second_name, second)] = pair else {
            continue;
        };
        menu_service::create_menu(
            state,
            CreateMenuRequest {
                name: format!("{first_name} + {second_name}"),
                price: Some(30000),
                menu_group_id,
                menu_products: vec![
                    MenuProductRequest {
                        product_id: *first,
                        quantity: 1,
                    },
                    MenuProductRequest {
                        product_id: *second,
                        quantity: 1,
                    },
                ],
            },
        )
        .await?;
    }

    println!("Seeded menus");
    Ok(())
}

async fn seed_tables(state: &AppState, count: usize) -> anyhow::Result<()> {
    for _ in 0..count {
        order_table_service::create_order_table(
            state,
            CreateOrderTableRequest {
                number_of_guests: 0,
                empty: true,
            },
        )
        .await?;
    }

    println!("Seeded {count} order tables");
    Ok(())
}
