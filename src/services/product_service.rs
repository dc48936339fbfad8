use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList},
    entity::products::{ActiveModel, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
    repository::ProductRepository,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let price = match payload.price {
        Some(price) if price >= 0 => price,
        _ => {
            tracing::debug!(price = ?payload.price, "rejected product price");
            return Err(AppError::BadRequest(
                "product price must be present and non-negative".into(),
            ));
        }
    };

    let txn = state.orm.begin().await?;
    let product = ProductRepository::new(&txn)
        .insert(ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            price: Set(price),
            created_at: Set(Utc::now().into()),
        })
        .await?;
    txn.commit().await?;

    tracing::info!(product_id = %product.id, price = product.price, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = ProductRepository::new(&state.orm)
        .find_all()
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::all(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
