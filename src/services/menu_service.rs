use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::menus::{CreateMenuRequest, MenuList, MenuProductRequest, MenuWithProducts},
    entity::{
        menu_products::{ActiveModel as MenuProductActive, Model as MenuProductModel},
        menus::{ActiveModel as MenuActive, Model as MenuModel},
    },
    error::{AppError, AppResult},
    models::{Menu, MenuProduct},
    repository::{MenuGroupRepository, MenuRepository, ProductRepository},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_menu(
    state: &AppState,
    payload: CreateMenuRequest,
) -> AppResult<ApiResponse<MenuWithProducts>> {
    let price = match payload.price {
        Some(price) if price >= 0 => price,
        _ => {
            tracing::debug!(price = ?payload.price, "missing or negative menu price");
            return Err(AppError::BadRequest(
                "menu price must be present and non-negative".into(),
            ));
        }
    };
    if payload.menu_products.is_empty() {
        tracing::debug!("menu without menu products rejected");
        return Err(AppError::BadRequest(
            "a menu needs at least one menu product".into(),
        ));
    }
    if payload.menu_products.iter().any(|line| line.quantity < 1) {
        tracing::debug!("menu product quantity below 1 rejected");
        return Err(AppError::BadRequest(
            "menu product quantity must be at least 1".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    if !MenuGroupRepository::new(&txn)
        .exists_by_id(payload.menu_group_id)
        .await?
    {
        tracing::debug!(menu_group_id = %payload.menu_group_id, "menu group not found");
        return Err(AppError::BadRequest(format!(
            "menu group {} not found",
            payload.menu_group_id
        )));
    }

    let product_ids: Vec<Uuid> = payload
        .menu_products
        .iter()
        .map(|line| line.product_id)
        .collect();
    let prices: HashMap<Uuid, i64> = ProductRepository::new(&txn)
        .find_all_by_ids(&product_ids)
        .await?
        .into_iter()
        .map(|product| (product.id, product.price))
        .collect();

    let ceiling = price_ceiling(&payload.menu_products, &prices)?;
    if price > ceiling {
        tracing::debug!(price, ceiling, "menu overpriced relative to contents");
        return Err(AppError::BadRequest(format!(
            "menu price {price} exceeds the sum of its products ({ceiling})"
        )));
    }

    let menus = MenuRepository::new(&txn);
    let menu = menus
        .insert(MenuActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            price: Set(price),
            menu_group_id: Set(payload.menu_group_id),
            created_at: Set(Utc::now().into()),
        })
        .await?;

    let mut menu_products = Vec::with_capacity(payload.menu_products.len());
    for (seq, line) in payload.menu_products.iter().enumerate() {
        let saved = menus
            .insert_menu_product(MenuProductActive {
                id: Set(Uuid::new_v4()),
                menu_id: Set(menu.id),
                product_id: Set(line.product_id),
                quantity: Set(line.quantity),
                seq: Set(seq as i32),
            })
            .await?;
        menu_products.push(menu_product_from_entity(saved));
    }

    txn.commit().await?;

    tracing::info!(menu_id = %menu.id, price = menu.price, "menu created");

    Ok(ApiResponse::success(
        "Menu created",
        MenuWithProducts {
            menu: menu_from_entity(menu),
            menu_products,
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_menus(state: &AppState) -> AppResult<ApiResponse<MenuList>> {
    let menus = MenuRepository::new(&state.orm);
    let models = menus.find_all().await?;
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let mut products = menus.find_menu_products_by_menu_ids(&ids).await?;

    let items: Vec<MenuWithProducts> = models
        .into_iter()
        .map(|model| {
            let menu_products = products
                .remove(&model.id)
                .unwrap_or_default()
                .into_iter()
                .map(menu_product_from_entity)
                .collect();
            MenuWithProducts {
                menu: menu_from_entity(model),
                menu_products,
            }
        })
        .collect();

    let meta = Meta::all(items.len());
    Ok(ApiResponse::success("Menus", MenuList { items }, Some(meta)))
}

/// Sum of `product price × quantity` over all lines. Unknown products and
/// arithmetic overflow are rejected.
fn price_ceiling(lines: &[MenuProductRequest], prices: &HashMap<Uuid, i64>) -> AppResult<i64> {
    lines.iter().try_fold(0_i64, |sum, line| {
        let price = prices.get(&line.product_id).ok_or_else(|| {
            AppError::BadRequest(format!("product {} not found", line.product_id))
        })?;
        price
            .checked_mul(line.quantity)
            .and_then(|amount| sum.checked_add(amount))
            .ok_or_else(|| AppError::BadRequest("menu product total overflows".into()))
    })
}

fn menu_from_entity(model: MenuModel) -> Menu {
    Menu {
        id: model.id,
        name: model.name,
        price: model.price,
        menu_group_id: model.menu_group_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn menu_product_from_entity(model: MenuProductModel) -> MenuProduct {
    MenuProduct {
        id: model.id,
        menu_id: model.menu_id,
        product_id: model.product_id,
        quantity: model.quantity,
    }
}
