mod common;

use kitchenpos::{
    dto::order_tables::{ChangeEmptyRequest, ChangeNumberOfGuestsRequest},
    error::AppError,
    models::OrderStatus,
    services::order_table_service,
};
use uuid::Uuid;

#[tokio::test]
async fn creates_ungrouped_tables() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let empty = common::table(&state, true, 0).await?;
    let seated = common::table(&state, false, 4).await?;

    assert!(empty.empty);
    assert!(empty.table_group_id.is_none());
    assert!(!seated.empty);
    assert_eq!(seated.number_of_guests, 4);

    let listed = order_table_service::list_order_tables(&state).await?.data.unwrap();
    assert_eq!(listed.items, vec![empty, seated]);
    Ok(())
}

#[tokio::test]
async fn changes_empty_status() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table = common::table(&state, true, 0).await?;

    let updated = order_table_service::change_empty(&state, table.id, ChangeEmptyRequest { empty: false })
        .await?
        .data
        .unwrap();
    assert!(!updated.empty);
    assert!(!common::find_table(&state, table.id).await?.empty);
    Ok(())
}

#[tokio::test]
async fn change_empty_on_unknown_table_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let err = order_table_service::change_empty(&state, Uuid::new_v4(), ChangeEmptyRequest { empty: true })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn grouped_table_cannot_change_empty_status() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let a = common::table(&state, true, 0).await?;
    let b = common::table(&state, true, 0).await?;
    common::group(&state, &[a.id, b.id]).await?;

    let err = order_table_service::change_empty(&state, a.id, ChangeEmptyRequest { empty: true })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn active_order_blocks_change_empty_until_completed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let menu = common::menu(&state).await?;
    let table = common::table(&state, false, 2).await?;
    let order = common::order(&state, table.id, menu.id).await?;

    for status in [OrderStatus::Cooking, OrderStatus::Meal] {
        if status != OrderStatus::Cooking {
            common::set_status(&state, order.id, status).await?;
        }
        let err = order_table_service::change_empty(&state, table.id, ChangeEmptyRequest { empty: true })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)), "status {status}");
    }

    common::set_status(&state, order.id, OrderStatus::Completion).await?;
    let updated = order_table_service::change_empty(&state, table.id, ChangeEmptyRequest { empty: true })
        .await?
        .data
        .unwrap();
    assert!(updated.empty);
    Ok(())
}

#[tokio::test]
async fn changes_number_of_guests_on_occupied_table() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table = common::table(&state, false, 2).await?;

    let updated = order_table_service::change_number_of_guests(
        &state,
        table.id,
        ChangeNumberOfGuestsRequest { number_of_guests: 5 },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.number_of_guests, 5);
    assert_eq!(common::find_table(&state, table.id).await?.number_of_guests, 5);
    Ok(())
}

#[tokio::test]
async fn rejects_negative_guest_count() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table = common::table(&state, false, 2).await?;

    let err = order_table_service::change_number_of_guests(
        &state,
        table.id,
        ChangeNumberOfGuestsRequest { number_of_guests: -1 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(common::find_table(&state, table.id).await?.number_of_guests, 2);
    Ok(())
}

#[tokio::test]
async fn guest_count_requires_existing_occupied_table() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let empty = common::table(&state, true, 0).await?;

    let missing = order_table_service::change_number_of_guests(
        &state,
        Uuid::new_v4(),
        ChangeNumberOfGuestsRequest { number_of_guests: 3 },
    )
    .await
    .unwrap_err();
    assert!(matches!(missing, AppError::NotFound(_)));

    let on_empty = order_table_service::change_number_of_guests(
        &state,
        empty.id,
        ChangeNumberOfGuestsRequest { number_of_guests: 3 },
    )
    .await
    .unwrap_err();
    assert!(matches!(on_empty, AppError::Conflict(_)));
    Ok(())
}
