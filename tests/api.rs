mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use kitchenpos::routes::create_app;
use serde_json::{Value, json};
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<Reply> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok(Reply {
        status,
        location,
        body,
    })
}

fn id_of(value: &Value) -> String {
    value.as_str().expect("id string").to_string()
}

#[tokio::test]
async fn product_endpoints() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let created = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Fried chicken", "price": 16000 })),
    )
    .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = id_of(&created.body["data"]["id"]);
    assert_eq!(created.location, Some(format!("/api/products/{id}")));

    let invalid = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Broken", "price": -1 })),
    )
    .await?;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert!(invalid.body["data"]["error"].is_string());

    let listed = send(&app, "GET", "/api/products", None).await?;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(listed.body["meta"]["total"], json!(1));
    Ok(())
}

#[tokio::test]
async fn menu_endpoints() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let group = send(&app, "POST", "/api/menu-groups", Some(json!({ "name": "Combos" }))).await?;
    assert_eq!(group.status, StatusCode::CREATED);
    let group_id = id_of(&group.body["data"]["id"]);

    let product = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Fried chicken", "price": 500 })),
    )
    .await?;
    let product_id = id_of(&product.body["data"]["id"]);

    let overpriced = send(
        &app,
        "POST",
        "/api/menus",
        Some(json!({
            "name": "Double",
            "price": 1001,
            "menu_group_id": group_id,
            "menu_products": [{ "product_id": product_id, "quantity": 2 }]
        })),
    )
    .await?;
    assert_eq!(overpriced.status, StatusCode::BAD_REQUEST);

    let created = send(
        &app,
        "POST",
        "/api/menus",
        Some(json!({
            "name": "Double",
            "price": 1000,
            "menu_group_id": group_id,
            "menu_products": [{ "product_id": product_id, "quantity": 2 }]
        })),
    )
    .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["menu_products"][0]["quantity"], json!(2));

    let menus = send(&app, "GET", "/api/menus", None).await?;
    assert_eq!(menus.status, StatusCode::OK);
    assert_eq!(menus.body["data"].as_array().map(Vec::len), Some(1));

    let groups = send(&app, "GET", "/api/menu-groups", None).await?;
    assert_eq!(groups.body["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn order_table_endpoints_map_errors_to_status_codes() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let table = send(
        &app,
        "POST",
        "/api/order-tables",
        Some(json!({ "number_of_guests": 0, "empty": true })),
    )
    .await?;
    assert_eq!(table.status, StatusCode::CREATED);
    let id = id_of(&table.body["data"]["id"]);

    let on_empty = send(
        &app,
        "PUT",
        &format!("/api/order-tables/{id}/number-of-guests"),
        Some(json!({ "number_of_guests": 3 })),
    )
    .await?;
    assert_eq!(on_empty.status, StatusCode::CONFLICT);

    let seated = send(
        &app,
        "PUT",
        &format!("/api/order-tables/{id}/empty"),
        Some(json!({ "empty": false })),
    )
    .await?;
    assert_eq!(seated.status, StatusCode::OK);
    assert_eq!(seated.body["data"]["empty"], json!(false));

    let negative = send(
        &app,
        "PUT",
        &format!("/api/order-tables/{id}/number-of-guests"),
        Some(json!({ "number_of_guests": -1 })),
    )
    .await?;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let guests = send(
        &app,
        "PUT",
        &format!("/api/order-tables/{id}/number-of-guests"),
        Some(json!({ "number_of_guests": 4 })),
    )
    .await?;
    assert_eq!(guests.status, StatusCode::OK);
    assert_eq!(guests.body["data"]["number_of_guests"], json!(4));

    let missing = send(
        &app,
        "PUT",
        &format!("/api/order-tables/{}/empty", uuid::Uuid::new_v4()),
        Some(json!({ "empty": true })),
    )
    .await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let listed = send(&app, "GET", "/api/order-tables", None).await?;
    assert_eq!(listed.body["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn order_and_table_group_flow() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let menu = common::menu(&state).await?;
    let a = common::table(&state, true, 0).await?;
    let b = common::table(&state, true, 0).await?;
    let app = create_app(state);

    let grouped = send(
        &app,
        "POST",
        "/api/table-groups",
        Some(json!({ "order_table_ids": [a.id, b.id] })),
    )
    .await?;
    assert_eq!(grouped.status, StatusCode::CREATED);
    let group_id = id_of(&grouped.body["data"]["table_group"]["id"]);

    let regroup = send(
        &app,
        "POST",
        "/api/table-groups",
        Some(json!({ "order_table_ids": [a.id, b.id] })),
    )
    .await?;
    assert_eq!(regroup.status, StatusCode::CONFLICT);

    let order = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "order_table_id": a.id,
            "order_line_items": [{ "menu_id": menu.id, "quantity": 1 }]
        })),
    )
    .await?;
    assert_eq!(order.status, StatusCode::CREATED);
    assert_eq!(order.body["data"]["order"]["order_status"], json!("COOKING"));
    let order_id = id_of(&order.body["data"]["order"]["id"]);
    assert_eq!(order.location, Some(format!("/api/orders/{order_id}")));

    let blocked = send(&app, "DELETE", &format!("/api/table-groups/{group_id}"), None).await?;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);

    let done = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/order-status"),
        Some(json!({ "order_status": "COMPLETION" })),
    )
    .await?;
    assert_eq!(done.status, StatusCode::OK);
    assert_eq!(done.body["data"]["order"]["order_status"], json!("COMPLETION"));

    let again = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/order-status"),
        Some(json!({ "order_status": "MEAL" })),
    )
    .await?;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let released = send(&app, "DELETE", &format!("/api/table-groups/{group_id}"), None).await?;
    assert_eq!(released.status, StatusCode::NO_CONTENT);

    let orders = send(&app, "GET", "/api/orders", None).await?;
    assert_eq!(orders.body["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn order_failures_map_to_400_and_404() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let menu = common::menu(&state).await?;
    let empty = common::table(&state, true, 0).await?;
    let app = create_app(state);

    let no_items = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "order_table_id": empty.id, "order_line_items": [] })),
    )
    .await?;
    assert_eq!(no_items.status, StatusCode::BAD_REQUEST);

    let on_empty = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "order_table_id": empty.id,
            "order_line_items": [{ "menu_id": menu.id, "quantity": 1 }]
        })),
    )
    .await?;
    assert_eq!(on_empty.status, StatusCode::BAD_REQUEST);

    let unknown_menu = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "order_table_id": empty.id,
            "order_line_items": [{ "menu_id": uuid::Uuid::new_v4(), "quantity": 1 }]
        })),
    )
    .await?;
    assert_eq!(unknown_menu.status, StatusCode::NOT_FOUND);

    let missing_order = send(
        &app,
        "PUT",
        &format!("/api/orders/{}/order-status", uuid::Uuid::new_v4()),
        Some(json!({ "order_status": "MEAL" })),
    )
    .await?;
    assert_eq!(missing_order.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_input_is_400_with_envelope() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let missing_field = send(
        &app,
        "POST",
        "/api/order-tables",
        Some(json!({ "number_of_guests": 2 })),
    )
    .await?;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert!(missing_field.body["data"]["error"].is_string());

    let wrong_type = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Fried chicken", "price": "abc" })),
    )
    .await?;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert!(wrong_type.body["data"]["error"].is_string());

    let bad_uuid_body = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "order_table_id": "nope",
            "order_line_items": [{ "menu_id": uuid::Uuid::new_v4(), "quantity": 1 }]
        })),
    )
    .await?;
    assert_eq!(bad_uuid_body.status, StatusCode::BAD_REQUEST);
    assert!(bad_uuid_body.body["data"]["error"].is_string());

    let bad_path_id = send(
        &app,
        "PUT",
        "/api/order-tables/not-a-uuid/empty",
        Some(json!({ "empty": true })),
    )
    .await?;
    assert_eq!(bad_path_id.status, StatusCode::BAD_REQUEST);
    assert!(bad_path_id.body["data"]["error"].is_string());

    let bad_group_id = send(&app, "DELETE", "/api/table-groups/42", None).await?;
    assert_eq!(bad_group_id.status, StatusCode::BAD_REQUEST);
    assert!(bad_group_id.body["data"]["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404_with_envelope() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);
    let reply = send(&app, "GET", "/api/nope", None).await?;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["data"]["path"], json!("/api/nope"));
    Ok(())
}
