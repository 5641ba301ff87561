mod common;

use common::{create_product, create_user, setup_state};
use shophub_api::{
    dto::orders::{CreateOrderRequest, OrderItemInput},
    dto::products::{CreateProductRequest, ProductListQuery},
    error::AppError,
    services::{dashboard_service, order_service, product_service},
};

#[tokio::test]
async fn zero_quantity_product_is_stored_out_of_stock() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let resp = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Phantom Gadget".into(),
            category: "Test".into(),
            brand: "Acme".into(),
            price: 900,
            quantity: 0,
            status: Some("active".into()),
        },
    )
    .await?;
    let product = resp.data.expect("product data");
    assert_eq!(product.status, "out_of_stock");
    assert_eq!(product.quantity, 0);

    // Negative quantities are clamped on the way in.
    let resp = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Ghost Gadget".into(),
            category: "Test".into(),
            brand: "Acme".into(),
            price: 900,
            quantity: -5,
            status: None,
        },
    )
    .await?;
    let product = resp.data.expect("product data");
    assert_eq!(product.quantity, 0);
    assert_eq!(product.status, "out_of_stock");

    Ok(())
}

#[tokio::test]
async fn unknown_status_is_rejected() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let err = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Odd Gadget".into(),
            category: "Test".into(),
            brand: "Acme".into(),
            price: 100,
            quantity: 5,
            status: Some("discontinued".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}

#[tokio::test]
async fn listing_filters_to_active_and_honors_the_cap() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    create_product(&state, "Visible", 100, 5, "active").await?;
    create_product(&state, "Hidden", 100, 5, "inactive").await?;

    let resp = product_service::list_active(&state, ProductListQuery { limit: Some(5) }).await?;
    let list = resp.data.expect("product list");
    assert!(list.items.len() <= 5);
    assert!(list.items.iter().all(|p| p.status == "active"));
    // Insertion order: created_at never decreases down the list.
    assert!(
        list.items
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at)
    );

    // Oversized limits collapse to the fixed cap of 50.
    let resp = product_service::list_active(&state, ProductListQuery { limit: Some(500) }).await?;
    assert!(resp.data.expect("product list").items.len() <= 50);

    Ok(())
}

#[tokio::test]
async fn dashboard_totals_are_scoped_to_the_caller() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = create_user(&state, "viewer").await?;
    let product = create_product(&state, "Metric", 150, 10, "active").await?;

    let resp = dashboard_service::summary(&state, &user).await?;
    let summary = resp.data.expect("summary");
    assert_eq!(summary.total_orders, 0);
    assert_eq!(summary.total_sales, 0);
    assert!(summary.total_products >= 1);
    assert!(summary.active_products <= summary.total_products);

    order_service::create_order(
        &state,
        &user,
        CreateOrderRequest {
            items: vec![OrderItemInput {
                product_id: product.id,
                qty: 2,
            }],
        },
    )
    .await?;

    let resp = dashboard_service::summary(&state, &user).await?;
    let summary = resp.data.expect("summary");
    assert_eq!(summary.total_orders, 1);
    assert_eq!(summary.total_sales, 300);

    Ok(())
}
