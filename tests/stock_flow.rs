mod common;

use common::{create_product, setup_state};
use sea_orm::EntityTrait;
use shophub_api::{
    dto::stock::StockChangeRequest,
    entity::products::Entity as Products,
    error::AppError,
    services::stock_service,
};
use std::time::Duration;
use uuid::Uuid;

#[tokio::test]
async fn negative_delta_clamps_but_logs_requested_amount() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let product = create_product(&state, "Clamped", 100, 5, "active").await?;

    let resp = stock_service::apply_change(
        &state,
        StockChangeRequest {
            product_id: product.id,
            amount: -10,
            reason: "shrinkage audit".into(),
        },
    )
    .await?;
    assert_eq!(resp.data.expect("stock data").new_quantity, 0);

    let reloaded = Products::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product row");
    assert_eq!(reloaded.quantity, 0);
    assert_eq!(reloaded.status, "out_of_stock");

    // The ledger keeps the requested delta, not the clamped one.
    let logs = logs_for(&state, product.id).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].change, -10);
    assert_eq!(logs[0].reason, "shrinkage audit");

    Ok(())
}

#[tokio::test]
async fn restock_reactivates_inactive_product() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let product = create_product(&state, "Dormant", 100, 3, "inactive").await?;

    let resp = stock_service::apply_change(
        &state,
        StockChangeRequest {
            product_id: product.id,
            amount: 5,
            reason: "restock".into(),
        },
    )
    .await?;
    assert_eq!(resp.data.expect("stock data").new_quantity, 8);

    let reloaded = Products::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("product row");
    assert_eq!(reloaded.status, "active");

    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let err = stock_service::apply_change(
        &state,
        StockChangeRequest {
            product_id: Uuid::new_v4(),
            amount: 5,
            reason: "restock".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ProductNotFound));

    Ok(())
}

#[tokio::test]
async fn logs_are_listed_newest_first() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let product = create_product(&state, "Logged", 100, 10, "active").await?;

    stock_service::apply_change(
        &state,
        StockChangeRequest {
            product_id: product.id,
            amount: 2,
            reason: "first".into(),
        },
    )
    .await?;
    tokio::time::sleep(Duration::from_millis(20)).await;
    stock_service::apply_change(
        &state,
        StockChangeRequest {
            product_id: product.id,
            amount: -1,
            reason: "second".into(),
        },
    )
    .await?;

    let logs = logs_for(&state, product.id).await?;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].reason, "second");
    assert_eq!(logs[1].reason, "first");

    Ok(())
}

// Other tests write logs too; keep only this product's entries, in the
// order the service returned them.
async fn logs_for(
    state: &shophub_api::state::AppState,
    product_id: Uuid,
) -> anyhow::Result<Vec<shophub_api::models::StockLog>> {
    let resp = stock_service::list_logs(state).await?;
    Ok(resp
        .data
        .expect("log list")
        .items
        .into_iter()
        .filter(|log| log.product_id == product_id)
        .collect())
}
