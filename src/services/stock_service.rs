use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    dto::stock::{StockChangeRequest, StockChangeResponse, StockLogList},
    entity::{
        products::{ActiveModel as ProductActive, Entity as Products},
        stock_logs::{
            ActiveModel as StockLogActive, Column as StockLogCol, Entity as StockLogs,
            Model as StockLogModel,
        },
    },
    error::{AppError, AppResult},
    models::StockLog,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Apply an inventory delta. The new quantity is clamped at zero rather
/// than rejected, and the ledger records the requested delta, not the
/// clamped effective one. A positive resulting quantity always flips the
/// product back to active, even if it was set inactive by hand.
pub async fn apply_change(
    state: &AppState,
    payload: StockChangeRequest,
) -> AppResult<ApiResponse<StockChangeResponse>> {
    let txn = state.orm.begin().await?;

    let product = Products::find_by_id(payload.product_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::ProductNotFound),
    };

    let new_quantity = (product.quantity + payload.amount).max(0);

    let mut active: ProductActive = product.into();
    active.quantity = Set(new_quantity);
    active.status = Set(if new_quantity == 0 {
        "out_of_stock".to_string()
    } else {
        "active".to_string()
    });
    active.update(&txn).await?;

    StockLogActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        change: Set(payload.amount),
        reason: Set(payload.reason),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(
        product_id = %payload.product_id,
        change = payload.amount,
        new_quantity,
        "stock updated"
    );

    Ok(ApiResponse::success(
        "Stock updated",
        StockChangeResponse { new_quantity },
        Some(Meta::empty()),
    ))
}

pub async fn list_logs(state: &AppState) -> AppResult<ApiResponse<StockLogList>> {
    let items: Vec<StockLog> = StockLogs::find()
        .order_by_desc(StockLogCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(stock_log_from_entity)
        .collect();

    let meta = Meta::count(items.len() as i64);
    Ok(ApiResponse::success(
        "Stock logs",
        StockLogList { items },
        Some(meta),
    ))
}

fn stock_log_from_entity(model: StockLogModel) -> StockLog {
    StockLog {
        id: model.id,
        product_id: model.product_id,
        change: model.change,
        reason: model.reason,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
