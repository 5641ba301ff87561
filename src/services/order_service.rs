use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated, OrderList},
    entity::{
        order_items::ActiveModel as OrderItemActive,
        orders::{
            ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
        },
        products::{ActiveModel as ProductActive, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Order,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Place an order: open an order row, then walk the requested items in
/// request order, locking each product row for the read-check-decrement.
/// Any failure returns with the transaction still open, which rolls back
/// the order, its items and every stock decrement already applied.
pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderCreated>> {
    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        total: Set(0),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut total: i64 = 0;

    for item in &payload.items {
        if item.qty < 1 {
            return Err(AppError::BadRequest("Quantity must be at least 1".into()));
        }

        let product = Products::find_by_id(item.product_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?;

        // Missing, non-active and under-stocked products all fail the
        // whole order the same way.
        let product = match product {
            Some(p) if p.status == "active" && p.quantity >= item.qty => p,
            _ => return Err(AppError::ProductUnavailable),
        };

        let remaining = product.quantity - item.qty;
        let price = product.price;

        let mut active: ProductActive = product.into();
        active.quantity = Set(remaining);
        if remaining == 0 {
            active.status = Set("out_of_stock".to_string());
        }
        active.update(&txn).await?;

        // Snapshot the current catalog price, never a caller-supplied one.
        total += price * i64::from(item.qty);

        OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            product_id: Set(item.product_id),
            qty: Set(item.qty),
            price: Set(price),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;
    }

    let mut active: OrderActive = order.into();
    active.total = Set(total);
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, total = order.total, "order created");

    Ok(ApiResponse::success(
        "Order created",
        OrderCreated {
            order_id: order.id,
            total: order.total,
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<OrderList>> {
    let items: Vec<Order> = Orders::find()
        .filter(OrderCol::UserId.eq(user.user_id))
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::count(items.len() as i64);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        total: model.total,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
