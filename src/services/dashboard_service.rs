use crate::{
    dto::dashboard::DashboardSummary,
    error::AppResult,
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Product counts are catalog-wide; order count and sales total are scoped
/// to the requesting user.
pub async fn summary(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<DashboardSummary>> {
    let products: (i64, i64) = sqlx::query_as(
        "SELECT count(*), count(*) FILTER (WHERE status = 'active') FROM products",
    )
    .fetch_one(&state.pool)
    .await?;

    let orders: (i64, i64) = sqlx::query_as(
        "SELECT count(*), COALESCE(sum(total), 0)::bigint FROM orders WHERE user_id = $1",
    )
    .bind(user.user_id)
    .fetch_one(&state.pool)
    .await?;

    let data = DashboardSummary {
        total_products: products.0,
        active_products: products.1,
        total_orders: orders.0,
        total_sales: orders.1,
    };

    Ok(ApiResponse::success("Summary", data, Some(Meta::empty())))
}
