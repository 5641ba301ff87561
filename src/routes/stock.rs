use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::stock::{StockChangeRequest, StockChangeResponse, StockLogList},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::stock_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(update_stock))
        .route("/logs", get(list_stock_logs))
}

#[utoipa::path(
    post,
    path = "/api/stock",
    request_body = StockChangeRequest,
    responses(
        (status = 200, description = "Apply stock change", body = ApiResponse<StockChangeResponse>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Stock"
)]
pub async fn update_stock(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<StockChangeRequest>,
) -> AppResult<Json<ApiResponse<StockChangeResponse>>> {
    let resp = stock_service::apply_change(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/stock/logs",
    responses(
        (status = 200, description = "Stock change log, newest first", body = ApiResponse<StockLogList>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Stock"
)]
pub async fn list_stock_logs(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<StockLogList>>> {
    let resp = stock_service::list_logs(&state).await?;
    Ok(Json(resp))
}
