use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_products: i64,
    pub active_products: i64,
    pub total_orders: i64,
    pub total_sales: i64,
}
