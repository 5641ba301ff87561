use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::StockLog;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StockChangeRequest {
    pub product_id: Uuid,
    pub amount: i32,
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockChangeResponse {
    pub new_quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockLogList {
    pub items: Vec<StockLog>,
}
