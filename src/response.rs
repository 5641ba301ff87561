use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub count: Option<i64>,
    pub limit: Option<i64>,
}

impl Meta {
    pub fn list(count: i64, limit: i64) -> Self {
        Self {
            count: Some(count),
            limit: Some(limit),
        }
    }

    pub fn count(count: i64) -> Self {
        Self {
            count: Some(count),
            limit: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            count: None,
            limit: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
