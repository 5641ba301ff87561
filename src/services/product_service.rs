use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, ProductListQuery},
    entity::products::{
        ActiveModel as ProductActive, Column as ProdCol, Entity as Products, Model as ProductModel,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
};

const MAX_LIST_LIMIT: i64 = 50;

pub async fn list_active(
    state: &AppState,
    query: ProductListQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let limit = query.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

    let items: Vec<Product> = Products::find()
        .filter(ProdCol::Status.eq("active"))
        .order_by_asc(ProdCol::CreatedAt)
        .limit(limit as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::list(items.len() as i64, limit);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if payload.price < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }

    let status = payload.status.unwrap_or_else(|| "active".to_string());
    validate_product_status(&status)?;

    // An empty shelf overrides whatever status the caller supplied.
    let status = if payload.quantity <= 0 {
        "out_of_stock".to_string()
    } else {
        status
    };

    let product = ProductActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        category: Set(payload.category),
        brand: Set(payload.brand),
        price: Set(payload.price),
        quantity: Set(payload.quantity.max(0)),
        status: Set(status),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = %product.id, "product added");

    Ok(ApiResponse::success(
        "Product added",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

fn validate_product_status(status: &str) -> Result<(), AppError> {
    const VALID: [&str; 3] = ["active", "inactive", "out_of_stock"];
    if VALID.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid product status".into()))
    }
}

pub(crate) fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        category: model.category,
        brand: model.brand,
        price: model.price,
        quantity: model.quantity,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
