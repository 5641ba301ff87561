#![allow(dead_code)]

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use shophub_api::{
    db::{create_orm_conn, create_pool},
    entity::products::{ActiveModel as ProductActive, Model as ProductModel},
    entity::users::ActiveModel as UserActive,
    middleware::auth::AuthUser,
    state::AppState,
};
use uuid::Uuid;

// Tests create their own rows and never truncate, so separate test
// binaries can share one database.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests."
                );
                return Ok(None);
            }
        };

    let pool = create_pool(&database_url).await?;
    let orm = create_orm_conn(&database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Some(AppState { pool, orm }))
}

pub async fn create_user(state: &AppState, prefix: &str) -> anyhow::Result<AuthUser> {
    let username = format!("{prefix}-{}", Uuid::new_v4());
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username),
        password_hash: Set("dummy".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        username: user.username,
    })
}

pub async fn create_product(
    state: &AppState,
    name: &str,
    price: i64,
    quantity: i32,
    status: &str,
) -> anyhow::Result<ProductModel> {
    let product = ProductActive {
        id: Set(Uuid::new_v4()),
        name: Set(format!("{name}-{}", Uuid::new_v4())),
        category: Set("Test".into()),
        brand: Set("Acme".into()),
        price: Set(price),
        quantity: Set(quantity),
        status: Set(status.into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(product)
}
