use anyhow::Result;
use uuid::Uuid;

use crate::db::DbPool;

// (name, category, brand, price in minor units, quantity)
const CATALOG: [(&str, &str, &str, i64, i32); 20] = [
    ("Dell XPS 13", "Laptop", "Dell", 85000, 25),
    ("HP Pavilion 15", "Laptop", "HP", 55000, 40),
    ("Lenovo ThinkPad E15", "Laptop", "Lenovo", 60000, 30),
    ("ASUS ROG Gaming Laptop", "Laptop", "ASUS", 95000, 12),
    ("Apple MacBook Air M1", "Laptop", "Apple", 120000, 18),
    ("Nike Air Force 1", "Shoes", "Nike", 8000, 60),
    ("Adidas Ultraboost", "Shoes", "Adidas", 12000, 45),
    ("Puma RS-X", "Shoes", "Puma", 6500, 80),
    ("Converse Chuck Taylor", "Shoes", "Converse", 4500, 90),
    ("Clarks Desert Boot", "Shoes", "Clarks", 8000, 35),
    ("iPhone 13", "Phones", "Apple", 75000, 30),
    ("Samsung Galaxy S21", "Phones", "Samsung", 60000, 40),
    ("Google Pixel 6", "Phones", "Google", 60000, 25),
    ("OnePlus 9", "Phones", "OnePlus", 45000, 50),
    ("Nothing Phone 1", "Phones", "Nothing", 32000, 45),
    ("Cotton T-Shirt", "Clothes", "Generic", 500, 150),
    ("Denim Jeans", "Clothes", "Levis", 2500, 100),
    ("Formal Shirt", "Clothes", "Arrow", 1500, 120),
    ("Hoodie", "Clothes", "Generic", 1200, 80),
    ("Overcoat", "Clothes", "Generic", 5000, 40),
];

/// Seed the product catalog. Runs once before serving; a non-empty
/// catalog means a previous run already seeded, so this is a no-op.
pub async fn run(pool: &DbPool) -> Result<()> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        tracing::debug!("catalog already seeded, skipping");
        return Ok(());
    }

    for (name, category, brand, price, quantity) in CATALOG {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, category, brand, price, quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(category)
        .bind(brand)
        .bind(price)
        .bind(quantity)
        .execute(pool)
        .await?;
    }

    tracing::info!(products = CATALOG.len(), "seeded product catalog");
    Ok(())
}
