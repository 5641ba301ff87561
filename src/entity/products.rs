use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: i64,
    pub quantity: i32,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

// Order items and stock logs reference products by bare id so their
// snapshots survive later catalog changes; no relations are declared here.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
