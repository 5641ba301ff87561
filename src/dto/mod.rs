pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod stock;
