use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        dashboard::DashboardSummary,
        orders::{CreateOrderRequest, OrderCreated, OrderItemInput, OrderList},
        products::{CreateProductRequest, ProductList},
        stock::{StockChangeRequest, StockChangeResponse, StockLogList},
    },
    models::{Order, OrderItem, Product, StockLog, User},
    response::{ApiResponse, Meta},
    routes::{auth, dashboard, health, orders, products, stock},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        products::list_products,
        products::add_product,
        orders::create_order,
        orders::list_orders,
        stock::update_stock,
        stock::list_stock_logs,
        dashboard::summary
    ),
    components(
        schemas(
            User,
            Product,
            Order,
            OrderItem,
            StockLog,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateProductRequest,
            ProductList,
            CreateOrderRequest,
            OrderItemInput,
            OrderCreated,
            OrderList,
            StockChangeRequest,
            StockChangeResponse,
            StockLogList,
            DashboardSummary,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<OrderCreated>,
            ApiResponse<OrderList>,
            ApiResponse<StockLogList>,
            ApiResponse<DashboardSummary>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Stock", description = "Stock ledger endpoints"),
        (name = "Dashboard", description = "Dashboard endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
