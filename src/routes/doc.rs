use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        cart::{AddToCartRequest, CartItemDto, CartList, RemoveFromCartRequest, UpdateCartItemRequest},
        orders::{CreateOrderRequest, OrderList},
        products::ProductList,
    },
    middleware::auth::AUTH_COOKIE,
    models::{CartLine, Condition, Order, OrderItem, OrderStatus, Product, UserProfile},
    response::{ApiResponse, Meta},
    routes::{auth, cart, health, orders, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "cookie_auth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE))),
        );
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
        auth::logout,
        auth::me,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        products::list_products,
        products::get_product,
        orders::list_orders,
        orders::create_order,
    ),
    components(
        schemas(
            UserProfile,
            CartLine,
            Product,
            Condition,
            Order,
            OrderItem,
            OrderStatus,
            RegisterRequest,
            LoginRequest,
            AddToCartRequest,
            UpdateCartItemRequest,
            RemoveFromCartRequest,
            CreateOrderRequest,
            CartItemDto,
            CartList,
            OrderList,
            ProductList,
            Meta,
            ApiResponse<UserProfile>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration, login and session endpoints"),
        (name = "Products", description = "Read-only catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
