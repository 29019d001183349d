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
    aggregation::LineRow,
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, UpdateAccountRequest, UserProfile},
        cart::{AddToCartRequest, AddToCartResponse, AdjustQuantityRequest, CartView, CheckoutResponse},
        favourites::{AddFavouriteRequest, AddFavouriteResponse, FavouriteList, FavouriteRow},
        orders::{OrderList, OrderView},
        products::{CategoryList, CategoryPayload, ProductList, ProductPayload},
    },
    models::{CartEntry, Category, FavouriteEntry, Order, OrderItem, Price, Product},
    navigation::{RoleRoutes, RouteEntry, Screen},
    response::{ApiResponse, Meta},
    routes::{account, admin, auth, cart, catalog, favourites, health, orders, params},
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
        catalog::list_products,
        catalog::get_product,
        catalog::list_categories,
        cart::view_cart,
        cart::add_to_cart,
        cart::change_quantity,
        cart::remove_from_cart,
        cart::checkout,
        favourites::list_favourites,
        favourites::add_favourite,
        favourites::remove_favourite,
        orders::list_orders,
        orders::get_order,
        auth::register,
        auth::login,
        account::get_account,
        account::update_account,
        account::navigation,
        admin::list_products,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::list_categories,
        admin::create_category,
        admin::update_category,
        admin::delete_category
    ),
    components(
        schemas(
            Product,
            Price,
            Category,
            CartEntry,
            FavouriteEntry,
            Order,
            OrderItem,
            LineRow,
            CartView,
            AddToCartRequest,
            AddToCartResponse,
            AdjustQuantityRequest,
            CheckoutResponse,
            AddFavouriteRequest,
            AddFavouriteResponse,
            FavouriteRow,
            FavouriteList,
            OrderView,
            OrderList,
            ProductPayload,
            CategoryPayload,
            ProductList,
            CategoryList,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateAccountRequest,
            UserProfile,
            Screen,
            RouteEntry,
            RoleRoutes,
            params::CatalogQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<OrderList>,
            ApiResponse<LoginResponse>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Product browsing and filtering"),
        (name = "Cart", description = "Cart and checkout"),
        (name = "Favourites", description = "Favourite products"),
        (name = "Orders", description = "Order history"),
        (name = "Auth", description = "Registration and login"),
        (name = "Account", description = "Profile and role navigation"),
        (name = "Admin", description = "Product and category management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
