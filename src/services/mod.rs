pub mod account_service;
pub mod admin_service;
pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod favourite_service;
pub mod order_service;
