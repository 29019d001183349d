pub mod auth;
pub mod cart;
pub mod favourites;
pub mod orders;
pub mod products;
