pub mod aggregation;
pub mod api;
pub mod audit;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
