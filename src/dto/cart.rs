use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{aggregation::LineRow, models::{CartEntry, Order}};

pub const DEFAULT_SIZE: &str = "S";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
    /// Defaults to "S".
    pub size: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustQuantityRequest {
    pub delta: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<LineRow>,
    pub total: f64,
    pub total_display: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddToCartResponse {
    pub entry: CartEntry,
    /// True when an existing entry was incremented instead of created.
    pub incremented: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub order: Order,
    pub total_display: String,
    pub cleared_entries: usize,
}
