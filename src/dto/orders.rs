use serde::Serialize;
use utoipa::ToSchema;

use crate::{aggregation::LineRow, models::OrderItem};

/// An order with duplicate product lines merged and joined to products.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderView {
    pub id: String,
    pub date: Option<String>,
    pub total_price: Option<f64>,
    pub total_display: String,
    pub items: Vec<OrderItem>,
    pub rows: Vec<LineRow>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<OrderView>)]
    pub items: Vec<OrderView>,
}
