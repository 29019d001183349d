use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Price, Product};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    pub category_id: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}
