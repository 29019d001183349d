use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FavouriteEntry, Product};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavouriteRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddFavouriteResponse {
    pub favourite: FavouriteEntry,
    /// False when the product was already a favourite.
    pub created: bool,
}

/// A favourite joined to its product; `product` is absent once the product
/// has been deleted from the catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavouriteRow {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub product: Option<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavouriteList {
    #[schema(value_type = Vec<FavouriteRow>)]
    pub items: Vec<FavouriteRow>,
}
