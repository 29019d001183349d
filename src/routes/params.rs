use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct CatalogQuery {
    /// Category id, or "all".
    pub category: Option<String>,
    /// Case-insensitive substring of the product name.
    pub q: Option<String>,
}
