use crate::{
    aggregation::{ALL_CATEGORIES, filter_products},
    api::Resource,
    dto::products::{CategoryList, ProductList},
    error::{AppError, AppResult},
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::params::CatalogQuery,
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: CatalogQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let snapshot = state.catalog.snapshot(&state.api).await?;
    let items: Vec<Product> = filter_products(
        &snapshot.products,
        query.category.as_deref(),
        query.q.as_deref(),
    )
    .into_iter()
    .cloned()
    .collect();

    tracing::debug!(
        category = query.category.as_deref().unwrap_or(ALL_CATEGORIES),
        matched = items.len(),
        "catalog filtered"
    );
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let product: Product = state.api.get(Resource::Products, id).await?;
    Ok(ApiResponse::success("Product", product, None))
}

/// Categories with the "all" sentinel first.
pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let snapshot = state.catalog.snapshot(&state.api).await?;
    let mut items = Vec::with_capacity(snapshot.categories.len() + 1);
    items.push(Category {
        id: ALL_CATEGORIES.to_string(),
        name: "All".to_string(),
    });
    items.extend(snapshot.categories.iter().cloned());

    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

/// Fails with a validation error when `product_id` is not in the catalog.
/// Falls back to a direct lookup when the shared snapshot is stale.
pub async fn require_product(state: &AppState, product_id: &str) -> AppResult<()> {
    let snapshot = state.catalog.snapshot(&state.api).await?;
    if snapshot.product(product_id).is_some() {
        return Ok(());
    }
    match state.api.get::<Product>(Resource::Products, product_id).await {
        Ok(_) => Ok(()),
        Err(crate::api::ApiError::NotFound(_)) => {
            Err(AppError::BadRequest("product not found".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
