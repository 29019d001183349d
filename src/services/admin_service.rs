use crate::{
    api::Resource,
    audit::log_audit,
    dto::products::{CategoryList, CategoryPayload, ProductList, ProductPayload},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Category, Product},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn validate_product(payload: &ProductPayload) -> AppResult<()> {
    if payload.name.trim().is_empty()
        || payload.price.is_blank()
        || payload.category_id.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Please fill in all product fields".into(),
        ));
    }
    if payload.price.amount().is_none() {
        return Err(AppError::BadRequest("price must be a number".into()));
    }
    Ok(())
}

fn validate_category(payload: &CategoryPayload) -> AppResult<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("category name is required".into()));
    }
    Ok(())
}

pub async fn list_products(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ProductList>> {
    ensure_admin(user)?;
    let items: Vec<Product> = state.api.list(Resource::Products).await?;
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: ProductPayload,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    validate_product(&payload)?;
    let product: Product = state.api.create(Resource::Products, &payload).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );
    Ok(ApiResponse::success("Product created", product, Some(Meta::empty())))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: &str,
    payload: ProductPayload,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    validate_product(&payload)?;
    let product: Product = state.api.update(Resource::Products, id, &payload).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );
    Ok(ApiResponse::success("Updated", product, Some(Meta::empty())))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    state.api.delete(Resource::Products, id).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_categories(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CategoryList>> {
    ensure_admin(user)?;
    let items: Vec<Category> = state.api.list(Resource::Categories).await?;
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CategoryPayload,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    validate_category(&payload)?;
    let category: Category = state.api.create(Resource::Categories, &payload).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "category_create",
        Some("categories"),
        Some(serde_json::json!({ "category_id": category.id })),
    );
    Ok(ApiResponse::success("Category created", category, Some(Meta::empty())))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: &str,
    payload: CategoryPayload,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    validate_category(&payload)?;
    let category: Category = state.api.update(Resource::Categories, id, &payload).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "category_update",
        Some("categories"),
        Some(serde_json::json!({ "category_id": id })),
    );
    Ok(ApiResponse::success("Updated", category, Some(Meta::empty())))
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    state.api.delete(Resource::Categories, id).await?;
    state.catalog.invalidate().await;

    log_audit(
        Some(&user.user_id),
        "category_delete",
        Some("categories"),
        Some(serde_json::json!({ "category_id": id })),
    );
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
