use crate::{
    aggregation::{PLACEHOLDER_IMAGE, PLACEHOLDER_NAME},
    api::Resource,
    audit::log_audit,
    dto::favourites::{AddFavouriteRequest, AddFavouriteResponse, FavouriteList, FavouriteRow},
    error::{AppError, AppResult},
    models::{FavouriteEntry, NewFavourite},
    response::{ApiResponse, Meta},
    services::catalog_service::require_product,
    state::AppState,
};

pub async fn list_favourites(state: &AppState) -> AppResult<ApiResponse<FavouriteList>> {
    let (favourites, snapshot) = tokio::try_join!(
        state.api.list::<FavouriteEntry>(Resource::Favourites),
        state.catalog.snapshot(&state.api),
    )?;

    let items: Vec<FavouriteRow> = favourites
        .into_iter()
        .map(|fav| {
            let product = snapshot.product(&fav.product_id).cloned();
            FavouriteRow {
                name: product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
                image: product
                    .as_ref()
                    .map(|p| p.image.clone())
                    .filter(|img| !img.is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                id: fav.id,
                product_id: fav.product_id,
                product,
            }
        })
        .collect();

    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("OK", FavouriteList { items }, Some(meta)))
}

/// Inserts the favourite unless one already exists for the product.
pub async fn add_favourite(
    state: &AppState,
    payload: AddFavouriteRequest,
) -> AppResult<ApiResponse<AddFavouriteResponse>> {
    require_product(state, &payload.product_id).await?;

    let _gate = state.gates.favourites.lock().await;
    let favourites: Vec<FavouriteEntry> = state.api.list(Resource::Favourites).await?;
    if let Some(existing) = favourites
        .into_iter()
        .find(|f| f.product_id == payload.product_id)
    {
        return Ok(ApiResponse::success(
            "Already in favourites",
            AddFavouriteResponse {
                favourite: existing,
                created: false,
            },
            Some(Meta::empty()),
        ));
    }

    let favourite: FavouriteEntry = state
        .api
        .create(
            Resource::Favourites,
            &NewFavourite {
                product_id: &payload.product_id,
            },
        )
        .await?;

    log_audit(
        None,
        "favourite_add",
        Some("favourites"),
        Some(serde_json::json!({ "product_id": payload.product_id })),
    );

    Ok(ApiResponse::success(
        "Added to favourites",
        AddFavouriteResponse {
            favourite,
            created: true,
        },
        Some(Meta::empty()),
    ))
}

/// Deletes every favourite entry recorded for the product.
pub async fn remove_favourite(
    state: &AppState,
    product_id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let _gate = state.gates.favourites.lock().await;
    let favourites: Vec<FavouriteEntry> = state.api.list(Resource::Favourites).await?;
    let matching: Vec<FavouriteEntry> = favourites
        .into_iter()
        .filter(|f| f.product_id == product_id)
        .collect();

    if matching.is_empty() {
        return Err(AppError::NotFound);
    }

    for fav in &matching {
        state.api.delete(Resource::Favourites, &fav.id).await?;
    }

    log_audit(
        None,
        "favourite_remove",
        Some("favourites"),
        Some(serde_json::json!({ "product_id": product_id, "entries": matching.len() })),
    );

    Ok(ApiResponse::success(
        "Removed from favourites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
