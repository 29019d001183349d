use chrono::{SecondsFormat, Utc};

use crate::{
    aggregation::{adjust_quantity, format_money, join_lines, lines_total},
    api::Resource,
    audit::log_audit,
    dto::cart::{
        AddToCartRequest, AddToCartResponse, AdjustQuantityRequest, CartView, CheckoutResponse,
        DEFAULT_SIZE,
    },
    error::{AppError, AppResult},
    models::{CartEntry, NewCartEntry, NewOrder, Order, OrderItem},
    response::{ApiResponse, Meta},
    services::catalog_service::require_product,
    state::AppState,
};

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let (entries, snapshot) = tokio::try_join!(
        state.api.list::<CartEntry>(Resource::Cart),
        state.catalog.snapshot(&state.api),
    )?;

    let total = lines_total(&entries, snapshot.as_ref());
    let view = CartView {
        items: join_lines(&entries, snapshot.as_ref()),
        total,
        total_display: format_money(total),
    };
    let meta = Meta::new(view.items.len());
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

/// Increments the entry with the same product and size, or creates one
/// with quantity 1.
pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<AddToCartResponse>> {
    let size = payload
        .size
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SIZE)
        .to_string();
    require_product(state, &payload.product_id).await?;

    let _gate = state.gates.cart.lock().await;
    let entries: Vec<CartEntry> = state.api.list(Resource::Cart).await?;
    let existing = entries
        .into_iter()
        .find(|e| e.product_id == payload.product_id && e.size == size);

    let (entry, incremented) = match existing {
        Some(mut entry) => {
            entry.quantity = entry.quantity.saturating_add(1);
            let updated: CartEntry = state
                .api
                .update(Resource::Cart, &entry.id, &entry)
                .await?;
            (updated, true)
        }
        None => {
            let created: CartEntry = state
                .api
                .create(
                    Resource::Cart,
                    &NewCartEntry {
                        product_id: &payload.product_id,
                        size: &size,
                        quantity: 1,
                    },
                )
                .await?;
            (created, false)
        }
    };

    log_audit(
        None,
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({
            "product_id": entry.product_id,
            "size": entry.size,
            "quantity": entry.quantity,
        })),
    );

    Ok(ApiResponse::success(
        "Added to cart",
        AddToCartResponse { entry, incremented },
        None,
    ))
}

pub async fn change_quantity(
    state: &AppState,
    id: &str,
    payload: AdjustQuantityRequest,
) -> AppResult<ApiResponse<CartEntry>> {
    let _gate = state.gates.cart.lock().await;
    let mut entry: CartEntry = state.api.get(Resource::Cart, id).await?;
    entry.quantity = adjust_quantity(entry.quantity, payload.delta);
    let updated: CartEntry = state.api.update(Resource::Cart, id, &entry).await?;

    tracing::info!(entry_id = %id, quantity = updated.quantity, "cart quantity adjusted");
    Ok(ApiResponse::success("OK", updated, None))
}

pub async fn remove_from_cart(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let _gate = state.gates.cart.lock().await;
    state.api.delete(Resource::Cart, id).await?;

    log_audit(
        None,
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "entry_id": id })),
    );

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Snapshots the cart into an order, then deletes the cart entries one by
/// one. A failed delete aborts the loop and leaves the rest in the cart.
pub async fn checkout(state: &AppState) -> AppResult<ApiResponse<CheckoutResponse>> {
    let _gate = state.gates.cart.lock().await;
    let entries: Vec<CartEntry> = state.api.list(Resource::Cart).await?;
    if entries.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let snapshot = state.catalog.snapshot(&state.api).await?;
    let total_price = lines_total(&entries, snapshot.as_ref());
    let new_order = NewOrder {
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        total_price,
        items: entries.iter().map(OrderItem::from).collect(),
    };
    let order: Order = state.api.create(Resource::Orders, &new_order).await?;

    let mut cleared = 0;
    for entry in &entries {
        if let Err(err) = state.api.delete(Resource::Cart, &entry.id).await {
            tracing::warn!(
                order_id = %order.id,
                cleared,
                remaining = entries.len() - cleared,
                error = %err,
                "cart partially cleared after checkout"
            );
            return Err(err.into());
        }
        cleared += 1;
    }

    log_audit(
        None,
        "checkout",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "lines": cleared })),
    );

    Ok(ApiResponse::success(
        "Checkout success",
        CheckoutResponse {
            order,
            total_display: format_money(total_price),
            cleared_entries: cleared,
        },
        Some(Meta::empty()),
    ))
}
