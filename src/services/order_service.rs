use crate::{
    aggregation::{format_money, join_lines, merge_line_items},
    api::Resource,
    dto::orders::{OrderList, OrderView},
    error::AppResult,
    models::Order,
    response::{ApiResponse, Meta},
    state::AppState,
    store::CatalogSnapshot,
};

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let (orders, snapshot) = tokio::try_join!(
        state.api.list::<Order>(Resource::Orders),
        state.catalog.snapshot(&state.api),
    )?;

    let items: Vec<OrderView> = orders
        .into_iter()
        .map(|order| order_view(order, &snapshot))
        .collect();

    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<OrderView>> {
    let (order, snapshot) = tokio::try_join!(
        state.api.get::<Order>(Resource::Orders, id),
        state.catalog.snapshot(&state.api),
    )?;

    Ok(ApiResponse::success(
        "OK",
        order_view(order, &snapshot),
        Some(Meta::empty()),
    ))
}

fn order_view(order: Order, catalog: &CatalogSnapshot) -> OrderView {
    let items = merge_line_items(&order.items);
    let rows = join_lines(&items, catalog);
    OrderView {
        id: order.id,
        date: order.date,
        total_price: order.total_price,
        total_display: format_money(order.total_price.unwrap_or(0.0)),
        items,
        rows,
    }
}
