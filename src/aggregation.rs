//! List processing shared by the catalog, cart, favourites and order history:
//! filtering, merging duplicate line items, joining lines to products and
//! computing totals.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CartEntry, OrderItem, Product};

/// Category id that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";
pub const PLACEHOLDER_NAME: &str = "Unknown product";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50";

/// A product reference with a quantity and size.
pub trait LineItem {
    fn line_id(&self) -> &str;
    fn product_id(&self) -> &str;
    fn size(&self) -> &str;
    fn quantity(&self) -> u32;
    fn add_quantity(&mut self, extra: u32);
}

impl LineItem for CartEntry {
    fn line_id(&self) -> &str {
        &self.id
    }
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn size(&self) -> &str {
        &self.size
    }
    fn quantity(&self) -> u32 {
        self.quantity
    }
    fn add_quantity(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }
}

impl LineItem for OrderItem {
    fn line_id(&self) -> &str {
        &self.id
    }
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn size(&self) -> &str {
        &self.size
    }
    fn quantity(&self) -> u32 {
        self.quantity
    }
    fn add_quantity(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }
}

/// Resolves a product id against some product collection.
pub trait ProductLookup {
    fn find_product(&self, id: &str) -> Option<&Product>;
}

impl ProductLookup for [Product] {
    fn find_product(&self, id: &str) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }
}

impl ProductLookup for Vec<Product> {
    fn find_product(&self, id: &str) -> Option<&Product> {
        self.as_slice().find_product(id)
    }
}

/// Products matching the selected category and search text, in source order.
///
/// `None`, empty or `"all"` disables the category filter; category ids
/// compare case-insensitively. Search is a case-insensitive substring match
/// on the name and is skipped when blank.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Product> {
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
        .map(str::to_lowercase);
    let search = search
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase);

    products
        .iter()
        .filter(|p| match &category {
            Some(c) => p.category_id.to_lowercase() == *c,
            None => true,
        })
        .filter(|p| match &search {
            Some(s) => p.name.to_lowercase().contains(s.as_str()),
            None => true,
        })
        .collect()
}

/// Collapses lines sharing a product id, summing their quantities.
///
/// The first line seen for a product keeps its id and size; output follows
/// first-appearance order.
pub fn merge_line_items<T>(items: &[T]) -> Vec<T>
where
    T: LineItem + Clone,
{
    let mut merged: Vec<T> = Vec::with_capacity(items.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in items {
        match index.get(item.product_id()) {
            Some(&pos) => merged[pos].add_quantity(item.quantity()),
            None => {
                index.insert(item.product_id().to_string(), merged.len());
                merged.push(item.clone());
            }
        }
    }
    merged
}

/// Unit price of a product, 0 when the product is unknown or its price
/// does not parse.
pub fn unit_price<L>(catalog: &L, product_id: &str) -> f64
where
    L: ProductLookup + ?Sized,
{
    catalog
        .find_product(product_id)
        .and_then(|p| p.price.amount())
        .unwrap_or(0.0)
}

/// Sum of unit price times quantity over all lines. Not rounded; an empty
/// list totals `0.0` (not the `-0.0` that `f64::sum` starts from).
pub fn lines_total<T, L>(lines: &[T], catalog: &L) -> f64
where
    T: LineItem,
    L: ProductLookup + ?Sized,
{
    lines
        .iter()
        .map(|line| unit_price(catalog, line.product_id()) * f64::from(line.quantity()))
        .fold(0.0, |acc, line_total| acc + line_total)
}

/// Applies `delta` to a quantity, never going below 1.
pub fn adjust_quantity(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(1, i64::from(u32::MAX)) as u32
}

pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Display-ready line joined to its product.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LineRow {
    pub line_id: String,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    /// False when the product no longer exists and placeholders are shown.
    pub available: bool,
}

pub fn join_lines<T, L>(lines: &[T], catalog: &L) -> Vec<LineRow>
where
    T: LineItem,
    L: ProductLookup + ?Sized,
{
    lines
        .iter()
        .map(|line| {
            let product = catalog.find_product(line.product_id());
            let unit_price = product.and_then(|p| p.price.amount()).unwrap_or(0.0);
            LineRow {
                line_id: line.line_id().to_string(),
                product_id: line.product_id().to_string(),
                name: product
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
                description: product.map(|p| p.description.clone()).unwrap_or_default(),
                image: product
                    .map(|p| p.image.clone())
                    .filter(|img| !img.is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                size: line.size().to_string(),
                quantity: line.quantity(),
                unit_price,
                line_total: unit_price * f64::from(line.quantity()),
                available: product.is_some(),
            }
        })
        .collect()
}
