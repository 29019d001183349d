use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Product price as stored upstream: either a JSON number or a string such
/// as `"4.20"` or `"$4.20"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(value) => Some(*value),
            Price::Text(text) => text.trim().trim_start_matches('$').trim().parse().ok(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Price::Text(text) if text.trim().is_empty())
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

/// User role code. 1 is a shopper, 2 an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Role(pub u8);

impl Role {
    pub const SHOPPER: Role = Role(1);
    pub const ADMIN: Role = Role(2);

    pub fn is_admin(&self) -> bool {
        *self == Role::ADMIN
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::SHOPPER
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(u8),
            Text(String),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Role::default()),
            Some(Repr::Code(code)) => Ok(Role(code)),
            Some(Repr::Text(text)) if text.trim().is_empty() => Ok(Role::default()),
            Some(Repr::Text(text)) => text
                .trim()
                .parse::<u8>()
                .map(Role)
                .map_err(|_| serde::de::Error::custom(format!("invalid role {text:?}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: String,
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub size: String,
}

impl From<&CartEntry> for OrderItem {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.clone(),
            product_id: entry.product_id.clone(),
            quantity: entry.quantity,
            size: entry.size.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteEntry {
    #[serde(default)]
    pub id: String,
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    #[schema(value_type = u8)]
    pub role: Role,
}

// Request bodies sent upstream on create.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartEntry<'a> {
    pub product_id: &'a str,
    pub size: &'a str,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavourite<'a> {
    pub product_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub date: String,
    pub total_price: f64,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}
