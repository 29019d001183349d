//! Demo catalog and accounts, pushed through the configured backend.
//!
//! Records that already exist (same category name, product name or user
//! email) are left alone, so seeding twice is harmless.

use serde::Serialize;

use crate::{
    api::{ApiResult, MockApi, Resource},
    models::{Category, NewUser, Price, Product, Role, User},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedProduct<'a> {
    name: &'a str,
    description: &'a str,
    price: Price,
    image: &'a str,
    rating: f64,
    category_id: &'a str,
    size: &'a str,
}

const IMAGE: &str = "https://anhungcoffee.com/wp-content/uploads/2019/10/image2.jpg";

const CATEGORIES: [&str; 4] = ["Cappuccino", "Espresso", "Americano", "Macchiato"];

// (name, description, price, rating, category, size)
const PRODUCTS: [(&str, &str, f64, f64, &str, &str); 6] = [
    ("Cappuccino", "With Steamed Milk", 4.20, 4.5, "Cappuccino", "M"),
    ("Cappuccino Foam", "With Foam", 4.20, 4.2, "Cappuccino", "M"),
    ("Espresso", "Single shot", 3.10, 4.7, "Espresso", "S"),
    ("Americano", "Long black", 3.60, 4.1, "Americano", "L"),
    ("Caramel Macchiato", "Espresso with caramel", 5.40, 4.6, "Macchiato", "M"),
    ("Robusta Beans", "From Africa", 6.20, 4.4, "Espresso", "250gr"),
];

// (name, email, password, role)
const USERS: [(&str, &str, &str, Role); 2] = [
    ("Admin", "admin@lungo.app", "admin123", Role::ADMIN),
    ("Shopper", "user@lungo.app", "user123", Role::SHOPPER),
];

pub async fn seed_demo(api: &MockApi) -> ApiResult<SeedReport> {
    let mut report = SeedReport::default();

    let mut categories: Vec<Category> = api.list(Resource::Categories).await?;
    for name in CATEGORIES {
        if categories.iter().any(|c| c.name == name) {
            continue;
        }
        let created: Category = api
            .create(Resource::Categories, &serde_json::json!({ "name": name }))
            .await?;
        categories.push(created);
        report.categories += 1;
    }

    let products: Vec<Product> = api.list(Resource::Products).await?;
    for (name, description, price, rating, category, size) in PRODUCTS {
        if products.iter().any(|p| p.name == name) {
            continue;
        }
        let category_id = categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.id.as_str())
            .unwrap_or_default();
        let _: Product = api
            .create(
                Resource::Products,
                &SeedProduct {
                    name,
                    description,
                    price: Price::Amount(price),
                    image: IMAGE,
                    rating,
                    category_id,
                    size,
                },
            )
            .await?;
        report.products += 1;
    }

    let users: Vec<User> = api.list(Resource::Users).await?;
    for (name, email, password, role) in USERS {
        if users.iter().any(|u| u.email == email) {
            continue;
        }
        let _: User = api
            .create(
                Resource::Users,
                &NewUser {
                    name,
                    email,
                    password,
                    role,
                },
            )
            .await?;
        report.users += 1;
    }

    tracing::info!(
        categories = report.categories,
        products = report.products,
        users = report.users,
        "demo data seeded"
    );
    Ok(report)
}
