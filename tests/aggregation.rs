use lungo_storefront::{
    aggregation::{
        PLACEHOLDER_IMAGE, PLACEHOLDER_NAME, adjust_quantity, filter_products, format_money,
        join_lines, lines_total, merge_line_items,
    },
    models::{CartEntry, OrderItem, Price, Product, Role},
    navigation::{RouteTable, Screen},
};

fn product(id: &str, name: &str, price: Price, category_id: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: format!("{name} description"),
        price,
        image: format!("https://img.example/{id}.jpg"),
        rating: 4.5,
        category_id: category_id.into(),
        size: "M".into(),
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("1", "Cappuccino", Price::Amount(4.20), "1"),
        product("2", "Cappuccino Foam", Price::Text("$4.20".into()), "1"),
        product("3", "Espresso", Price::Text("3.10".into()), "2"),
        product("4", "Robusta Beans", Price::Amount(6.20), "2"),
    ]
}

fn item(id: &str, product_id: &str, quantity: u32) -> OrderItem {
    OrderItem {
        id: id.into(),
        product_id: product_id.into(),
        quantity,
        size: "M".into(),
    }
}

fn cart_entry(id: &str, product_id: &str, quantity: u32) -> CartEntry {
    CartEntry {
        id: id.into(),
        product_id: product_id.into(),
        size: "S".into(),
        quantity,
    }
}

#[test]
fn category_all_and_empty_search_keep_everything() {
    let products = catalog();
    assert_eq!(filter_products(&products, Some("all"), Some("")).len(), 4);
    assert_eq!(filter_products(&products, None, Some("   ")).len(), 4);
    assert_eq!(filter_products(&products, Some(""), None).len(), 4);
}

#[test]
fn filter_combines_category_and_search() {
    let products = catalog();

    let in_category: Vec<&str> = filter_products(&products, Some("2"), None)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(in_category, vec!["Espresso", "Robusta Beans"]);

    let searched: Vec<&str> = filter_products(&products, Some("1"), Some("FOAM"))
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(searched, vec!["Cappuccino Foam"]);

    assert!(filter_products(&products, Some("2"), Some("capp")).is_empty());
    assert!(filter_products(&products, Some("missing"), None).is_empty());
}

#[test]
fn merge_sums_quantities_per_product_in_first_seen_order() {
    let merged = merge_line_items(&[item("a", "1", 2), item("b", "1", 3), item("c", "2", 1)]);

    assert_eq!(merged.len(), 2);
    assert_eq!((merged[0].product_id.as_str(), merged[0].quantity), ("1", 5));
    assert_eq!(merged[0].id, "a");
    assert_eq!((merged[1].product_id.as_str(), merged[1].quantity), ("2", 1));
}

#[test]
fn merge_keeps_total_quantity() {
    let items = vec![
        item("a", "3", 1),
        item("b", "1", 4),
        item("c", "3", 2),
        item("d", "4", 1),
        item("e", "1", 1),
    ];
    let merged = merge_line_items(&items);

    let before: u32 = items.iter().map(|i| i.quantity).sum();
    let after: u32 = merged.iter().map(|i| i.quantity).sum();
    assert_eq!(before, after);
    let order: Vec<&str> = merged.iter().map(|i| i.product_id.as_str()).collect();
    assert_eq!(order, vec!["3", "1", "4"]);
}

#[test]
fn cart_total_formats_to_two_decimals() {
    let products = catalog();
    let lines = vec![cart_entry("1", "1", 2), cart_entry("2", "4", 1)];

    let total = lines_total(&lines, &products);
    assert_eq!(format_money(total), "14.60");
    assert_eq!(format_money(0.0), "0.00");
}

#[test]
fn empty_lines_total_displays_zero() {
    let products = catalog();
    let total = lines_total(&Vec::<CartEntry>::new(), &products);
    assert!(total.is_sign_positive());
    assert_eq!(format_money(total), "0.00");
    assert_eq!(format_money(lines_total(&Vec::<OrderItem>::new(), &Vec::<Product>::new())), "0.00");
}

#[test]
fn text_prices_with_currency_sign_parse() {
    let products = catalog();
    let total = lines_total(&[cart_entry("1", "2", 3)], &products);
    assert_eq!(format_money(total), "12.60");
}

#[test]
fn quantity_never_drops_below_one() {
    assert_eq!(adjust_quantity(1, -1), 1);
    assert_eq!(adjust_quantity(3, -10), 1);
    assert_eq!(adjust_quantity(2, 1), 3);
}

#[test]
fn missing_product_renders_placeholder_row() {
    let products = catalog();
    let rows = join_lines(&[cart_entry("9", "404", 2), cart_entry("1", "3", 1)], &products);

    assert_eq!(rows[0].name, PLACEHOLDER_NAME);
    assert_eq!(rows[0].image, PLACEHOLDER_IMAGE);
    assert_eq!(rows[0].unit_price, 0.0);
    assert!(!rows[0].available);

    assert_eq!(rows[1].name, "Espresso");
    assert!((rows[1].line_total - 3.10).abs() < 1e-9);
    assert!(rows[1].available);
    assert_eq!(lines_total(&[cart_entry("9", "404", 2)], &products), 0.0);
}

#[test]
fn route_table_scopes_screens_by_role() {
    let table = RouteTable::default();

    let shopper = table.routes_for(Role::SHOPPER).expect("shopper routes");
    assert_eq!(shopper.entry.screen, Screen::Home);
    assert!(shopper.allows(Screen::Cart));
    assert!(!shopper.allows(Screen::AdminProduct));

    let admin = table.routes_for(Role::ADMIN).expect("admin routes");
    assert_eq!(admin.entry.screen, Screen::AdminProduct);
    assert!(admin.allows(Screen::AdminCategory));
    assert!(!admin.allows(Screen::Payment));

    assert!(table.entry_for(Role(7)).is_none());
}

#[test]
fn role_accepts_numbers_strings_and_missing() {
    let parse = |raw: &str| serde_json::from_str::<lungo_storefront::models::User>(raw);

    let admin = parse(r#"{"id":"1","email":"a@b.c","role":"2"}"#).expect("string role");
    assert!(admin.role.is_admin());
    let numeric = parse(r#"{"id":"1","email":"a@b.c","role":1}"#).expect("numeric role");
    assert_eq!(numeric.role, Role::SHOPPER);
    let missing = parse(r#"{"id":"1","email":"a@b.c"}"#).expect("missing role");
    assert_eq!(missing.role, Role::SHOPPER);
}
