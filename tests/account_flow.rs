use std::time::Duration;

use lungo_storefront::{
    api::MockApi,
    dto::{
        auth::{LoginRequest, RegisterRequest, UpdateAccountRequest},
        products::{CategoryPayload, ProductPayload},
    },
    error::AppError,
    middleware::auth::{AuthUser, decode_token},
    models::{Price, Role},
    navigation::Screen,
    routes::params::CatalogQuery,
    seed::seed_demo,
    services::{account_service, admin_service, auth_service, catalog_service},
    state::AppState,
};

const SECRET: &str = "test-secret";

// A long TTL so catalog changes only show up through invalidation.
async fn seeded_state() -> anyhow::Result<AppState> {
    let state = AppState::new(MockApi::memory(), Duration::from_secs(300), SECRET);
    seed_demo(&state.api).await?;
    Ok(state)
}

fn register(name: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.into(),
        email: email.into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
    }
}

fn product_payload(name: &str, price: Price, category_id: &str) -> ProductPayload {
    ProductPayload {
        name: name.into(),
        description: "Iced".into(),
        price,
        image: String::new(),
        rating: 0.0,
        category_id: category_id.into(),
        size: "M".into(),
    }
}

#[tokio::test]
async fn register_validates_fields_and_unique_email() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let blank = auth_service::register_user(&state, register("", "a@b.c", "pw", "pw")).await;
    assert!(matches!(blank, Err(AppError::BadRequest(msg)) if msg == "Please fill out all fields."));

    let mismatch =
        auth_service::register_user(&state, register("Ann", "ann@lungo.app", "pw1", "pw2")).await;
    assert!(matches!(mismatch, Err(AppError::BadRequest(msg)) if msg == "Passwords do not match."));

    let created =
        auth_service::register_user(&state, register("Ann", "ann@lungo.app", "pw", "pw")).await?;
    let profile = created.data.expect("profile");
    assert_eq!(profile.role, Role::SHOPPER);

    let taken =
        auth_service::register_user(&state, register("Ann", "ANN@lungo.app", "pw", "pw")).await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    let logged_in = auth_service::login_user(&state, login("ann@lungo.app", "pw")).await?;
    assert_eq!(logged_in.data.expect("login").entry.screen, Screen::Home);
    Ok(())
}

#[tokio::test]
async fn login_routes_each_role_to_its_entry_screen() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let wrong = auth_service::login_user(&state, login("user@lungo.app", "nope")).await;
    assert!(matches!(wrong, Err(AppError::BadRequest(_))));

    let admin = auth_service::login_user(&state, login("admin@lungo.app", "admin123"))
        .await?
        .data
        .expect("login");
    assert_eq!(admin.entry.screen, Screen::AdminProduct);
    assert_eq!(admin.entry.path, "/api/admin/products");

    let token = admin.token.strip_prefix("Bearer ").expect("bearer prefix");
    let claims = decode_token(token, SECRET)?;
    assert_eq!(claims.role, Role::ADMIN);
    assert_eq!(claims.user_id, admin.user.id);
    assert!(decode_token(token, "other-secret").is_err());

    let shopper = auth_service::login_user(&state, login("user@lungo.app", "user123"))
        .await?
        .data
        .expect("login");
    assert_eq!(shopper.entry.screen, Screen::Home);
    Ok(())
}

#[tokio::test]
async fn login_rejects_empty_password_for_passwordless_record() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let _: serde_json::Value = state
        .api
        .create(
            lungo_storefront::api::Resource::Users,
            &serde_json::json!({ "name": "Legacy", "email": "legacy@lungo.app", "role": 1 }),
        )
        .await?;

    let result = auth_service::login_user(&state, login("legacy@lungo.app", "")).await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid email or password"));
    Ok(())
}

#[tokio::test]
async fn account_update_rejects_email_of_another_user() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let shopper = auth_service::login_user(&state, login("user@lungo.app", "user123"))
        .await?
        .data
        .expect("login");
    let user = AuthUser {
        user_id: shopper.user.id.clone(),
        role: shopper.user.role,
    };
    let update = |email: &str| UpdateAccountRequest {
        name: "Sam".into(),
        email: email.into(),
        password: None,
        retype_password: None,
    };

    let taken = account_service::update_account(&state, &user, update("Admin@Lungo.app")).await;
    assert!(matches!(taken, Err(AppError::BadRequest(msg)) if msg == "Email is already taken"));

    // Keeping one's own email is not a conflict.
    account_service::update_account(&state, &user, update("USER@lungo.app")).await?;

    let admin = auth_service::login_user(&state, login("admin@lungo.app", "admin123"))
        .await?
        .data
        .expect("login");
    assert_eq!(admin.user.role, Role::ADMIN);
    Ok(())
}

#[tokio::test]
async fn account_update_keeps_password_unless_given() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let shopper = auth_service::login_user(&state, login("user@lungo.app", "user123"))
        .await?
        .data
        .expect("login");
    let user = AuthUser {
        user_id: shopper.user.id.clone(),
        role: shopper.user.role,
    };

    let mismatch = account_service::update_account(
        &state,
        &user,
        UpdateAccountRequest {
            name: "Sam".into(),
            email: "user@lungo.app".into(),
            password: Some("a".into()),
            retype_password: Some("b".into()),
        },
    )
    .await;
    assert!(matches!(mismatch, Err(AppError::BadRequest(_))));

    let updated = account_service::update_account(
        &state,
        &user,
        UpdateAccountRequest {
            name: "Sam".into(),
            email: "sam@lungo.app".into(),
            password: None,
            retype_password: None,
        },
    )
    .await?;
    assert_eq!(updated.data.expect("profile").name, "Sam");

    auth_service::login_user(&state, login("sam@lungo.app", "user123")).await?;

    let routes = account_service::routes_for(&state, &user)?.data.expect("routes");
    assert!(routes.allows(Screen::OrderHistory));
    Ok(())
}

#[tokio::test]
async fn admin_operations_require_admin_role() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let shopper = AuthUser {
        user_id: "2".into(),
        role: Role::SHOPPER,
    };

    let denied = admin_service::create_product(
        &state,
        &shopper,
        product_payload("Iced Latte", Price::Amount(5.0), "1"),
    )
    .await;
    assert!(matches!(denied, Err(AppError::Forbidden)));

    let denied = admin_service::delete_category(&state, &shopper, "1").await;
    assert!(matches!(denied, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn admin_changes_refresh_the_shared_catalog() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let admin = AuthUser {
        user_id: "1".into(),
        role: Role::ADMIN,
    };

    // Warm the snapshot before mutating.
    let before = catalog_service::list_products(&state, CatalogQuery::default()).await?;
    assert_eq!(before.data.expect("products").items.len(), 6);

    let blank = admin_service::create_product(
        &state,
        &admin,
        product_payload("", Price::Amount(5.0), "1"),
    )
    .await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let bad_price = admin_service::create_product(
        &state,
        &admin,
        product_payload("Iced Latte", Price::Text("five".into()), "1"),
    )
    .await;
    assert!(matches!(bad_price, Err(AppError::BadRequest(_))));

    let created = admin_service::create_product(
        &state,
        &admin,
        product_payload("Iced Latte", Price::Text("5.50".into()), "1"),
    )
    .await?
    .data
    .expect("product");

    let query = CatalogQuery {
        category: None,
        q: Some("iced".into()),
    };
    let found = catalog_service::list_products(&state, query).await?;
    assert_eq!(found.data.expect("products").items[0].id, created.id);

    let category = admin_service::create_category(
        &state,
        &admin,
        CategoryPayload {
            name: "Cold Brew".into(),
        },
    )
    .await?
    .data
    .expect("category");
    let categories = catalog_service::list_categories(&state).await?;
    assert!(
        categories
            .data
            .expect("categories")
            .items
            .iter()
            .any(|c| c.id == category.id)
    );

    admin_service::delete_product(&state, &admin, &created.id).await?;
    let after = catalog_service::list_products(&state, CatalogQuery::default()).await?;
    assert_eq!(after.data.expect("products").items.len(), 6);
    Ok(())
}
