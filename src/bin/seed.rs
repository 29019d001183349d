use lungo_storefront::{config::AppConfig, seed::seed_demo, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.uses_memory_backend() {
        anyhow::bail!("MOCK_API_URL=memory is seeded on server start; point it at a remote API");
    }
    let state = AppState::from_config(&config)?;
    let report = seed_demo(&state.api).await?;

    println!(
        "Seed completed against {}: {} categories, {} products, {} users created",
        config.mock_api_url, report.categories, report.products, report.users
    );
    Ok(())
}
