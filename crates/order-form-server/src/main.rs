mod orders;
mod routes;

use anyhow::{Context, Result};
use order_form::OrderFormConfig;
use orders::OrderStore;
use routes::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config_path =
        std::env::var("ORDER_FORM_CONFIG").unwrap_or_else(|_| "order-form.toml".to_string());
    let config = OrderFormConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}, using defaults", e);
        OrderFormConfig::default()
    });

    let host = std::env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let context = config.cart.to_context();
    info!(
        items = context.item_count(),
        price = context.price,
        "serving order form"
    );

    let state = AppState::new(context, OrderStore::new(), config.form.clone());
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// `RUST_LOG`-style directives, falling back to `info` when unset or malformed
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
