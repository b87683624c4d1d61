// ABOUTME: Trygo API server entry point
// ABOUTME: Wires storage, adapters, and the axum router together

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;
use trygo_ai::{ImageService, OpenAiService};
use trygo_api::AppState;
use trygo_storage::StorageConfig;
use trygo_wordpress::WordPressClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    println!("🚀 Starting Trygo server...");
    println!("📡 Server will run on http://localhost:{}", config.port);
    println!("🔗 CORS origin: {}", config.cors_origin);

    let mut storage_config = StorageConfig::default();
    if let Some(path) = &config.database_path {
        storage_config.database_path = path.clone();
    }
    let pool = trygo_storage::connect(&storage_config).await?;

    let state = AppState::new(
        pool,
        Arc::new(OpenAiService::new()),
        Arc::new(ImageService::new()),
        Arc::new(WordPressClient::new()),
    );

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = trygo_api::create_app(state).layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("✅ Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
