use axum::http::HeaderValue;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use geodist::config::Config;
use geodist::geocode::Geocoder;
use geodist::geocode::http::HttpGeocoder;
use geodist::intake::handlers::handle_submit_distance;
use geodist::queue::WorkQueue;
use geodist::queue::memory::InMemoryQueue;
use geodist::status::handlers::handle_get_result;
use geodist::store::ResultStore;
use geodist::store::memory::InMemoryStore;
use geodist::worker::worker::Worker;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8080".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let config = Config::from_env();
    tracing::info!("Starting distance service on {}", bind_addr);
    tracing::info!("Geocoding backend: {}", config.geocoder_url);

    // 1. Collaborators:
    let (queue, receiver) = InMemoryQueue::new();
    let queue: Arc<dyn WorkQueue> = Arc::new(queue);

    let geocoder: Arc<dyn Geocoder> = Arc::new(HttpGeocoder::new(&config.geocoder_url)?);

    let store: Option<Arc<dyn ResultStore>> = if config.store_enabled {
        Some(Arc::new(InMemoryStore::new()))
    } else {
        tracing::warn!("Result store disabled, results will not be persisted");
        None
    };

    // 2. Spawn the worker loop:
    let worker = Worker::new(geocoder, store.clone());
    tokio::spawn(async move {
        worker.run(receiver).await;
    });

    // 3. CORS: one configured origin on every response, wildcard only
    // when no origin is configured.
    let cors = match &config.allowed_origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>()?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => {
            tracing::warn!("ALLOWED_ORIGIN not set, allowing any origin");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    // 4. HTTP Router:
    let app = Router::new()
        .route("/distance", post(handle_submit_distance))
        .route("/result", get(handle_get_result))
        .layer(cors)
        .layer(Extension(queue))
        .layer(Extension(store));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
