//! Quote API Server
//!
//! A small quote-management service: create, list, filter by author,
//! pick at random and delete quotes, all held in memory.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryQuoteRepository;
use app::QuoteService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub quote_service: Arc<QuoteService<InMemoryQuoteRepository>>,
}

impl AppState {
    pub fn new(quotes: Arc<InMemoryQuoteRepository>) -> Self {
        Self {
            quote_service: Arc::new(QuoteService::new(quotes)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/quotes",
            get(handlers::list_quotes).post(handlers::create_quote),
        )
        .route("/quotes/random", get(handlers::random_quote))
        .route("/quotes/:id", delete(handlers::delete_quote))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quote_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Quote API...");

    let config = Config::from_env().context("Failed to load configuration")?;

    // The store lives exactly as long as the server does
    let quote_repo = Arc::new(InMemoryQuoteRepository::with_id_assignment(
        config.id_assignment,
    ));
    tracing::info!(
        id_assignment = %quote_repo.id_assignment(),
        "In-memory quote store ready"
    );

    let app = build_router(AppState::new(quote_repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
