//! Gym membership pricing.
//!
//! The [`pricing`] engine validates and prices membership requests against
//! fixed plan and feature catalogs. [`shell`] drives it interactively and
//! [`app`] exposes it as a JSON quote API.

pub mod config;
pub mod error;
pub mod pricing;
pub mod shell;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::pricing::PricingEngine;

/// Shared state for HTTP handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub engine: PricingEngine,
}

impl AppState {
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }
}

/// Build the quote API router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directive`. Logs always go to stderr so
/// they stay out of the interactive prompts on stdout.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
