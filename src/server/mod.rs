//! HTTP server - JSON API over the composition core and its collaborators

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::AccessGate;
use crate::common::errors::{GatewayError, Result};
use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::market::MarketDataClient;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub gate: AccessGate,
    pub dispatcher: Dispatcher,
    pub market: MarketDataClient,
    pub market_timezone: String,
}

pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Build the server state from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let timeout = std::time::Duration::from_secs(config.settings.request_timeout_seconds);
        let state = AppState {
            gate: AccessGate::from_config(&config.auth),
            dispatcher: Dispatcher::with_timeout(&config.dispatch.webhook_url, timeout)?,
            market: MarketDataClient::with_timeout(&config.market_data.pre_open_url, timeout)?,
            market_timezone: config.settings.market_timezone.clone(),
        };
        Ok(Self {
            state: Arc::new(state),
        })
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/session", get(handlers::session))
            .route("/api/compose", post(handlers::compose_message))
            .route("/api/dispatch", post(handlers::dispatch_message))
            .route("/api/market/pre-open", get(handlers::pre_open))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the server listening on the specified address
    pub async fn serve(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Internal(format!("failed to bind {addr}: {e}")))?;
        tracing::info!("Trade alert gateway listening on {}", addr);

        axum::serve(listener, self.router())
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(())
    }
}
