//! Shared helpers for integration tests

use axum::Router;
use trade_alert_gateway::config::types::{
    AppConfig, AppSettings, AuthConfig, DispatchConfig, MarketDataConfig, ServerConfig,
};
use trade_alert_gateway::server::ApiServer;

/// Email whitelisted in the test configuration
pub const AUTHORIZED_EMAIL: &str = "trader@example.com";

/// Build an application config pointing at mock endpoints
pub fn test_config(webhook_url: &str, pre_open_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        auth: AuthConfig {
            authorized_users: format!("{AUTHORIZED_EMAIL}, backup@example.com"),
        },
        dispatch: DispatchConfig {
            webhook_url: webhook_url.to_string(),
        },
        market_data: MarketDataConfig {
            pre_open_url: pre_open_url.to_string(),
        },
        settings: AppSettings::default(),
    }
}

/// Build a router wired to the given mock endpoints
pub fn test_router(webhook_url: &str, pre_open_url: &str) -> Router {
    ApiServer::new(&test_config(webhook_url, pre_open_url))
        .expect("failed to build test server")
        .router()
}
