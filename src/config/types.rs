//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Whitelist of authorized traders
    #[serde(default)]
    pub auth: AuthConfig,
    /// Messaging-bot webhook configuration
    pub dispatch: DispatchConfig,
    /// Upstream market-data configuration
    #[serde(default)]
    pub market_data: MarketDataConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the API server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Whitelist configuration for the access gate
///
/// Passed explicitly into `AccessGate`; nothing reads the whitelist from
/// ambient process state after startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated list of authorized email addresses
    #[serde(default)]
    pub authorized_users: String,
}

/// Messaging-bot webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Webhook URL the composed message is POSTed to
    pub webhook_url: String,
}

/// Upstream market-data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataConfig {
    /// Pre-open market snapshot endpoint
    #[serde(default = "default_pre_open_url")]
    pub pre_open_url: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            pre_open_url: default_pre_open_url(),
        }
    }
}

fn default_pre_open_url() -> String {
    "https://www.nseindia.com/api/market-data-pre-open?key=NIFTY".to_string()
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Request timeout in seconds for outbound HTTP calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Timezone the expiry calendar runs on
    #[serde(default = "default_market_timezone")]
    pub market_timezone: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request_timeout_seconds: default_request_timeout(),
            market_timezone: default_market_timezone(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_market_timezone() -> String {
    "Asia/Kolkata".to_string()
}
