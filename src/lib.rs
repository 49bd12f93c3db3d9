//! TradeAlertGateway Library
//!
//! A Rust service that composes Nifty weekly option trade-alert messages
//! and dispatches them to a messaging-bot webhook.

pub mod auth;
pub mod common;
pub mod compose;
pub mod config;
pub mod dispatch;
pub mod market;
pub mod server;

// Re-export commonly used types
pub use auth::AccessGate;
pub use common::errors::{GatewayError, Result};
pub use common::types::{
    ExitMode, MarketDirection, OptionSide, SquareOffTemplate, Strike, TradeAction, TradeCategory,
    TradeIntent,
};
pub use compose::{band, compose, compose_form, expiry_label, next_expiry, TradeForm};
pub use config::types::AppConfig;
pub use dispatch::Dispatcher;
pub use market::MarketDataClient;
pub use server::{ApiServer, AppState};
