//! Access gate - email whitelist check against an authenticated principal
//!
//! The gate is built once from [`AuthConfig`] at startup and passed into the
//! server state; it never reads ambient process state. The check at the
//! dispatch boundary is the authoritative one, the session endpoint only
//! mirrors it for client convenience.

use std::collections::HashSet;

use crate::common::errors::{GatewayError, Result};
use crate::config::types::AuthConfig;

/// Email whitelist for the single authorized trader (and any delegates)
#[derive(Debug, Clone)]
pub struct AccessGate {
    allowed: HashSet<String>,
}

impl AccessGate {
    /// Build the gate from the comma-separated whitelist in configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        let allowed = config
            .authorized_users
            .split(',')
            .map(|email| email.trim().to_ascii_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        Self { allowed }
    }

    /// Whether the given email is on the whitelist
    pub fn is_authorized(&self, email: &str) -> bool {
        self.allowed.contains(&email.trim().to_ascii_lowercase())
    }

    /// Authoritative check at the dispatch boundary
    ///
    /// A missing principal and a non-whitelisted one are both authorization
    /// failures; neither may reach the dispatcher.
    pub fn authorize(&self, email: Option<&str>) -> Result<()> {
        match email {
            None => Err(GatewayError::Authorization(
                "no authenticated principal".to_string(),
            )),
            Some(email) if self.is_authorized(email) => Ok(()),
            Some(email) => Err(GatewayError::Authorization(format!(
                "{email} is not authorized"
            ))),
        }
    }
}
