//! Common module - error and domain types shared across the gateway

pub mod errors;
pub mod types;
