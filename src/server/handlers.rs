//! HTTP handlers for the gateway API

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::common::errors::GatewayError;
use crate::compose::{self, TradeForm};
use crate::server::AppState;

/// Header the fronting identity proxy places the authenticated email in
pub const PRINCIPAL_HEADER: &str = "x-auth-email";

#[derive(Serialize)]
pub struct SessionResponse {
    /// Expiry label for the current session ("DD Mon")
    pub expiry: String,
    /// Convenience mirror of the access gate; the dispatch check is the
    /// authoritative one
    pub authorized: bool,
}

#[derive(Serialize)]
pub struct ComposeResponse {
    pub message: String,
}

#[derive(Deserialize)]
pub struct DispatchRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: GatewayError) -> ApiError {
    let (status, upstream_status) = match &err {
        GatewayError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, None),
        GatewayError::Authorization(_) => (StatusCode::FORBIDDEN, None),
        GatewayError::Dispatch { .. } => (StatusCode::BAD_GATEWAY, None),
        GatewayError::Upstream { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Some(*status),
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            status: upstream_status,
        }),
    )
}

fn principal(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(PRINCIPAL_HEADER)
        .and_then(|value| value.to_str().ok())
}

fn session_expiry(state: &AppState) -> Result<String, ApiError> {
    let today = compose::today_in(&state.market_timezone).map_err(error_response)?;
    Ok(compose::expiry_label(compose::next_expiry(today)))
}

/// Session info: the expiry label and whether the caller is whitelisted
pub async fn session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let expiry = session_expiry(&state)?;
    let authorized = principal(&headers)
        .map(|email| state.gate.is_authorized(email))
        .unwrap_or(false);
    Ok(Json(SessionResponse { expiry, authorized }))
}

/// Validate a trade form and return the composed preview text
///
/// Pure preview: no authorization needed and nothing leaves the process.
pub async fn compose_message(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TradeForm>,
) -> Result<Json<ComposeResponse>, ApiError> {
    let expiry = session_expiry(&state)?;
    let message = compose::compose_form(&form, &expiry).map_err(error_response)?;
    Ok(Json(ComposeResponse { message }))
}

/// Send a confirmed message to the messaging webhook
///
/// The access gate here is the sole authoritative whitelist check.
pub async fn dispatch_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .gate
        .authorize(principal(&headers))
        .map_err(error_response)?;

    if request.message.trim().is_empty() {
        return Err(error_response(GatewayError::validation(
            "message must not be empty",
        )));
    }

    state.dispatcher.dispatch(&request.message).await.map_err(|err| {
        warn!("Dispatch failed: {}", err);
        error_response(err)
    })?;

    info!("Alert dispatched");
    Ok(Json(AckResponse { ok: true }))
}

/// Proxy the upstream pre-open market snapshot
pub async fn pre_open(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let snapshot = state
        .market
        .pre_open_snapshot()
        .await
        .map_err(error_response)?;
    Ok(Json(snapshot))
}
