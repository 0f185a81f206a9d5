//! Relay endpoints for the Notion OAuth flow.
//!
//! The callback completes the authorization code exchange; introspection and
//! revocation forward an access token to the matching Notion endpoint. Every
//! route answers with the `{ok, message?, data?}` envelope.

pub(crate) mod callback;
pub(crate) mod token;

use crate::notion_client::UpstreamError;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use log::{error, warn};

/// Creates the Notion OAuth routes
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/notion/callback", get(callback::callback_handler))
        .route("/auth/notion/introspect", post(token::introspect_handler))
        .route("/auth/notion/revoke", post(token::revoke_handler))
}

/// Upstream rejections are logged as warnings, transport and parse failures as errors
fn log_upstream_error(operation: &str, err: &UpstreamError) {
    match err {
        UpstreamError::Rejected { status, .. } => {
            warn!("Notion rejected {} with status {}", operation, status)
        }
        _ => error!("Notion {} failed: {}", operation, err),
    }
}
