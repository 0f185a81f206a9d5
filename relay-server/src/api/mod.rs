pub(crate) mod health;
pub(crate) mod notion;
pub(crate) mod root;

use crate::state::AppState;
use axum::Router;

/// Combines all API routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(notion::router())
}
