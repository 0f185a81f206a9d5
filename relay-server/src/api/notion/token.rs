use super::log_upstream_error;
use crate::errors::ApiError;
use crate::models::{RelayFailure, RelaySuccess, TokenRequest};
use crate::openapi::NOTION_TAG;
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use log::{info, warn};

#[utoipa::path(
    post,
    path = "/auth/notion/introspect",
    tag = NOTION_TAG,
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Introspection result from Notion", body = RelaySuccess),
        (status = 400, description = "Missing token", body = RelayFailure),
        (status = 502, description = "Notion rejected the request", body = RelayFailure)
    )
)]
pub(crate) async fn introspect_handler(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Response {
    if request.token.is_empty() {
        warn!("Empty token in introspection request");
        return ApiError::bad_request("token is required").into_response();
    }

    match state.notion.introspect_token(&request.token).await {
        Ok(data) => RelaySuccess::new(data).into_response(),
        Err(err) => {
            log_upstream_error("token introspection", &err);
            ApiError::from(err).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/auth/notion/revoke",
    tag = NOTION_TAG,
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token revoked", body = RelaySuccess),
        (status = 400, description = "Missing token", body = RelayFailure),
        (status = 502, description = "Notion rejected the request", body = RelayFailure)
    )
)]
pub(crate) async fn revoke_handler(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Response {
    if request.token.is_empty() {
        warn!("Empty token in revocation request");
        return ApiError::bad_request("token is required").into_response();
    }

    match state.notion.revoke_token(&request.token).await {
        Ok(data) => {
            info!("Access token revoked");
            RelaySuccess::new(data).into_response()
        }
        Err(err) => {
            log_upstream_error("token revocation", &err);
            ApiError::from(err).into_response()
        }
    }
}
