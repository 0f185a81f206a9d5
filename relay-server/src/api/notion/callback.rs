use super::log_upstream_error;
use crate::errors::ApiError;
use crate::models::{RelayFailure, RelaySuccess};
use crate::openapi::NOTION_TAG;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};
use log::{info, warn};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters Notion appends to the redirect URI
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct CallbackQuery {
    /// Authorization code issued after the user granted access
    code: Option<String>,
    /// Error reported by Notion, e.g. `access_denied`
    error: Option<String>,
}

impl CallbackQuery {
    /// Builds the query from raw pairs; a repeated key keeps its last value
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self {
            code: None,
            error: None,
        };
        for (key, value) in pairs {
            match key.as_str() {
                "code" => query.code = Some(value),
                "error" => query.error = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// OAuth redirect target: exchanges the authorization code for an access token
#[utoipa::path(
    get,
    path = "/auth/notion/callback",
    tag = NOTION_TAG,
    params(CallbackQuery),
    responses(
        (status = 200, description = "Token exchange succeeded", body = RelaySuccess),
        (status = 400, description = "Authorization failed or no code received", body = RelayFailure),
        (status = 502, description = "Notion rejected the exchange", body = RelayFailure),
        (status = 503, description = "Notion could not be reached", body = RelayFailure),
        (status = 504, description = "Notion did not answer in time", body = RelayFailure)
    )
)]
pub(crate) async fn callback_handler(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match pairs {
        Ok(Query(pairs)) => CallbackQuery::from_pairs(pairs),
        Err(rejection) => {
            warn!("Malformed OAuth callback query: {}", rejection);
            return ApiError::bad_request(format!("Invalid callback query: {}", rejection))
                .into_response();
        }
    };

    if let Some(error) = query.error.as_deref().filter(|e| !e.is_empty()) {
        warn!("Notion authorization failed: {}", error);
        return ApiError::bad_request(format!("Authorization failed: {}", error)).into_response();
    }

    let Some(code) = query.code.as_deref().filter(|c| !c.is_empty()) else {
        warn!("OAuth callback received without an authorization code");
        return ApiError::bad_request("No authorization code received").into_response();
    };

    info!("Exchanging authorization code with Notion");
    match state.notion.exchange_code(code).await {
        Ok(data) => {
            info!("Authorization code exchange succeeded");
            RelaySuccess::new(data).into_response()
        }
        Err(err) => {
            log_upstream_error("authorization code exchange", &err);
            ApiError::from(err).into_response()
        }
    }
}
