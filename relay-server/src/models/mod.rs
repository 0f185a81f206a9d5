use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Successful relay response carrying the Notion response body unmodified
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct RelaySuccess {
    /// Always `true`
    pub ok: bool,
    /// Body returned by Notion
    pub data: Value,
}

impl RelaySuccess {
    pub fn new(data: Value) -> Self {
        Self { ok: true, data }
    }
}

impl IntoResponse for RelaySuccess {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failed relay response
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct RelayFailure {
    /// Always `false`
    pub ok: bool,
    /// Human readable description of the failure
    pub message: String,
    /// Body returned by Notion, when the failure came from the upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Body of the token introspection and revocation endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct TokenRequest {
    /// Access token issued by Notion
    pub token: String,
}

/// Fixed service status returned by the root path
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ServiceStatus {
    pub msg: String,
}
