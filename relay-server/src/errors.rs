use crate::models::RelayFailure;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub data: Option<Value>,
}

impl ApiError {
    /// Create a new ApiError with a message and status code
    pub fn new<S: ToString>(message: S, status_code: StatusCode) -> Self {
        Self {
            message: message.to_string(),
            status_code,
            data: None,
        }
    }

    /// Attach the upstream response body to the error
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Create new Internal Server Error (500) with a message
    pub fn internal<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Create new Bad Request Error (400) with a message
    pub fn bad_request<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    /// Create new Bad Gateway (502) with a message
    pub fn bad_gateway<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::BAD_GATEWAY)
    }

    /// Create new Service Unavailable (503) with a message
    pub fn service_unavailable<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::SERVICE_UNAVAILABLE)
    }

    /// Create new Gateway Timeout (504) with a message
    pub fn gateway_timeout<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::GATEWAY_TIMEOUT)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = RelayFailure {
            ok: false,
            message: self.message,
            data: self.data,
        };
        (self.status_code, Json(body)).into_response()
    }
}
