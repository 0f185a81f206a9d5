use crate::openapi::SERVICE_TAG;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Basic health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    status: &'static str,
}

impl IntoResponse for Health {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Liveness probe; the relay holds no resources that can become unhealthy
#[utoipa::path(
    get,
    path = "/health",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    )
)]
pub(crate) async fn health_check() -> Health {
    Health { status: "ok" }
}

pub(super) fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestFixture;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check() {
        let fixture = TestFixture::new().await;

        let response = fixture.get("/health").await;

        response.assert_ok();
        assert_eq!(response.json, json!({"status": "ok"}));
    }
}
