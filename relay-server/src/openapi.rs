use crate::api::{health, notion, root};
use crate::models::{RelayFailure, RelaySuccess, ServiceStatus, TokenRequest};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub(crate) const SERVICE_TAG: &str = "Service API";
pub(crate) const NOTION_TAG: &str = "Notion OAuth API";

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root_handler,
        health::health_check,
        notion::callback::callback_handler,
        notion::token::introspect_handler,
        notion::token::revoke_handler,
    ),
    components(schemas(RelaySuccess, RelayFailure, ServiceStatus, TokenRequest)),
    tags(
        (name = SERVICE_TAG, description = "Service status endpoints"),
        (name = NOTION_TAG, description = "Notion OAuth relay endpoints"),
    ),
    info(
        title = "Notion OAuth Relay API",
        description = "Completes the Notion OAuth authorization code exchange",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;

/// Handler for the OpenAPI JSON specification endpoint
async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json_handler))
}
