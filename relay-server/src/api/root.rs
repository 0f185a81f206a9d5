use crate::models::ServiceStatus;
use crate::openapi::SERVICE_TAG;
use crate::state::AppState;
use axum::{routing::get, Json, Router};

pub(crate) const SERVICE_STATUS_MESSAGE: &str = "Notion OAuth Callback Server Running.";

/// Fixed status message of the relay
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Relay is running", body = ServiceStatus)
    )
)]
pub(crate) async fn root_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        msg: SERVICE_STATUS_MESSAGE.to_string(),
    })
}

pub(super) fn router() -> Router<AppState> {
    Router::new().route("/", get(root_handler))
}
