use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/version",
    tag = "version",
    summary = "API version",
    description = "Returns the running service version.",
    responses(
        (status = 200, description = "Service version", body = Object)
    )
)]
pub async fn get_version() -> (StatusCode, Json<VersionResponse>) {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
