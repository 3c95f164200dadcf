use axum::{
    Json,
    body::Bytes,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;

/// App names are opaque identifiers, not arbitrary text.
const MAX_APP_NAME_LEN: usize = 64;

/// Response for an accepted app message.
#[derive(Debug, Serialize)]
pub struct AppMessageResponse {
    /// The app name extracted from the request path.
    pub app: String,
    pub status: String,
}

/// Error response body for a rejected app message.
#[derive(Debug, Serialize)]
pub struct AppMessageErrorBody {
    pub code: u16,
    pub error: String,
    pub cause: String,
}

/// Errors that can occur while handling an app message.
#[derive(Debug, Error)]
pub enum AppMessageError {
    #[error("Invalid app name.")]
    InvalidAppName { name: String },
}

impl IntoResponse for AppMessageError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppMessageError::InvalidAppName { name } => {
                let body = Json(AppMessageErrorBody {
                    code: 400,
                    error: "Invalid app name.".to_string(),
                    cause: format!(
                        "App name '{}' must be 1-{} ASCII alphanumeric, '-', '_' or '.' characters.",
                        name, MAX_APP_NAME_LEN
                    ),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

fn is_valid_app_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_APP_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[utoipa::path(
    post,
    path = "/app/{appName}",
    tag = "apps",
    summary = "Submit an app message",
    description = "Accepts a payload addressed to the named app and acknowledges receipt.",
    params(
        ("appName" = String, Path, description = "Name of the target app")
    ),
    request_body(content = Object, description = "Opaque app payload", content_type = "application/json"),
    responses(
        (status = 200, description = "Message received", body = Object),
        (status = 400, description = "Invalid app name")
    )
)]
pub async fn post_app(
    Path(app_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<AppMessageResponse>), AppMessageError> {
    if !is_valid_app_name(&app_name) {
        return Err(AppMessageError::InvalidAppName { name: app_name });
    }

    tracing::info!(app = %app_name, bytes = body.len(), "Received app message");

    let response = AppMessageResponse {
        app: app_name,
        status: "received".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_app_names() {
        for name in ["frontend", "scanner-01", "agent_v2", "ui.web", "a"] {
            assert!(is_valid_app_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_app_names() {
        assert!(!is_valid_app_name(""));
        assert!(!is_valid_app_name("bad name"));
        assert!(!is_valid_app_name("tab\tname"));
        assert!(!is_valid_app_name("sl/ash"));
        assert!(!is_valid_app_name(&"x".repeat(MAX_APP_NAME_LEN + 1)));
    }

    #[test]
    fn test_name_at_length_limit_is_valid() {
        assert!(is_valid_app_name(&"x".repeat(MAX_APP_NAME_LEN)));
    }

    #[test]
    fn test_response_serialization() {
        let response = AppMessageResponse {
            app: "frontend".to_string(),
            status: "received".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["app"], "frontend");
        assert_eq!(json["status"], "received");
    }

    #[test]
    fn test_error_body_serialization() {
        let body = AppMessageErrorBody {
            code: 400,
            error: "Invalid app name.".to_string(),
            cause: "App name 'bad name' must be 1-64 ASCII alphanumeric, '-', '_' or '.' characters."
                .to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["error"], "Invalid app name.");
        assert!(json["cause"].as_str().unwrap().contains("bad name"));
    }
}
