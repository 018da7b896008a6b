use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error taxonomy: validation (400), not-found (404), everything
/// else collapses to a generic 500 at the endpoint boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("api responded with status {status}: {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Single-field validation failure, for checks the derive can't express.
    pub fn field(field: &'static str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("invalid");
        error.message = Some(message.to_owned().into());
        errors.add(field, error);
        Error::Validation(errors)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Validation failed", "errors": errors})),
            )
                .into_response(),
            Error::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({"message": format!("{} not found", what)})),
            )
                .into_response(),
            err => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = Error::NotFound("Job").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Job not found");
    }

    #[tokio::test]
    async fn field_error_maps_to_400_with_field_detail() {
        let response = Error::field("company", "Company is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert!(body["errors"]["company"][0]["message"]
            .as_str()
            .unwrap()
            .contains("Company is required"));
    }

    #[tokio::test]
    async fn database_errors_map_to_500_without_detail() {
        let response = Error::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }
}
