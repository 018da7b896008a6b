use axum::routing::{delete, post, put};
use axum::{routing::get, Router};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/", get(home))
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs", post(handlers::jobs::create))
        .route("/jobs/{id}", get(handlers::jobs::retrieve))
        .route("/jobs/{id}", put(handlers::jobs::update))
        .route("/jobs/{id}", delete(handlers::jobs::remove))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    // Points the pool at a port nothing listens on: the lazy pool builds
    // fine, and every query fails with a connection error.
    async fn test_app() -> Router {
        std::env::set_var("DATABASE_URL", "postgres://127.0.0.1:1/jobtrack");
        build_routes().await.unwrap()
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn livez_responds_without_touching_the_store() {
        let app = test_app().await;
        let request = Request::builder()
            .uri("/livez")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_maps_store_failures_to_500() {
        let app = test_app().await;
        let request = Request::builder()
            .uri("/jobs")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn create_rejects_missing_company_before_the_store() {
        let app = test_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/jobs")
            .header("content-type", "application/json")
            .body(Body::from(json!({"role": "Engineer"}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["message"], "Validation failed");
        assert!(body["errors"]["company"][0]["message"]
            .as_str()
            .unwrap()
            .contains("Company is required"));
    }

    #[tokio::test]
    async fn update_rejects_unknown_status_before_the_store() {
        let app = test_app().await;
        let request = Request::builder()
            .method("PUT")
            .uri("/jobs/some-id")
            .header("content-type", "application/json")
            .body(Body::from(json!({"status": "Ghosted"}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert!(body["errors"]["status"][0]["message"]
            .as_str()
            .unwrap()
            .contains("not a valid status"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let app = test_app().await;
        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
