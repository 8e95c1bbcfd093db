//! Viewer API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. The router is generic over the record
//! source so tests can swap in fixture or failing sources.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::source::RecordSource;

/// Shared context for all viewer routes: the record source, one per server.
pub struct ViewerContext<S> {
    pub source: Arc<S>,
}

impl<S> ViewerContext<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

// Manual impl: `S` itself need not be `Clone` behind the `Arc`.
impl<S> Clone for ViewerContext<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

/// Build the viewer router over a shared record source.
pub fn records_router<S: RecordSource + 'static>(source: Arc<S>) -> Router {
    let ctx = ViewerContext::new(source);

    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route(
            "/api/patients/:patient_id/profile",
            get(endpoints::profile::patient_profile::<S>),
        )
        .route(
            "/api/patients/:patient_id/history",
            get(endpoints::history::medical_history::<S>),
        )
        .fallback(unknown_route)
        .with_state(ctx)
        // The viewer frontend is an external collaborator on another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound("no such page".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::source::MockApi;

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_response_shape() {
        let app = records_router(Arc::new(MockApi::empty()));
        let response = app.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
        assert!(!json["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_returns_structured_404() {
        let app = records_router(Arc::new(MockApi::empty()));
        let response = app.oneshot(get_request("/api/nonexistent")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn profile_renders_seeded_patient() {
        let mock = Arc::new(MockApi::with_seed_data());
        let patient_id = mock.patients()[0].id.clone();
        let name = mock.patients()[0].name.clone();
        let app = records_router(mock);

        let response = app
            .oneshot(get_request(&format!("/api/patients/{patient_id}/profile")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["phase"], "loaded");
        assert_eq!(json["patient"]["name"], name);
    }

    #[tokio::test]
    async fn profile_renders_not_found_for_unknown_id() {
        let app = records_router(Arc::new(MockApi::empty()));
        let response = app
            .oneshot(get_request("/api/patients/nobody/profile"))
            .await
            .unwrap();
        // Not-found is a page state, not an HTTP error.
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["phase"], "not_found");
    }

    #[tokio::test]
    async fn history_renders_seeded_entries_newest_first() {
        let mock = Arc::new(MockApi::with_seed_data());
        let patient_id = mock.patients()[0].id.clone();
        let app = records_router(mock);

        let response = app
            .oneshot(get_request(&format!("/api/patients/{patient_id}/history")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["phase"], "loaded");
        let entries = json["entries"].as_array().unwrap();
        // Seed has two past visits and one upcoming (excluded).
        assert_eq!(entries.len(), 2);
        assert!(entries[0]["visit_date"].is_string());
        assert!(entries[0]["prescription"]["diagnosis"].is_string());
    }

    #[tokio::test]
    async fn history_for_patient_without_visits_is_loaded_and_empty() {
        let mock = MockApi::with_seed_data();
        let mock = mock.with_patient(crate::models::Patient {
            id: "p-quiet".into(),
            name: "No Visits Yet".into(),
            age: 29,
            gender: crate::models::Gender::Other,
            email: "quiet@example.org".into(),
            phone: "+1-555-0199".into(),
            last_visit: None,
            total_visits: 0,
        });
        let app = records_router(Arc::new(mock));

        let response = app
            .oneshot(get_request("/api/patients/p-quiet/history"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["phase"], "loaded");
        assert_eq!(json["entries"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn failing_source_degrades_to_not_found() {
        let app = records_router(Arc::new(MockApi::failing()));
        let response = app
            .oneshot(get_request("/api/patients/p1/history"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["phase"], "not_found");
    }
}
