//! Unified API router for the appliance simulator
//!
//! Collects the handlers of every registered endpoint into a single axum
//! `Router` with request tracing. CORS applies to the health check only:
//! the access resources answer 404 to every method but GET and PUT,
//! preflight `OPTIONS` included.
//!
//! ## Endpoint Map
//!
//! | Path                               | Module | Description            |
//! |------------------------------------|--------|------------------------|
//! | `/health`                          | api    | Liveness check         |
//! | `/api/appliance/access/consolecli` | access | Console CLI toggle     |
//! | `/api/appliance/access/dcui`       | access | DCUI toggle            |
//! | `/api/appliance/access/ssh`        | access | SSH toggle             |
//! | `/api/appliance/access/shell`      | access | Shell toggle + timeout |

use crate::error::Result;
use crate::host::{Endpoint, EndpointRegistry, HandlerRegistry};
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Health check path, reserved before any endpoint registers
pub const HEALTH_PATH: &str = "/health";

/// Build the complete simulator HTTP application
///
/// Endpoints register in order. A path claimed twice (including
/// [`HEALTH_PATH`]) fails the build instead of panicking inside axum.
pub fn build_app(endpoints: &[Arc<dyn Endpoint>], cors_origins: &[String]) -> Result<Router> {
    let mut registry = HandlerRegistry::new();
    registry.register_handler(
        HEALTH_PATH,
        get(health_check).layer(build_cors(cors_origins)),
    )?;
    registry.register_all(endpoints)?;

    tracing::debug!(paths = ?registry.paths(), "Built simulator routes");

    Ok(registry
        .into_router()
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{AccessService, CONSOLE_CLI_PATH, DCUI_PATH, SHELL_PATH, SSH_PATH};
    use crate::error::Error;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::MethodRouter;

    struct Squatter;

    impl Endpoint for Squatter {
        fn name(&self) -> &'static str {
            "squatter"
        }

        fn register(&self, registry: &mut dyn EndpointRegistry) -> Result<()> {
            let handler: MethodRouter = get(|| async { "mine" });
            registry.register_handler(HEALTH_PATH, handler)
        }
    }

    async fn send(app: Router, request: Request<Body>) -> axum::response::Response {
        use tower::ServiceExt;
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = health_check().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_app_serves_health_and_access() {
        let endpoints: Vec<Arc<dyn Endpoint>> = vec![Arc::new(AccessService::default())];
        let app = build_app(&endpoints, &[]).unwrap();

        let resp = send(
            app.clone(),
            Request::builder().uri(HEALTH_PATH).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");

        let resp = send(
            app.clone(),
            Request::builder().uri(DCUI_PATH).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(
            app,
            Request::builder()
                .uri("/api/appliance/access/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_health_path_is_reserved() {
        let endpoints: Vec<Arc<dyn Endpoint>> = vec![Arc::new(Squatter)];
        let err = build_app(&endpoints, &[]).unwrap_err();
        assert!(matches!(err, Error::DuplicateEndpoint(path) if path == HEALTH_PATH));
    }

    #[tokio::test]
    async fn test_preflight_on_access_paths_not_found() {
        let endpoints: Vec<Arc<dyn Endpoint>> = vec![Arc::new(AccessService::default())];
        let app = build_app(&endpoints, &[]).unwrap();

        for path in [CONSOLE_CLI_PATH, DCUI_PATH, SSH_PATH, SHELL_PATH] {
            let resp = send(
                app.clone(),
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(path)
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", path);
            assert!(resp
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none());
        }
    }

    #[tokio::test]
    async fn test_health_allows_listed_origin() {
        let app = build_app(&[], &["http://localhost:3000".to_string()]).unwrap();

        let resp = send(
            app,
            Request::builder()
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_health_allows_any_origin_by_default() {
        let app = build_app(&[], &[]).unwrap();

        let resp = send(
            app,
            Request::builder()
                .uri(HEALTH_PATH)
                .header(header::ORIGIN, "https://app.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
