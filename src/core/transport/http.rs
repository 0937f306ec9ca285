//! HTTP transport implementation.
//!
//! Serves the discovery endpoint with axum. Every method is routed to the
//! handler so it can answer non-GET requests with its own 405. With CORS
//! enabled, preflight `OPTIONS` requests are answered by the CORS layer.

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{TransportConfig, TransportError, TransportResult};
use crate::core::WebFingerServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: TransportConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: WebFingerServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Build the router with all configured layers.
    pub fn router(&self, server: WebFingerServer) -> Router {
        let state = AppState { server };

        let mut app = Router::new()
            .route(&self.config.path, any(handle_discovery))
            .route("/health", get(health_check))
            .with_state(state);

        if let Some(timeout) = self.config.request_timeout() {
            app = app.layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                timeout,
            ));
        }

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]);
            app = app.layer(cors);
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: WebFingerServer) -> TransportResult<()> {
        self.config.validate()?;

        let addr = self.config.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → WebFinger: GET {}?resource=...", self.config.path);
        info!("  → Health:    GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Discovery endpoint.
async fn handle_discovery(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    state
        .server
        .handler()
        .handle(&method, query.as_deref())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::jrd::{JRD_CONTENT_TYPE, JrdEncoder};
    use crate::domains::resources::{MemoryResolver, Resource};
    use crate::domains::webfinger::ResourceHandler;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(config: TransportConfig) -> Router {
        let handler = ResourceHandler::new(
            Arc::new(MemoryResolver::new([Resource::new("acct:alice@example.com")])),
            Arc::new(JrdEncoder::new()),
        );
        let server = WebFingerServer::with_handler(Config::default(), handler);
        HttpTransport::new(config).router(server)
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_discovery_success() {
        let response = app(TransportConfig::default())
            .oneshot(request(
                Method::GET,
                "/.well-known/webfinger?resource=acct:alice@example.com",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JRD_CONTENT_TYPE
        );
        assert_eq!(
            body_string(response).await,
            r#"{"subject":"acct:alice@example.com","aliases":[],"properties":{},"links":[]}"#
        );
    }

    #[tokio::test]
    async fn test_post_reaches_handler() {
        let response = app(TransportConfig::default())
            .oneshot(request(
                Method::POST,
                "/.well-known/webfinger?resource=acct:alice@example.com",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_string(response).await, "method not allowed");
    }

    #[tokio::test]
    async fn test_not_found_and_bad_request() {
        let app = app(TransportConfig::default());

        let response = app
            .clone()
            .oneshot(request(
                Method::GET,
                "/.well-known/webfinger?resource=acct:bob@example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request(Method::GET, "/.well-known/webfinger"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cors_header() {
        let mut req = request(
            Method::GET,
            "/.well-known/webfinger?resource=acct:alice@example.com",
        );
        req.headers_mut()
            .insert(header::ORIGIN, "https://client.example".parse().unwrap());

        let response = app(TransportConfig::default()).oneshot(req).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_answered_before_handler() {
        let mut req = request(Method::OPTIONS, "/.well-known/webfinger");
        req.headers_mut()
            .insert(header::ORIGIN, "https://client.example".parse().unwrap());
        req.headers_mut().insert(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            "GET".parse().unwrap(),
        );

        let response = app(TransportConfig::default()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_options_without_cors_is_method_not_allowed() {
        let config = TransportConfig {
            enable_cors: false,
            ..Default::default()
        };
        let mut req = request(Method::OPTIONS, "/.well-known/webfinger");
        req.headers_mut()
            .insert(header::ORIGIN, "https://client.example".parse().unwrap());
        req.headers_mut().insert(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            "GET".parse().unwrap(),
        );

        let response = app(config).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_disabled() {
        let config = TransportConfig {
            enable_cors: false,
            ..Default::default()
        };
        let mut req = request(
            Method::GET,
            "/.well-known/webfinger?resource=acct:alice@example.com",
        );
        req.headers_mut()
            .insert(header::ORIGIN, "https://client.example".parse().unwrap());

        let response = app(config).oneshot(req).await.unwrap();
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_custom_path() {
        let config = TransportConfig {
            path: "/webfinger".to_string(),
            ..Default::default()
        };
        let app = app(config);

        let response = app
            .clone()
            .oneshot(request(
                Method::GET,
                "/webfinger?resource=acct:alice@example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request(
                Method::GET,
                "/.well-known/webfinger?resource=acct:alice@example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(TransportConfig::default())
            .oneshot(request(Method::GET, "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
