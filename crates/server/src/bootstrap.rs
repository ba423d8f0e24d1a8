use std::sync::Arc;

use axum::Router;
use campus_agent::Responder;
use campus_core::clock::Clock;
use campus_core::config::{AppConfig, ConfigError};
use campus_core::dataset::CAMPUS;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{chat, health};

pub struct Application {
    pub config: AppConfig,
    pub responder: Responder,
    pub clock: Arc<dyn Clock>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("campus dataset failed integrity checks: {0}")]
    Dataset(String),
    #[error("could not bind `{address}`: {source}")]
    Bind { address: String, source: std::io::Error },
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let issues = CAMPUS.integrity_issues();
    if !issues.is_empty() {
        return Err(BootstrapError::Dataset(issues.join("; ")));
    }

    let clock: Arc<dyn Clock> = Arc::new(config.campus.system_clock());
    info!(
        event_name = "system.bootstrap.clock_ready",
        correlation_id = "bootstrap",
        utc_offset_minutes = ?config.campus.utc_offset_minutes,
        "responder clock configured"
    );

    Ok(Application { responder: Responder::new(Arc::clone(&clock)), clock, config })
}

impl Application {
    pub fn router(&self) -> Router {
        let chat_state = chat::ChatState::new(self.responder.clone(), Arc::clone(&self.clock));
        let router = chat::router(chat_state)
            .merge(health::router(self.responder.dataset()))
            .layer(TraceLayer::new_for_http());

        if self.config.server.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    pub async fn bind(&self) -> Result<TcpListener, BootstrapError> {
        let address = self.config.listen_address();
        TcpListener::bind(&address).await.map_err(|source| BootstrapError::Bind { address, source })
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use campus_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::bootstrap::{bootstrap_with_config, Application, BootstrapError};

    fn load(overrides: ConfigOverrides) -> Result<AppConfig, BootstrapError> {
        Ok(AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() })?)
    }

    fn app() -> Application {
        let overrides = ConfigOverrides { utc_offset_minutes: Some(0), ..ConfigOverrides::default() };
        let config = load(overrides).expect("config should load");
        bootstrap_with_config(config).expect("bootstrap should succeed")
    }

    #[test]
    fn invalid_log_level_is_a_config_error() {
        let result = load(ConfigOverrides {
            log_level: Some("chatty".to_string()),
            ..ConfigOverrides::default()
        });

        let error = result.err().expect("error");
        assert!(matches!(error, BootstrapError::Config(_)));
        assert!(error.to_string().contains("logging.level"));
    }

    #[test]
    fn bootstrap_uses_configured_clock_offset() {
        let app = app();
        assert_eq!(app.clock.now().offset().local_minus_utc(), 0);
    }

    #[tokio::test]
    async fn router_answers_chat_end_to_end() {
        let app = app();

        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message":"hello"}"#))
            .expect("request");
        let response = app.router().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.expect("body");
        let json: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(json["success"], true);
        assert!(json["response"].as_str().expect("text").starts_with("Hello!"));
        assert!(json["timestamp"].as_str().is_some_and(|stamp| !stamp.is_empty()));
    }

    #[tokio::test]
    async fn router_serves_health_alongside_chat() {
        let app = app();

        let request = Request::builder().uri("/health").body(Body::empty()).expect("request");
        let response = app.router().oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn permissive_cors_allows_any_origin() {
        let app = app();

        let request = Request::builder()
            .uri("/api/quick-actions")
            .header(header::ORIGIN, "http://campus.example")
            .body(Body::empty())
            .expect("request");
        let response = app.router().oneshot(request).await.expect("response");

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
            Some(&b"*"[..])
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = app();

        let request = Request::builder().uri("/nonexistent").body(Body::empty()).expect("request");
        let response = app.router().oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
