//! Shared test harness: router construction, a stubbed generation
//! service, and HTTP helpers driving the router via `tower::ServiceExt`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use finlit_api::auth::jwt::{generate_access_token, JwtConfig};
use finlit_api::config::ServerConfig;
use finlit_api::router::build_app_router;
use finlit_api::state::AppState;
use finlit_llm::{GenerationService, LlmError, OpenAiConfig};

/// Secret shared by test tokens and the test config.
const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// A generation service returning a canned reply, so tests never touch
/// the network.
pub struct StubGenerator {
    reply: String,
}

impl StubGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl GenerationService for StubGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.reply.clone())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cdn_base_url: "http://cdn.test".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        llm: OpenAiConfig {
            base_url: "http://llm.test".to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Build the full application router with the production middleware stack
/// and a stub generation service.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubGenerator::new("[설명] : 기본 응답"))
}

/// As [`build_test_app`] but with a caller-supplied generation stub.
pub fn build_test_app_with(pool: PgPool, generator: StubGenerator) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator: Arc::new(generator),
    };
    build_app_router(state, &config)
}

/// A valid Bearer token for the test admin.
pub fn auth_token() -> String {
    let config = test_config();
    generate_access_token(1, "test-admin", "admin", &config.jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token()))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, "PUT", uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token()))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", auth_token()))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
