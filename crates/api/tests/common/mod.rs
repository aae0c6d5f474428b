#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use civitrack_api::auth::jwt::{generate_access_token, JwtConfig};
use civitrack_api::auth::password::hash_password;
use civitrack_api::config::ServerConfig;
use civitrack_api::routes;
use civitrack_api::state::AppState;
use civitrack_core::types::DbId;
use civitrack_db::models::user::CreateUser;
use civitrack_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn with_bearer(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    get_auth(app, uri, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: Option<&str>) -> Response {
    let request = with_bearer(Request::builder().method(Method::GET).uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_json_auth(app, uri, body, None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let request = with_bearer(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let request = with_bearer(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    delete_auth(app, uri, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: Option<&str>) -> Response {
    let request = with_bearer(Request::builder().method(Method::DELETE).uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with the given role directly through the repository and
/// mint a matching access token.
async fn seed_account(pool: &PgPool, username: &str, role: &str) -> (DbId, String) {
    let password_hash = hash_password("integration-password").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "Account".to_string(),
            email: format!("{username}@example.com"),
            phone: None,
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .expect("user insert should succeed");

    let token = generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed");
    (user.id, token)
}

/// Seed an admin account, returning its id and a valid Bearer token.
pub async fn seed_admin(pool: &PgPool) -> (DbId, String) {
    seed_account(pool, "admin_fixture", "admin").await
}

/// Seed a regular account, returning its id and a valid Bearer token.
pub async fn seed_user(pool: &PgPool) -> (DbId, String) {
    seed_account(pool, "user_fixture", "user").await
}

/// A complete, valid project payload. Original completion 2024-01-15 and
/// current completion 2024-04-01 give a three-month delay; the budgets give
/// a 20,000 overrun.
pub fn project_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "project_name": name,
        "description": "Fixture project",
        "location": {"type": "Point", "coordinates": [-79.40000000000001, 43.65]},
        "planning_start_date": "2022-01-01",
        "planning_complete_date": "2022-06-01",
        "construction_start_date": "2022-09-01",
        "original_completion_date": "2024-01-15",
        "current_completion_date": "2024-04-01",
        "status": "Construction Started",
        "original_budget": 100_000.0,
        "current_budget": 120_000.0,
        "category": "Transit",
        "performance_metric": 70.0,
        "efficiency": "Improving"
    })
}

/// A complete, valid report payload referencing the given project and user.
pub fn report_payload(project_id: DbId, user_id: DbId, title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "body": "Observed on site",
        "location": {"type": "Point", "coordinates": [-79.40000000000001, 43.65]},
        "project": project_id,
        "user": user_id
    })
}
