#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use spacefleet_api::config::{CorsOrigins, DatabaseConfig, Environment, ServerConfig};
use spacefleet_api::router::build_app_router;
use spacefleet_api::state::AppState;
use spacefleet_db::schema::{self, SyncMode};
use spacefleet_db::DbPool;

pub const MEMORY_URL: &str = "sqlite::memory:";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        environment: Environment::Development,
        database: DatabaseConfig {
            url: MEMORY_URL.to_string(),
            max_connections: 1,
        },
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        static_dir: PathBuf::from("does-not-exist"),
    }
}

/// Fresh in-memory store with both tables created.
pub async fn test_pool() -> DbPool {
    let pool = spacefleet_db::create_pool(MEMORY_URL, 1)
        .await
        .expect("in-memory pool");
    schema::sync(&pool, SyncMode::CreateMissing)
        .await
        .expect("schema sync");
    pool
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

pub async fn send_json(app: Router, method: Method, uri: &str, raw_body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw_body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a spacecraft over HTTP and return its id.
///
/// The create route only answers with a message, so the id is read back
/// through a name-filtered listing.
pub async fn create_spacecraft(pool: &DbPool, name: &str, max_speed: f64, mass: f64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/spacecrafts",
        serde_json::json!({"name": name, "maxSpeed": max_speed, "mass": mass}),
    )
    .await;
    assert_eq!(response.status(), 201, "creating spacecraft {name}");

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/spacecrafts?name={name}")).await).await;
    json["records"][0]["id"].as_i64().unwrap()
}

/// Create an astronaut over HTTP and return its id.
pub async fn create_astronaut(pool: &DbPool, spacecraft_id: i64, name: &str, role: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/spacecrafts/{spacecraft_id}/astronauts"),
        serde_json::json!({"name": name, "role": role}),
    )
    .await;
    assert_eq!(response.status(), 201, "creating astronaut {name}");

    let app = build_test_app(pool.clone());
    let crew = body_json(get(app, &format!("/spacecrafts/{spacecraft_id}/astronauts")).await).await;
    crew.as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|a| a["name"] == name)
        .and_then(|a| a["id"].as_i64())
        .unwrap()
}
