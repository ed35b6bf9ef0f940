#![allow(dead_code)]

//! Shared test harness: a fake e-commerce backend served on an ephemeral
//! TCP port, plus helpers to drive the gateway router directly via
//! `tower::ServiceExt` (no listener needed for the gateway itself).
//!
//! The fake backend deliberately mixes response envelopes -- categories
//! come back as a bare array, coupons as `{"data": [...]}` -- so the
//! normalization adapter is exercised by every list test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, Request, Response, StatusCode};
use axum::routing::{delete as axum_delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use bloomcart_api::config::ServerConfig;
use bloomcart_api::routes;
use bloomcart_api::state::AppState;
use bloomcart_upstream::UpstreamClient;

/// The one token the fake backend accepts.
pub const VALID_TOKEN: &str = "tok-test-123";

/// Admin credentials the fake backend accepts.
pub const ADMIN_EMAIL: &str = "admin@bloomcart.test";
pub const ADMIN_PASSWORD: &str = "secret123";

/// In-memory state of the fake backend.
#[derive(Default)]
pub struct Backend {
    pub categories: Vec<Value>,
    pub coupons: Vec<Value>,
    pub orders: Vec<Value>,
    /// Count of add/update/delete calls received, across all entities.
    pub mutations: usize,
    /// Pages requested from the order collection endpoint, in call order.
    pub order_pages_served: Vec<usize>,
    /// Seed for backend-assigned ids; tests construct with `..Default::default()`.
    pub next_id: usize,
}

impl Backend {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("gen{}", self.next_id)
    }
}

pub type Shared = Arc<Mutex<Backend>>;

/// A running fake backend.
pub struct FakeUpstream {
    pub base_url: String,
    pub state: Shared,
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {VALID_TOKEN}"))
}

async fn login(Json(body): Json<Value>) -> Response<Body> {
    let ok = body["email"] == ADMIN_EMAIL && body["password"] == ADMIN_PASSWORD;
    if ok {
        json_response(StatusCode::OK, json!({"token": VALID_TOKEN}))
    } else {
        json_response(StatusCode::UNAUTHORIZED, json!({"message": "bad credentials"}))
    }
}

async fn verify(headers: HeaderMap) -> StatusCode {
    if bearer_ok(&headers) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

fn json_response(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// --- category endpoints (bare-array envelope, multipart forms) ---

async fn category_all(State(state): State<Shared>) -> Json<Value> {
    let backend = state.lock().unwrap();
    Json(Value::Array(backend.categories.clone()))
}

async fn category_get(State(state): State<Shared>, Path(id): Path<String>) -> Response<Body> {
    let backend = state.lock().unwrap();
    match backend.categories.iter().find(|c| c["_id"] == id.as_str()) {
        Some(record) => json_response(StatusCode::OK, record.clone()),
        None => json_response(StatusCode::NOT_FOUND, json!({"message": "not found"})),
    }
}

async fn category_add(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response<Body> {
    if !bearer_ok(&headers) {
        return json_response(StatusCode::UNAUTHORIZED, json!({"message": "no token"}));
    }

    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if field.file_name().is_some() {
            // Uploads are acknowledged but not stored by the fake.
            let _ = field.bytes().await.unwrap();
            fields.insert("image".to_string(), "uploaded".to_string());
        } else {
            fields.insert(name, field.text().await.unwrap());
        }
    }

    let mut backend = state.lock().unwrap();
    let id = backend.next_id();
    let record = json!({
        "_id": id,
        "name": fields.get("name").cloned().unwrap_or_default(),
        "slug": fields.get("slug").cloned().unwrap_or_default(),
    });
    backend.categories.push(record.clone());
    backend.mutations += 1;

    json_response(StatusCode::CREATED, json!({"data": record}))
}

async fn category_delete(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response<Body> {
    if !bearer_ok(&headers) {
        return json_response(StatusCode::UNAUTHORIZED, json!({"message": "no token"}));
    }

    let mut backend = state.lock().unwrap();
    let before = backend.categories.len();
    backend.categories.retain(|c| c["_id"] != id.as_str());
    if backend.categories.len() == before {
        return json_response(StatusCode::NOT_FOUND, json!({"message": "not found"}));
    }
    backend.mutations += 1;
    json_response(StatusCode::OK, json!({"message": "deleted"}))
}

// --- coupon endpoints ({"data": ...} envelope, JSON forms) ---

async fn coupon_all(State(state): State<Shared>) -> Json<Value> {
    let backend = state.lock().unwrap();
    Json(json!({"data": backend.coupons.clone()}))
}

async fn coupon_get(State(state): State<Shared>, Path(id): Path<String>) -> Response<Body> {
    let backend = state.lock().unwrap();
    match backend.coupons.iter().find(|c| c["_id"] == id.as_str()) {
        Some(record) => json_response(StatusCode::OK, json!({"data": record.clone()})),
        None => json_response(StatusCode::NOT_FOUND, json!({"message": "not found"})),
    }
}

async fn coupon_add(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response<Body> {
    if !bearer_ok(&headers) {
        return json_response(StatusCode::UNAUTHORIZED, json!({"message": "no token"}));
    }

    let mut backend = state.lock().unwrap();
    let id = backend.next_id();
    let mut record = body;
    record["_id"] = json!(id);
    backend.coupons.push(record.clone());
    backend.mutations += 1;

    json_response(StatusCode::CREATED, json!({"data": record}))
}

// --- order endpoints (server-side pagination) ---

async fn order_all(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(10);
    backend.order_pages_served.push(page);

    let start = (page - 1) * limit;
    let slice: Vec<Value> = backend
        .orders
        .iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    Json(json!({"data": slice, "total": backend.orders.len()}))
}

async fn order_update(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response<Body> {
    if !bearer_ok(&headers) {
        return json_response(StatusCode::UNAUTHORIZED, json!({"message": "no token"}));
    }

    let mut backend = state.lock().unwrap();
    backend.mutations += 1;
    match backend.orders.iter_mut().find(|o| o["_id"] == id.as_str()) {
        Some(record) => {
            record["status"] = body["status"].clone();
            let record = record.clone();
            json_response(StatusCode::OK, json!({"data": record}))
        }
        None => json_response(StatusCode::NOT_FOUND, json!({"message": "not found"})),
    }
}

async fn order_get(State(state): State<Shared>, Path(id): Path<String>) -> Response<Body> {
    let backend = state.lock().unwrap();
    match backend.orders.iter().find(|o| o["_id"] == id.as_str()) {
        Some(record) => json_response(StatusCode::OK, json!({"data": record.clone()})),
        None => json_response(StatusCode::NOT_FOUND, json!({"message": "not found"})),
    }
}

/// Spawn the fake backend on an ephemeral port and return its handle.
pub async fn spawn_fake_upstream(backend: Backend) -> FakeUpstream {
    let state: Shared = Arc::new(Mutex::new(backend));

    let app = Router::new()
        .route("/admin/login", post(login))
        .route("/admin/verify-token", get(verify))
        .route("/category/all", get(category_all))
        .route("/category/get/{id}", get(category_get))
        .route("/category/add", post(category_add))
        .route("/category/delete/{id}", axum_delete(category_delete))
        .route("/coupon/all", get(coupon_all))
        .route("/coupon/get/{id}", get(coupon_get))
        .route("/coupon/add", post(coupon_add))
        .route("/order/all", get(order_all))
        .route("/order/get/{id}", get(order_get))
        .route("/order/update/{id}", put(order_update))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });

    FakeUpstream {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Build a test `ServerConfig` pointing at the fake backend.
pub fn test_config(upstream_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upstream_base_url: upstream_base_url.to_string(),
        upstream_timeout_secs: 5,
    }
}

/// Build the full gateway router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_app(upstream_base_url: &str) -> Router {
    let config = test_config(upstream_base_url);
    let upstream = UpstreamClient::new(
        config.upstream_base_url.clone(),
        config.upstream_timeout_secs,
    )
    .expect("upstream client");

    let state = AppState {
        upstream: Arc::new(upstream),
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// --- request helpers ---

fn authed(builder: axum::http::request::Builder) -> axum::http::request::Builder {
    builder.header(AUTHORIZATION, format!("Bearer {VALID_TOKEN}"))
}

/// GET with the valid admin token.
pub async fn get_authed(app: Router, uri: &str) -> Response<Body> {
    let request = authed(Request::builder().uri(uri))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET without any Authorization header.
pub async fn get_anon(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with an arbitrary bearer token.
pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body with the valid admin token.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = authed(Request::builder().method("POST").uri(uri))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body without any Authorization header.
pub async fn post_json_anon(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// PUT a JSON body with the valid admin token.
pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = authed(Request::builder().method("PUT").uri(uri))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// DELETE with the valid admin token.
pub async fn delete_authed(app: Router, uri: &str) -> Response<Body> {
    let request = authed(Request::builder().method("DELETE").uri(uri))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form of text fields with the valid admin token.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let boundary = "bloomcart-test-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let request = authed(Request::builder().method("POST").uri(uri))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    use http_body_util::BodyExt;
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec()
}
