use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::post;
use login::{AuthResult, LOGIN_FAILED_MESSAGE, LoginView, TRANSPORT_ERROR_MESSAGE, User};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::*;

type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("http://{addr}")
}

async fn record_and_welcome(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    seen.lock().expect("lock").push((content_type, body));
    Json(json!({
        "success": true,
        "user": { "id": 1, "name": "Admin", "email": "admin@example.com" },
        "message": "Welcome"
    }))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_appends_login_path() {
    let service = HttpAuthService::new("http://localhost:5001/").expect("service");
    assert_eq!(service.endpoint().as_str(), "http://localhost:5001/api/login");
}

#[test]
fn new_rejects_unparseable_base_url() {
    let err = HttpAuthService::new("not a url").err().expect("should fail");
    assert!(matches!(err, CliError::InvalidBaseUrl(_)));
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = HttpAuthService::new("ftp://auth.test").err().expect("should fail");
    assert!(matches!(err, CliError::InvalidBaseUrl(_)));
}

// =============================================================
// Round trips against a local endpoint
// =============================================================

#[tokio::test]
async fn success_posts_json_and_shows_user() {
    let seen = Seen::default();
    let router = Router::new()
        .route("/api/login", post(record_and_welcome))
        .with_state(seen.clone());
    let base = serve(router).await;
    let view = LoginView::new(HttpAuthService::new(&base).expect("service"));

    let result = view
        .submit("admin@example.com", "password")
        .await
        .expect("submission should run");

    assert_eq!(
        result,
        AuthResult::Success {
            user: User {
                id: 1,
                name: "Admin".to_owned(),
                email: "admin@example.com".to_owned(),
            },
            message: Some("Welcome".to_owned()),
        }
    );
    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/json"));
    assert_eq!(
        seen[0].1,
        json!({ "username": "admin@example.com", "password": "password" })
    );
}

#[tokio::test]
async fn non_2xx_json_body_is_application_error() {
    let router = Router::new().route(
        "/api/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "Invalid credentials" })),
            )
        }),
    );
    let base = serve(router).await;
    let view = LoginView::new(HttpAuthService::new(&base).expect("service"));

    let result = view
        .submit("admin@example.com", "wrong")
        .await
        .expect("submission should run");

    assert_eq!(
        result,
        AuthResult::ApplicationError {
            message: "Invalid credentials".to_owned()
        }
    );
}

#[tokio::test]
async fn bare_failure_body_falls_back_to_default_text() {
    let router = Router::new().route(
        "/api/login",
        post(|| async { Json(json!({ "success": false })) }),
    );
    let base = serve(router).await;
    let view = LoginView::new(HttpAuthService::new(&base).expect("service"));

    let result = view.submit("a", "b").await.expect("submission should run");

    assert_eq!(result.error(), Some(LOGIN_FAILED_MESSAGE));
}

#[tokio::test]
async fn non_json_body_is_transport_error() {
    let router = Router::new().route(
        "/api/login",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = serve(router).await;
    let view = LoginView::new(HttpAuthService::new(&base).expect("service"));

    let result = view
        .submit("admin@example.com", "password")
        .await
        .expect("submission should run");

    assert_eq!(result.error(), Some(TRANSPORT_ERROR_MESSAGE));
    assert!(!view.is_busy());
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let view = LoginView::new(HttpAuthService::new(&format!("http://{addr}")).expect("service"));

    let result = view
        .submit("admin@example.com", "password")
        .await
        .expect("submission should run");

    assert_eq!(result, AuthResult::transport());
    assert_eq!(view.state().user(), None);
    assert!(!view.is_busy());
}
