mod common;

use std::net::SocketAddr;

use api::app::build_router;
use api::auth::Claims;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use common::*;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn test_router() -> Router {
    let state = lazy_state();
    let schema = test_schema(state.clone());
    build_router(state, schema, &["http://localhost:5173".to_string()])
}

/// Access token signed with the test secret that expired an hour ago.
fn expired_bearer() -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "stale@test.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_auth_config().jwt_secret.as_bytes()),
    )
    .unwrap();

    format!("Bearer {token}")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, expired_bearer())
        .body(Body::from(body.to_string()))
        .unwrap();
    // Rate-limited routes key on the peer address.
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
    request
}

async fn send(request: Request<Body>) -> (StatusCode, Value, Option<String>) {
    let response = test_router().oneshot(request).await.unwrap();
    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body, set_cookie)
}

#[tokio::test]
async fn test_refresh_with_expired_bearer_reaches_handler() {
    let (status, body, _) = send(post_json("/auth/refresh", json!({}))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized: No refresh token in cookie");
}

#[tokio::test]
async fn test_signout_with_expired_bearer_clears_cookie() {
    let (status, _, set_cookie) = send(post_json("/auth/signout", json!({}))).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let cookie = set_cookie.expect("sign-out sets a clearing cookie");
    assert!(cookie.starts_with("refresh_token="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_signup_with_expired_bearer_reaches_validation() {
    let request = post_json(
        "/auth/signup",
        json!({ "email": "not-an-email", "password": "Sup3r-secret!" }),
    );
    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad request: Invalid email address");
}

#[tokio::test]
async fn test_graphql_still_rejects_expired_bearer() {
    let request = post_json("/graphql", json!({ "query": "{ me { id } }" }));
    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized: Invalid or expired token");
}
