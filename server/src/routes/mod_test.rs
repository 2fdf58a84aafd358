use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = health_routes().oneshot(get_request("/healthz")).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let req = Request::builder().method("POST").uri("/healthz").body(Body::empty()).expect("request");
    let resp = health_routes().oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let resp = health_routes().oneshot(get_request("/users/me")).await.expect("response");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
