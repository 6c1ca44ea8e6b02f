use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let app = api_routes(AppState { cookie_secure: false });
    let req = Request::get("/healthz").body(Body::empty()).unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let app = api_routes(AppState { cookie_secure: false });
    let req = Request::get("/api/unknown").body(Body::empty()).unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
