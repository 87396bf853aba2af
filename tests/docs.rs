// tests/docs.rs
use axum::body::Body;
use axum::http::{
    Method, StatusCode,
    header::{CONTENT_LENGTH, ETAG, IF_NONE_MATCH, LOCATION},
};

mod support;
use support::{TestApp, request};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let resp = app.get("/health", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_the_api() {
    let app = TestApp::new();
    let resp = app.get("/openapi.json", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.headers.contains_key(ETAG));

    let paths = resp.body["paths"].as_object().unwrap();
    for path in [
        "/api/auth/login/",
        "/api/portfolio/",
        "/api/portfolio/{id}/images/",
        "/api/portfolio/categories/",
        "/api/users/profile/",
        "/api/posts/",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(resp.body["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn matching_etag_is_not_modified() {
    let app = TestApp::new();
    let first = app.get("/openapi.json", None).await;
    let etag = first.headers[ETAG].to_str().unwrap().to_string();

    let cached = app
        .send(
            request(Method::GET, "/openapi.json", None)
                .header(IF_NONE_MATCH, format!("W/{etag}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(cached.status, StatusCode::NOT_MODIFIED);
    assert!(cached.body.is_null());
}

#[tokio::test]
async fn head_reports_length_without_a_body() {
    let app = TestApp::new();
    let resp = app
        .send(
            request(Method::HEAD, "/openapi.json", None)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.headers.contains_key(CONTENT_LENGTH));
    assert!(resp.body.is_null());
}

#[tokio::test]
async fn root_redirects_to_the_docs() {
    let app = TestApp::new();
    let resp = app.get("/", None).await;
    assert!(resp.status.is_redirection());
    assert_eq!(resp.headers[LOCATION], "/docs");
}
