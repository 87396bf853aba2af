// src/presentation/http/openapi/tests.rs
use super::*;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};

fn with(name: header::HeaderName, value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn weak_and_strong_tags_compare_equal() {
    assert!(weak_match(r#"W/"abc""#, r#""abc""#));
    assert!(weak_match(r#"w/"abc""#, r#""abc""#));
    assert!(weak_match(r#"\"abc\""#, "abc"));
    assert!(!weak_match(r#""abc""#, r#""def""#));
}

#[test]
fn if_none_match_accepts_lists_and_wildcard() {
    assert!(inm_matches(&with(header::IF_NONE_MATCH, "*"), "\"x\""));
    let listed = with(header::IF_NONE_MATCH, r#""foo", W/"bar""#);
    assert!(inm_matches(&listed, r#""bar""#));
    assert!(!inm_matches(&listed, r#""baz""#));
}

#[test]
fn document_lists_every_resource() {
    let doc = ApiDoc::openapi();
    for path in [
        "/api/auth/login/",
        "/api/portfolio/categories/{id}/",
        "/api/portfolio/{id}/images/{image_id}/",
        "/api/users/profile/",
        "/api/posts/{id}/",
        "/health",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}

#[test]
fn etag_is_a_quoted_digest() {
    let etag = openapi_etag();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 34);
}

#[tokio::test]
async fn matching_etag_yields_not_modified() {
    let resp = serve_openapi(with(header::IF_NONE_MATCH, openapi_etag())).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert!(resp.headers().get(header::ETAG).is_some());
}

#[tokio::test]
async fn head_reports_length_without_body() {
    let resp = head_openapi(HeaderMap::new()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let length = resp.headers().get(header::CONTENT_LENGTH).unwrap();
    assert_eq!(length.to_str().unwrap(), openapi_content_length());
}

#[tokio::test]
async fn mismatching_etag_wins_over_fresh_modified_since() {
    let mut headers = with(header::IF_NONE_MATCH, "\"other\"");
    headers.insert(
        header::IF_MODIFIED_SINCE,
        HeaderValue::from_static("Fri, 31 Dec 9999 23:59:59 GMT"),
    );
    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn modified_since_in_the_future_is_not_modified() {
    let headers = with(header::IF_MODIFIED_SINCE, "Fri, 31 Dec 9999 23:59:59 GMT");
    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}
