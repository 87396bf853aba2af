// src/presentation/http/openapi/handlers.rs
use super::{OPENAPI_CONTENT_TYPE_JSON, meta, openapi_bytes, openapi_content_length, openapi_etag};
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

fn validators(response: &mut Response) {
    let headers = response.headers_mut();
    if let Ok(etag) = HeaderValue::from_str(openapi_etag()) {
        headers.insert(header::ETAG, etag);
    }
    if let Ok(modified) = HeaderValue::from_str(meta::last_modified()) {
        headers.insert(header::LAST_MODIFIED, modified);
    }
}

fn not_modified() -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    validators(&mut response);
    response
}

fn document(body: Body) -> Response {
    let mut response = (StatusCode::OK, body).into_response();
    validators(&mut response);
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(OPENAPI_CONTENT_TYPE_JSON),
    );
    if let Ok(length) = HeaderValue::from_str(openapi_content_length()) {
        headers.insert(header::CONTENT_LENGTH, length);
    }
    response
}

/// `If-None-Match` wins over `If-Modified-Since`: a present but mismatching
/// tag always yields the document.
fn is_not_modified(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        meta::inm_matches(headers, openapi_etag())
    } else {
        meta::ims_matches(headers)
    }
}

/// GET /openapi.json
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if is_not_modified(&headers) {
        return not_modified();
    }
    document(Body::from(openapi_bytes()))
}

/// HEAD /openapi.json
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if is_not_modified(&headers) {
        return not_modified();
    }
    document(Body::empty())
}
