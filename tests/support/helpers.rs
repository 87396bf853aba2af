// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore, MemoryBlobStorage, StrictPasswordHasher};
use axum::body::{self, Body};
use axum::http::{
    HeaderMap, Method, Request, StatusCode,
    header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE},
};
use folio_core::application::{
    ports::{security::TokenService, time::Clock},
    queries::portfolios::ListingSettings,
    services::{ApplicationServices, ServiceDependencies},
};
use folio_core::domain::user::UserId;
use folio_core::infrastructure::{
    i18n::StaticCatalog, security::JwtTokenService, util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-with-32-bytes!!";

pub struct TestApp {
    pub router: axum::Router,
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub storage: Arc<MemoryBlobStorage>,
    pub tokens: Arc<JwtTokenService>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_listing(ListingSettings::default())
    }

    pub fn with_listing(listing: ListingSettings) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let storage = Arc::new(MemoryBlobStorage::default());
        let clock: Arc<dyn Clock> = Arc::new(FixedClock);
        let tokens = Arc::new(
            JwtTokenService::new(
                TEST_SECRET,
                Duration::from_secs(3600),
                Duration::from_secs(86_400),
                Arc::clone(&clock),
            )
            .unwrap(),
        );

        let services = ApplicationServices::new(ServiceDependencies {
            user_repo: store.clone(),
            profile_repo: store.clone(),
            category_repo: store.clone(),
            portfolio_repo: store.clone(),
            image_repo: store.clone(),
            info_repo: store.clone(),
            post_repo: store.clone(),
            password_hasher: Arc::new(StrictPasswordHasher),
            token_service: tokens.clone(),
            storage: storage.clone(),
            translator: Arc::new(StaticCatalog),
            clock,
            slugger: Arc::new(DefaultSlugGenerator::default()),
            listing,
        });

        let settings = HttpSettings {
            rate_limit: false,
            ..HttpSettings::default()
        };
        let services = Arc::new(services);
        let router = build_router(HttpState::new(Arc::clone(&services), settings));

        Self {
            router,
            services,
            store,
            storage,
            tokens,
        }
    }

    /// A bearer access token for the user, as login would issue it.
    pub async fn token_for(&self, user_id: i64) -> String {
        self.tokens.issue(UserId(user_id)).await.unwrap().access
    }

    pub async fn refresh_token_for(&self, user_id: i64) -> String {
        self.tokens.issue(UserId(user_id)).await.unwrap().refresh
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let (parts, body) = response.into_parts();
        let bytes = body::to_bytes(body, 16 * 1024 * 1024).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers: parts.headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::GET, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::DELETE, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        payload: &Value,
    ) -> TestResponse {
        self.send(json_request(method, uri, token, payload)).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    payload: &Value,
) -> Request<Body> {
    request(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn arabic(mut request: Request<Body>) -> Request<Body> {
    request
        .headers_mut()
        .insert(ACCEPT_LANGUAGE, "ar,en;q=0.5".parse().unwrap());
    request
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: Vec<u8>,
    },
}

const BOUNDARY: &str = "----folio-test-boundary";

pub fn multipart_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    parts: Vec<Part<'_>>,
) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    request(method, uri, token)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn png(len: usize) -> Part<'static> {
    Part::File {
        name: "image",
        file_name: "photo.png",
        content_type: "image/png",
        data: vec![7_u8; len],
    }
}

/// Asserts the error envelope: status, stable code and a rendered message.
pub fn assert_error(response: &TestResponse, status: StatusCode, code: &str) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["code"], code, "body: {}", response.body);
    let message = response.body["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty(), "expected a message: {}", response.body);
    assert_eq!(response.body["message"], response.body["detail"]);
    assert_eq!(
        response.body["error"],
        status.canonical_reason().unwrap_or_default()
    );
}
