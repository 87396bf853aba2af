// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{auth, categories, health, images, portfolios, posts, users},
    middleware::{localize::localize_errors, rate_limit::auth_rate_limit_layer},
    openapi,
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    let settings = &state.settings;

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health::health))
        .merge(credential_routes(&state))
        .route("/api/auth/logout/", post(auth::logout))
        .route("/api/auth/me/", get(auth::me))
        .route("/api/auth/password-change/", post(auth::change_password))
        .route(
            "/api/portfolio/categories/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/portfolio/categories/{id}/",
            get(categories::get_category)
                .put(categories::update_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/api/portfolio/info/", get(portfolios::portfolio_info))
        .route(
            "/api/portfolio/",
            get(portfolios::list_portfolios).post(portfolios::create_portfolio),
        )
        .route(
            "/api/portfolio/{id}/",
            get(portfolios::get_portfolio)
                .put(portfolios::update_portfolio)
                .patch(portfolios::update_portfolio)
                .delete(portfolios::delete_portfolio),
        )
        .route(
            "/api/portfolio/{id}/images/",
            get(images::list_images).post(images::add_image),
        )
        .route(
            "/api/portfolio/{id}/images/{image_id}/",
            get(images::get_image).delete(images::delete_image),
        )
        .route(
            "/api/users/profile/",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/api/posts/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/{id}/",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        );

    if let Some(root) = &settings.media_root {
        let base = settings.media_base_url.trim_end_matches('/');
        if base.starts_with('/') && base.len() > 1 {
            router = router.nest_service(base, ServeDir::new(root));
        } else {
            tracing::warn!(base, "media base url is not a local path; not serving media");
        }
    }

    router
        .layer(DefaultBodyLimit::max(settings.max_request_bytes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            localize_errors,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

/// Login and token endpoints, rate limited per client when enabled.
fn credential_routes(state: &HttpState) -> Router {
    let routes = Router::new()
        .route("/api/auth/login/", post(auth::login))
        .route("/api/auth/token/refresh/", post(auth::refresh_token))
        .route("/api/auth/token/verify/", post(auth::verify_token));

    if !state.settings.rate_limit {
        return routes;
    }
    match auth_rate_limit_layer() {
        Some(layer) => routes.layer(layer),
        None => {
            tracing::warn!("rate limit quota rejected; credential endpoints are unlimited");
            routes
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT_LANGUAGE,
    ];

    // credentials cannot be combined with a wildcard origin
    if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
            .max_age(Duration::from_secs(3600));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
