// src/presentation/http/openapi/mod.rs
use crate::presentation::http::controllers::{
    auth, categories, health, images, portfolios, posts, users,
};
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::{env, fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

mod handlers;
mod meta;

pub use handlers::{head_openapi, serve_openapi};
pub use meta::{extract_etag_value, ims_matches, inm_matches, weak_match};

pub(crate) const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        auth::me,
        auth::change_password,
        auth::refresh_token,
        auth::verify_token,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        portfolios::list_portfolios,
        portfolios::get_portfolio,
        portfolios::create_portfolio,
        portfolios::update_portfolio,
        portfolios::delete_portfolio,
        portfolios::portfolio_info,
        images::list_images,
        images::add_image,
        images::get_image,
        images::delete_image,
        users::get_profile,
        users::update_profile,
        posts::list_posts,
        posts::create_post,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
        health::health
    ),
    components(
        schemas(
            health::StatusResponse,
            crate::presentation::http::error::ErrorBody,
            auth::LoginRequest,
            auth::RefreshTokenRequest,
            auth::VerifyTokenRequest,
            auth::ChangePasswordRequest,
            categories::CreateCategoryRequest,
            categories::UpdateCategoryRequest,
            portfolios::CreatePortfolioRequest,
            portfolios::UpdatePortfolioRequest,
            images::AddImageRequest,
            users::UpdateProfileRequest,
            posts::CreatePostRequest,
            posts::UpdatePostRequest,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::DetailDto,
            crate::application::dto::LoginResponseDto,
            crate::application::dto::RefreshResponseDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::PortfolioDto,
            crate::application::dto::PortfolioImageDto,
            crate::application::dto::PortfolioInfoDto,
            crate::application::dto::PostDto
        )
    ),
    tags(
        (name = "Auth", description = "Login, tokens and password change"),
        (name = "Categories", description = "Service categories"),
        (name = "Portfolios", description = "Portfolio entries and site metadata"),
        (name = "Portfolio images", description = "Gallery images of a portfolio entry"),
        (name = "Users", description = "The caller's profile"),
        (name = "Posts", description = "Blog posts owned by their author"),
        (name = "Health", description = "Liveness")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Folio API",
        description = "Bilingual portfolio backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|url| url.trim().trim_end_matches('/').to_string())
                    .filter(|url| !url.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }
        urls.dedup();

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

struct RenderedDocument {
    bytes: Bytes,
    etag: String,
    content_length: String,
}

fn rendered() -> &'static RenderedDocument {
    static DOCUMENT: OnceLock<RenderedDocument> = OnceLock::new();
    DOCUMENT.get_or_init(|| {
        let bytes = match serde_json::to_vec(&ApiDoc::openapi()) {
            Ok(bytes) => Bytes::from(bytes),
            Err(err) => {
                tracing::error!(error = %err, "failed to render the OpenAPI document");
                Bytes::from_static(b"{}")
            }
        };
        let digest = Sha256::digest(&bytes);
        let etag = format!("\"{}\"", hex(&digest[..16]));
        RenderedDocument {
            content_length: bytes.len().to_string(),
            bytes,
            etag,
        }
    })
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

pub(crate) fn openapi_bytes() -> Bytes {
    rendered().bytes.clone()
}

/// Strong ETag of the served document, quoted.
pub fn openapi_etag() -> &'static str {
    &rendered().etag
}

pub(crate) fn openapi_content_length() -> &'static str {
    &rendered().content_length
}

pub fn docs_router() -> Router {
    // the document itself is served by `serve_openapi` so it carries an ETag
    let swagger = SwaggerUi::new("/docs").config(Config::new(["/openapi.json"]));
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi).head(head_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) so API changes show up in review.
pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}

#[cfg(test)]
mod tests;
