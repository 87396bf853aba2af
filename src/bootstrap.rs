// src/bootstrap.rs
use crate::application::{
    ApplicationResult,
    ports::{
        i18n::Translator,
        security::{PasswordHasher, TokenService},
        storage::BlobStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use crate::config::AppConfig;
use crate::infrastructure::{
    i18n::StaticCatalog,
    repositories::{
        PostgresCategoryRepository, PostgresPortfolioImageRepository,
        PostgresPortfolioInfoRepository, PostgresPortfolioRepository, PostgresPostRepository,
        PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenService},
    storage::LocalBlobStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use crate::presentation::http::state::HttpSettings;
use sqlx::PgPool;
use std::sync::Arc;

/// Wires the PostgreSQL repositories and local adapters into the
/// application services.
pub fn build_services(config: &AppConfig, pool: &PgPool) -> ApplicationResult<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        config.jwt_secret(),
        config.access_token_ttl(),
        config.refresh_token_ttl(),
        Arc::clone(&clock),
    )?);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let storage: Arc<dyn BlobStorage> = Arc::new(LocalBlobStorage::new(
        config.media_root().clone(),
        config.media_base_url(),
    ));
    let translator: Arc<dyn Translator> = Arc::new(StaticCatalog);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));

    Ok(ApplicationServices::new(ServiceDependencies {
        user_repo: user_repo.clone(),
        profile_repo: user_repo,
        category_repo: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        portfolio_repo: Arc::new(PostgresPortfolioRepository::new(pool.clone())),
        image_repo: Arc::new(PostgresPortfolioImageRepository::new(pool.clone())),
        info_repo: Arc::new(PostgresPortfolioInfoRepository::new(pool.clone())),
        post_repo: Arc::new(PostgresPostRepository::new(pool.clone())),
        password_hasher,
        token_service,
        storage,
        translator,
        clock,
        slugger,
        listing: config.listing(),
    }))
}

pub fn http_settings(config: &AppConfig) -> HttpSettings {
    HttpSettings {
        default_locale: config.default_locale(),
        allowed_origins: config.allowed_origins().to_vec(),
        max_request_bytes: config.max_request_bytes(),
        media_root: Some(config.media_root().clone()),
        media_base_url: config.media_base_url().to_string(),
        rate_limit: config.rate_limit_enabled(),
    }
}
