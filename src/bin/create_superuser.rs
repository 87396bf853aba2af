// src/bin/create_superuser.rs
use anyhow::{Context, Result};
use folio_core::{
    application::commands::users::CreateSuperuserCommand, bootstrap::build_services,
    config::AppConfig, infrastructure::database,
};
use std::env;

/// Creates the administrator account from `SUPERUSER_USERNAME`,
/// `SUPERUSER_PASSWORD` and `SUPERUSER_EMAIL`.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("info,sqlx=warn"))
        .init();

    let config = AppConfig::from_env()?;
    let username = env::var("SUPERUSER_USERNAME").context("SUPERUSER_USERNAME is not set")?;
    let password = env::var("SUPERUSER_PASSWORD").context("SUPERUSER_PASSWORD is not set")?;
    let email = env::var("SUPERUSER_EMAIL").unwrap_or_default();

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let services = build_services(&config, &pool)?;

    let user = services
        .user_commands
        .create_superuser(CreateSuperuserCommand {
            username,
            email,
            password,
        })
        .await?;
    println!("superuser {} created (id {})", user.username, user.id);

    pool.close().await;
    Ok(())
}
