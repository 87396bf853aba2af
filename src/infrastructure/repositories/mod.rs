// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_portfolio;
mod postgres_post;
mod postgres_user;

pub(crate) use error::{map_restricted_delete, map_sqlx};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_portfolio::{
    PostgresPortfolioImageRepository, PostgresPortfolioInfoRepository, PostgresPortfolioRepository,
};
pub use postgres_post::PostgresPostRepository;
pub use postgres_user::PostgresUserRepository;
