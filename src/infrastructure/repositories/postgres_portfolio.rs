// src/infrastructure/repositories/postgres_portfolio.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::StoredObject;
use crate::domain::message::MessageKey;
use crate::domain::portfolio::{
    NewPortfolio, NewPortfolioImage, Portfolio, PortfolioBody, PortfolioFilter, PortfolioId,
    PortfolioImage, PortfolioImageId, PortfolioImageRepository, PortfolioInfo,
    PortfolioInfoRepository, PortfolioRepository, PortfolioTitle, PortfolioUpdate, Window,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PORTFOLIO_COLUMNS: &str = "id, author_id, title, subtitle, image_name, image_url, \
     category_id, body, completed, created_at, updated_at";
const IMAGE_COLUMNS: &str = "id, portfolio_id, image_name, image_url, caption, created_at";
const INFO_COLUMNS: &str = "id, user_id, portfolio_title, portfolio_title_ar, \
     background_image_name, background_image_url, created_at, updated_at";

fn stored_object(name: Option<String>, url: Option<String>) -> Option<StoredObject> {
    match (name, url) {
        (Some(name), Some(url)) => Some(StoredObject::new(name, url)),
        _ => None,
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: PortfolioFilter) {
    if let Some(category_id) = filter.category_id {
        builder.push(" WHERE category_id = ");
        builder.push_bind(i64::from(category_id));
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: PortfolioUpdate) -> QueryBuilder<'static, Postgres> {
        let PortfolioUpdate {
            id,
            title,
            subtitle,
            image,
            category_id,
            body,
            completed,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE portfolios SET ");
        {
            let mut set = builder.separated(", ");
            set.push("updated_at = ").push_bind_unseparated(updated_at);
            if let Some(title) = title {
                set.push("title = ").push_bind_unseparated(String::from(title));
            }
            if let Some(subtitle) = subtitle {
                set.push("subtitle = ").push_bind_unseparated(subtitle);
            }
            if let Some(image) = image {
                let (name, url) = image.map(|object| (object.name, object.url)).unzip();
                set.push("image_name = ").push_bind_unseparated(name);
                set.push("image_url = ").push_bind_unseparated(url);
            }
            if let Some(category_id) = category_id {
                set.push("category_id = ")
                    .push_bind_unseparated(category_id.map(i64::from));
            }
            if let Some(body) = body {
                set.push("body = ").push_bind_unseparated(String::from(body));
            }
            if let Some(completed) = completed {
                set.push("completed = ").push_bind_unseparated(completed);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PORTFOLIO_COLUMNS);
        builder
    }
}

#[derive(Debug, FromRow)]
struct PortfolioRow {
    id: i64,
    author_id: i64,
    title: String,
    subtitle: Option<String>,
    image_name: Option<String>,
    image_url: Option<String>,
    category_id: Option<i64>,
    body: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PortfolioRow> for Portfolio {
    type Error = DomainError;

    fn try_from(row: PortfolioRow) -> Result<Self, Self::Error> {
        Ok(Portfolio {
            id: PortfolioId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: PortfolioTitle::new(row.title)?,
            subtitle: row.subtitle,
            image: stored_object(row.image_name, row.image_url),
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            body: PortfolioBody::new(row.body)?,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn insert(&self, portfolio: NewPortfolio) -> DomainResult<Portfolio> {
        let NewPortfolio {
            author_id,
            title,
            subtitle,
            image,
            category_id,
            body,
            completed,
            created_at,
        } = portfolio;
        let (image_name, image_url) = image.map(|object| (object.name, object.url)).unzip();

        let row = sqlx::query_as::<_, PortfolioRow>(&format!(
            "INSERT INTO portfolios (author_id, title, subtitle, image_name, image_url, \
             category_id, body, completed, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {PORTFOLIO_COLUMNS}"
        ))
        .bind(i64::from(author_id))
        .bind(title.as_str())
        .bind(subtitle)
        .bind(image_name)
        .bind(image_url)
        .bind(category_id.map(i64::from))
        .bind(body.as_str())
        .bind(completed)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Portfolio::try_from(row)
    }

    async fn update(&self, update: PortfolioUpdate) -> DomainResult<Portfolio> {
        let row = Self::build_update_query(update)
            .build_query_as::<PortfolioRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(MessageKey::PortfolioNotFound))?;

        Portfolio::try_from(row)
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(MessageKey::PortfolioNotFound));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<Portfolio>> {
        let row = sqlx::query_as::<_, PortfolioRow>(&format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolios WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Portfolio::try_from).transpose()
    }

    async fn count(&self, filter: PortfolioFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM portfolios");
        push_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn list(&self, filter: PortfolioFilter, window: Window) -> DomainResult<Vec<Portfolio>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(PORTFOLIO_COLUMNS);
        builder.push(" FROM portfolios");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(to_i64(window.limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(window.offset));

        let rows = builder
            .build_query_as::<PortfolioRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Portfolio::try_from).collect()
    }
}

#[derive(Clone)]
pub struct PostgresPortfolioImageRepository {
    pool: PgPool,
}

impl PostgresPortfolioImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PortfolioImageRow {
    id: i64,
    portfolio_id: i64,
    image_name: String,
    image_url: String,
    caption: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PortfolioImageRow> for PortfolioImage {
    type Error = DomainError;

    fn try_from(row: PortfolioImageRow) -> Result<Self, Self::Error> {
        Ok(PortfolioImage {
            id: PortfolioImageId::new(row.id)?,
            portfolio_id: PortfolioId::new(row.portfolio_id)?,
            image: StoredObject::new(row.image_name, row.image_url),
            caption: row.caption,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PortfolioImageRepository for PostgresPortfolioImageRepository {
    async fn insert(&self, image: NewPortfolioImage) -> DomainResult<PortfolioImage> {
        let NewPortfolioImage {
            portfolio_id,
            image,
            caption,
            created_at,
        } = image;

        let row = sqlx::query_as::<_, PortfolioImageRow>(&format!(
            "INSERT INTO portfolio_images (portfolio_id, image_name, image_url, caption, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(i64::from(portfolio_id))
        .bind(image.name)
        .bind(image.url)
        .bind(caption)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PortfolioImage::try_from(row)
    }

    async fn delete(&self, portfolio_id: PortfolioId, id: PortfolioImageId) -> DomainResult<()> {
        let result =
            sqlx::query("DELETE FROM portfolio_images WHERE id = $1 AND portfolio_id = $2")
                .bind(i64::from(id))
                .bind(i64::from(portfolio_id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(MessageKey::PortfolioImageNotFound));
        }
        Ok(())
    }

    async fn find(
        &self,
        portfolio_id: PortfolioId,
        id: PortfolioImageId,
    ) -> DomainResult<Option<PortfolioImage>> {
        let row = sqlx::query_as::<_, PortfolioImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM portfolio_images WHERE id = $1 AND portfolio_id = $2"
        ))
        .bind(i64::from(id))
        .bind(i64::from(portfolio_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PortfolioImage::try_from).transpose()
    }

    async fn list_for_portfolio(
        &self,
        portfolio_id: PortfolioId,
    ) -> DomainResult<Vec<PortfolioImage>> {
        let rows = sqlx::query_as::<_, PortfolioImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM portfolio_images
             WHERE portfolio_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(i64::from(portfolio_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PortfolioImage::try_from).collect()
    }
}

#[derive(Clone)]
pub struct PostgresPortfolioInfoRepository {
    pool: PgPool,
}

impl PostgresPortfolioInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct PortfolioInfoRow {
    id: i64,
    user_id: Option<i64>,
    portfolio_title: String,
    portfolio_title_ar: String,
    background_image_name: Option<String>,
    background_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PortfolioInfoRow> for PortfolioInfo {
    type Error = DomainError;

    fn try_from(row: PortfolioInfoRow) -> Result<Self, Self::Error> {
        Ok(PortfolioInfo {
            id: row.id,
            user_id: row.user_id.map(UserId::new).transpose()?,
            portfolio_title: row.portfolio_title,
            portfolio_title_ar: row.portfolio_title_ar,
            background_image: stored_object(row.background_image_name, row.background_image_url),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PortfolioInfoRepository for PostgresPortfolioInfoRepository {
    async fn first(&self) -> DomainResult<Option<PortfolioInfo>> {
        let row = sqlx::query_as::<_, PortfolioInfoRow>(&format!(
            "SELECT {INFO_COLUMNS} FROM portfolio_info ORDER BY id ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PortfolioInfo::try_from).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PortfolioInfo>> {
        let row = sqlx::query_as::<_, PortfolioInfoRow>(&format!(
            "SELECT {INFO_COLUMNS} FROM portfolio_info WHERE user_id = $1"
        ))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PortfolioInfo::try_from).transpose()
    }
}
