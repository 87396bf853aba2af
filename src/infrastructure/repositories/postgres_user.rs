// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use super::postgres_portfolio::PortfolioInfoRow;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::MessageKey;
use crate::domain::portfolio::{PortfolioInfo, PortfolioInfoChanges};
use crate::domain::user::{
    Email, NewUser, PasswordHash, ProfileFields, ProfileRepository, User, UserId, UserRepository,
    UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
     is_staff, is_superuser, is_active, job_title, phone_number, location, about_me, \
     about_me_ar, date_joined";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_profile_query(id: UserId, fields: ProfileFields) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(first_name) = fields.first_name {
                set.push("first_name = ").push_bind_unseparated(first_name);
            }
            if let Some(last_name) = fields.last_name {
                set.push("last_name = ").push_bind_unseparated(last_name);
            }
            if let Some(email) = fields.email {
                set.push("email = ")
                    .push_bind_unseparated(String::from(email));
            }
            if let Some(job_title) = fields.job_title {
                set.push("job_title = ").push_bind_unseparated(job_title);
            }
            if let Some(phone_number) = fields.phone_number {
                set.push("phone_number = ").push_bind_unseparated(phone_number);
            }
            if let Some(location) = fields.location {
                set.push("location = ").push_bind_unseparated(location);
            }
            if let Some(about_me) = fields.about_me {
                set.push("about_me = ").push_bind_unseparated(about_me);
            }
            if let Some(about_me_ar) = fields.about_me_ar {
                set.push("about_me_ar = ").push_bind_unseparated(about_me_ar);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);
        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    is_staff: bool,
    is_superuser: bool,
    is_active: bool,
    job_title: Option<String>,
    phone_number: Option<String>,
    location: Option<String>,
    about_me: Option<String>,
    about_me_ar: Option<String>,
    date_joined: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            first_name: row.first_name,
            last_name: row.last_name,
            is_staff: row.is_staff,
            is_superuser: row.is_superuser,
            is_active: row.is_active,
            job_title: row.job_title,
            phone_number: row.phone_number,
            location: row.location,
            about_me: row.about_me,
            about_me_ar: row.about_me_ar,
            date_joined: row.date_joined,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            first_name,
            last_name,
            is_staff,
            is_superuser,
            date_joined,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, \
             is_staff, is_superuser, is_active, date_joined)
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(first_name)
        .bind(last_name)
        .bind(is_staff)
        .bind(is_superuser)
        .bind(date_joined)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate { id, password_hash } = update;

        let row = match password_hash {
            Some(hash) => sqlx::query_as::<_, UserRow>(&format!(
                "UPDATE users SET password_hash = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
            ))
            .bind(i64::from(id))
            .bind(hash.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?,
            None => sqlx::query_as::<_, UserRow>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
            ))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?,
        };

        row.ok_or_else(|| DomainError::not_found(MessageKey::UserNotFound))
            .and_then(User::try_from)
    }
}

#[async_trait]
impl ProfileRepository for PostgresUserRepository {
    async fn update_profile(
        &self,
        user_id: UserId,
        fields: ProfileFields,
        info: Option<PortfolioInfoChanges>,
    ) -> DomainResult<(User, Option<PortfolioInfo>)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let user_row = if fields.is_empty() {
            sqlx::query_as::<_, UserRow>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE"
            ))
            .bind(i64::from(user_id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
        } else {
            Self::build_profile_query(user_id, fields)
                .build_query_as::<UserRow>()
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?
        };
        let user = user_row
            .ok_or_else(|| DomainError::not_found(MessageKey::UserNotFound))
            .and_then(User::try_from)?;

        let info_row = match info {
            Some(changes) if !changes.is_empty() => {
                let (bg_name, bg_url) = changes
                    .background_image
                    .map(|image| (image.name, image.url))
                    .unzip();
                // COALESCE keeps the stored value for every column the
                // request left out, and the defaults apply on first insert.
                let row = sqlx::query_as::<_, PortfolioInfoRow>(
                    "INSERT INTO portfolio_info (user_id, portfolio_title, portfolio_title_ar, \
                     background_image_name, background_image_url, created_at, updated_at)
                     VALUES ($1, COALESCE($2, $6), COALESCE($3, $7), $4, $5, $8, $8)
                     ON CONFLICT (user_id) DO UPDATE SET
                        portfolio_title = COALESCE($2, portfolio_info.portfolio_title),
                        portfolio_title_ar = COALESCE($3, portfolio_info.portfolio_title_ar),
                        background_image_name = COALESCE($4, portfolio_info.background_image_name),
                        background_image_url = COALESCE($5, portfolio_info.background_image_url),
                        updated_at = $8
                     RETURNING id, user_id, portfolio_title, portfolio_title_ar, \
                     background_image_name, background_image_url, created_at, updated_at",
                )
                .bind(i64::from(user_id))
                .bind(changes.portfolio_title)
                .bind(changes.portfolio_title_ar)
                .bind(bg_name)
                .bind(bg_url)
                .bind(PortfolioInfo::DEFAULT_TITLE)
                .bind(PortfolioInfo::DEFAULT_TITLE_AR)
                .bind(changes.now)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;
                Some(row)
            }
            _ => sqlx::query_as::<_, PortfolioInfoRow>(
                "SELECT id, user_id, portfolio_title, portfolio_title_ar, \
                 background_image_name, background_image_url, created_at, updated_at
                 FROM portfolio_info WHERE user_id = $1",
            )
            .bind(i64::from(user_id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?,
        };

        tx.commit().await.map_err(map_sqlx)?;

        let info = info_row.map(PortfolioInfo::try_from).transpose()?;
        Ok((user, info))
    }
}
