// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::MessageKey;
use crate::domain::post::{NewPost, Post, PostCategory, PostId, PostRepository, PostUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, author_id, title, subtitle, category, body, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: PostUpdate) -> QueryBuilder<'static, Postgres> {
        let PostUpdate {
            id,
            title,
            subtitle,
            category,
            body,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET ");
        {
            let mut set = builder.separated(", ");
            set.push("updated_at = ").push_bind_unseparated(updated_at);
            if let Some(title) = title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(subtitle) = subtitle {
                set.push("subtitle = ").push_bind_unseparated(subtitle);
            }
            if let Some(category) = category {
                set.push("category = ")
                    .push_bind_unseparated(category.map(|c| c.as_str().to_string()));
            }
            if let Some(body) = body {
                set.push("body = ").push_bind_unseparated(body);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);
        builder
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    title: String,
    subtitle: Option<String>,
    category: Option<String>,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: row.title,
            subtitle: row.subtitle,
            category: row
                .category
                .as_deref()
                .map(str::parse::<PostCategory>)
                .transpose()?,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            author_id,
            title,
            subtitle,
            category,
            body,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (author_id, title, subtitle, category, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(i64::from(author_id))
        .bind(title)
        .bind(subtitle)
        .bind(category.map(|c| c.as_str()))
        .bind(body)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let row = Self::build_update_query(update)
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(MessageKey::PostNotFound))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(MessageKey::PostNotFound));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
