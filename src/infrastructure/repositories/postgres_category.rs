// src/infrastructure/repositories/postgres_category.rs
use super::{map_restricted_delete, map_sqlx};
use crate::domain::category::{
    Category, CategoryArabicName, CategoryId, CategoryName, CategoryRepository, CategorySlug,
    CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::MessageKey;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CATEGORY_COLUMNS: &str = "id, user_id, name, name_ar, slug, icon, description, \
     description_ar, features, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: CategoryUpdate) -> QueryBuilder<'static, Postgres> {
        let CategoryUpdate {
            id,
            name,
            name_ar,
            icon,
            description,
            description_ar,
            features,
            order,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE categories SET ");
        {
            let mut set = builder.separated(", ");
            set.push("updated_at = ").push_bind_unseparated(updated_at);
            if let Some(name) = name {
                set.push("name = ").push_bind_unseparated(String::from(name));
            }
            if let Some(name_ar) = name_ar {
                set.push("name_ar = ").push_bind_unseparated(String::from(name_ar));
            }
            if let Some(icon) = icon {
                set.push("icon = ").push_bind_unseparated(icon);
            }
            if let Some(description) = description {
                set.push("description = ").push_bind_unseparated(description);
            }
            if let Some(description_ar) = description_ar {
                set.push("description_ar = ").push_bind_unseparated(description_ar);
            }
            if let Some(features) = features {
                set.push("features = ").push_bind_unseparated(features);
            }
            if let Some(order) = order {
                set.push("display_order = ").push_bind_unseparated(order);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(CATEGORY_COLUMNS);
        builder
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    user_id: i64,
    name: String,
    name_ar: String,
    slug: String,
    icon: Option<String>,
    description: Option<String>,
    description_ar: Option<String>,
    features: Vec<String>,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            name: CategoryName::new(row.name)?,
            name_ar: CategoryArabicName::new(row.name_ar)?,
            slug: CategorySlug::new(row.slug)?,
            icon: row.icon,
            description: row.description,
            description_ar: row.description_ar,
            features: row.features,
            order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            user_id,
            name,
            name_ar,
            slug,
            icon,
            description,
            description_ar,
            features,
            order,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (user_id, name, name_ar, slug, icon, description, \
             description_ar, features, display_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(i64::from(user_id))
        .bind(name.as_str())
        .bind(name_ar.as_str())
        .bind(slug.as_str())
        .bind(icon)
        .bind(description)
        .bind(description_ar)
        .bind(features)
        .bind(order)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let row = Self::build_update_query(update)
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(MessageKey::CategoryNotFound))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| map_restricted_delete(err, MessageKey::CategoryProtected))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(MessageKey::CategoryNotFound));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY display_order ASC, name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
