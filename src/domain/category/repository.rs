// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;

    /// Fails with [`DomainError::Protected`](crate::domain::errors::DomainError::Protected)
    /// while portfolios still reference the category.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    /// All categories ordered by `(order, name)`.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
