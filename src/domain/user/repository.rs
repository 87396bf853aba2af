// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::portfolio::{PortfolioInfo, PortfolioInfoChanges};
use crate::domain::user::{
    entity::{NewUser, ProfileFields, User, UserUpdate},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
}

/// Writes the user's profile columns and the linked site metadata as one unit.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn update_profile(
        &self,
        user_id: UserId,
        fields: ProfileFields,
        info: Option<PortfolioInfoChanges>,
    ) -> DomainResult<(User, Option<PortfolioInfo>)>;
}
