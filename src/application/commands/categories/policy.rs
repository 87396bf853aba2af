// src/application/commands/categories/policy.rs
use crate::application::authorization::{OwnedResource, Permission, Policy, ResourceKind};
use crate::domain::{category::Category, user::UserId};

pub(crate) const READ: Policy = Policy::new("categories.read", &[Permission::AllowAny]);

pub(crate) const CREATE: Policy = Policy::new(
    "categories.create",
    &[Permission::IsAuthenticated, Permission::IsSuperUser],
);

pub(crate) const MODIFY: Policy = Policy::new(
    "categories.modify",
    &[
        Permission::IsAuthenticated,
        Permission::IsSuperUser,
        Permission::IsCategoryOwner,
    ],
);

impl OwnedResource for Category {
    fn owner_id(&self) -> Option<UserId> {
        Some(self.user_id)
    }

    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Category
    }
}
