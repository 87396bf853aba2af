// src/application/commands/posts/policy.rs
use crate::application::authorization::{OwnedResource, Permission, Policy, ResourceKind};
use crate::domain::{post::Post, user::UserId};

/// Listing and creating only need a signed-in caller; the list is scoped to
/// the caller's own posts.
pub(crate) const AUTHOR: Policy = Policy::new("posts.author", &[Permission::IsAuthenticated]);

pub(crate) const OWNER: Policy = Policy::new(
    "posts.owner",
    &[Permission::IsAuthenticated, Permission::IsOwner],
);

impl OwnedResource for Post {
    fn owner_id(&self) -> Option<UserId> {
        Some(self.author_id)
    }

    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Post
    }
}
