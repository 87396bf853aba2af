// src/application/authorization.rs
//! Request and object level access rules.
//!
//! A [`Policy`] is a conjunction of [`Permission`]s evaluated in declared
//! order. Request-level checks run before anything is loaded; object-level
//! checks run once the target resource has been fetched.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AllowAny,
    IsAuthenticated,
    IsSuperUser,
    /// The resource's owner is the caller.
    IsOwner,
    /// The resource is a category owned by the caller.
    IsCategoryOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Category,
    Portfolio,
    PortfolioImage,
    Post,
}

/// Anything an object-level permission can be checked against.
pub trait OwnedResource {
    fn owner_id(&self) -> Option<UserId>;
    fn resource_kind(&self) -> ResourceKind;
}

#[derive(Debug, Clone, Copy)]
pub struct Policy {
    name: &'static str,
    permissions: &'static [Permission],
}

impl Policy {
    pub const fn new(name: &'static str, permissions: &'static [Permission]) -> Self {
        Self { name, permissions }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn permissions(&self) -> &'static [Permission] {
        self.permissions
    }

    /// Runs the request-level half of the policy. Missing identity where one
    /// is needed yields 401; an identity lacking a role yields 403.
    pub fn authorize_request(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<()> {
        for permission in self.permissions {
            match permission {
                Permission::AllowAny | Permission::IsOwner | Permission::IsCategoryOwner => {}
                Permission::IsAuthenticated => {
                    if actor.is_none() {
                        return Err(self.deny_anonymous());
                    }
                }
                Permission::IsSuperUser => match actor {
                    None => return Err(self.deny_anonymous()),
                    Some(user) if !user.is_superuser => {
                        return Err(self.deny(user, *permission));
                    }
                    Some(_) => {}
                },
            }
        }
        Ok(())
    }

    /// Request-level check for operations that always act on behalf of
    /// someone; returns the caller.
    pub fn require<'a>(
        &self,
        actor: Option<&'a AuthenticatedUser>,
    ) -> ApplicationResult<&'a AuthenticatedUser> {
        self.authorize_request(actor)?;
        actor.ok_or_else(|| self.deny_anonymous())
    }

    /// Runs the object-level half of the policy against a loaded resource.
    pub fn authorize_object<R>(
        &self,
        actor: Option<&AuthenticatedUser>,
        resource: &R,
    ) -> ApplicationResult<()>
    where
        R: OwnedResource + ?Sized,
    {
        for permission in self.permissions {
            let satisfied = match permission {
                Permission::AllowAny | Permission::IsAuthenticated | Permission::IsSuperUser => {
                    continue;
                }
                Permission::IsOwner => {
                    let Some(user) = actor else {
                        return Err(self.deny_anonymous());
                    };
                    resource.owner_id() == Some(user.id)
                }
                Permission::IsCategoryOwner => {
                    let Some(user) = actor else {
                        return Err(self.deny_anonymous());
                    };
                    resource.resource_kind() == ResourceKind::Category
                        && resource.owner_id() == Some(user.id)
                }
            };
            if !satisfied {
                if let Some(user) = actor {
                    return Err(self.deny(user, *permission));
                }
            }
        }
        Ok(())
    }

    fn deny_anonymous(&self) -> ApplicationError {
        tracing::debug!(policy = self.name, "anonymous request rejected");
        ApplicationError::not_authenticated()
    }

    fn deny(&self, actor: &AuthenticatedUser, permission: Permission) -> ApplicationError {
        tracing::debug!(
            policy = self.name,
            user_id = %actor.id,
            ?permission,
            "permission denied"
        );
        ApplicationError::permission_denied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageKey;

    const SUPER_OWNER: Policy = Policy::new(
        "test.update",
        &[
            Permission::IsAuthenticated,
            Permission::IsSuperUser,
            Permission::IsCategoryOwner,
        ],
    );
    const OWNER_ONLY: Policy =
        Policy::new("test.owner", &[Permission::IsAuthenticated, Permission::IsOwner]);
    const PUBLIC: Policy = Policy::new("test.public", &[Permission::AllowAny]);

    struct Thing {
        owner: i64,
        kind: ResourceKind,
    }

    impl OwnedResource for Thing {
        fn owner_id(&self) -> Option<UserId> {
            Some(UserId(self.owner))
        }

        fn resource_kind(&self) -> ResourceKind {
            self.kind
        }
    }

    fn user(id: i64, is_superuser: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId(id),
            username: format!("user{id}"),
            is_staff: is_superuser,
            is_superuser,
        }
    }

    fn key(err: ApplicationError) -> MessageKey {
        err.message_key().expect("message key")
    }

    #[test]
    fn allow_any_accepts_anonymous() {
        assert!(PUBLIC.authorize_request(None).is_ok());
    }

    #[test]
    fn anonymous_is_unauthenticated_not_forbidden() {
        let err = SUPER_OWNER.authorize_request(None).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
        assert_eq!(key(err), MessageKey::NotAuthenticated);
    }

    #[test]
    fn regular_user_is_forbidden_from_superuser_policy() {
        let actor = user(2, false);
        let err = SUPER_OWNER.authorize_request(Some(&actor)).unwrap_err();
        assert!(matches!(err, ApplicationError::Forbidden(_)));
    }

    #[test]
    fn category_owner_check_requires_matching_kind_and_owner() {
        let actor = user(1, true);
        assert!(SUPER_OWNER.authorize_request(Some(&actor)).is_ok());

        let own = Thing {
            owner: 1,
            kind: ResourceKind::Category,
        };
        assert!(SUPER_OWNER.authorize_object(Some(&actor), &own).is_ok());

        let foreign = Thing {
            owner: 9,
            kind: ResourceKind::Category,
        };
        let err = SUPER_OWNER.authorize_object(Some(&actor), &foreign).unwrap_err();
        assert_eq!(key(err), MessageKey::PermissionDenied);

        let not_category = Thing {
            owner: 1,
            kind: ResourceKind::Post,
        };
        assert!(SUPER_OWNER
            .authorize_object(Some(&actor), &not_category)
            .is_err());
    }

    #[test]
    fn owner_policy_ignores_superuser_flag() {
        let admin = user(5, true);
        let post = Thing {
            owner: 6,
            kind: ResourceKind::Post,
        };
        assert!(OWNER_ONLY.authorize_object(Some(&admin), &post).is_err());
        let author = user(6, false);
        assert!(OWNER_ONLY.authorize_object(Some(&author), &post).is_ok());
    }

    #[test]
    fn require_returns_the_caller() {
        let actor = user(3, false);
        let resolved = OWNER_ONLY.require(Some(&actor)).unwrap();
        assert_eq!(resolved.id, UserId(3));
        assert!(OWNER_ONLY.require(None).is_err());
    }
}
