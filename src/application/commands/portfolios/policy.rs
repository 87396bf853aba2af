// src/application/commands/portfolios/policy.rs
//! Portfolios are managed by any superuser; there is no per-user scoping.
use crate::application::authorization::{Permission, Policy};

pub(crate) const READ: Policy = Policy::new("portfolios.read", &[Permission::AllowAny]);

pub(crate) const MANAGE: Policy = Policy::new(
    "portfolios.manage",
    &[Permission::IsAuthenticated, Permission::IsSuperUser],
);
