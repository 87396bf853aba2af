// src/application/commands/users/policy.rs
use crate::application::authorization::{Permission, Policy};

pub(crate) const AUTHENTICATED: Policy =
    Policy::new("users.authenticated", &[Permission::IsAuthenticated]);
