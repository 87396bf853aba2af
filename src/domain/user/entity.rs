// src/domain/user/entity.rs
use crate::domain::errors::{DomainResult, optional_text};
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ar: Option<String>,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// First and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            is_superuser: false,
            date_joined,
        }
    }

    /// Superusers are always staff.
    #[must_use]
    pub fn superuser(mut self) -> Self {
        self.is_staff = true;
        self.is_superuser = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub password_hash: Option<PasswordHash>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            password_hash: None,
        }
    }

    #[must_use]
    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}

/// Partial update of the profile columns of a user. `None` leaves a column
/// untouched; `Some(None)` clears an optional column.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Email>,
    pub job_title: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub about_me: Option<Option<String>>,
    pub about_me_ar: Option<Option<String>>,
}

impl ProfileFields {
    pub const JOB_TITLE_MAX: usize = 200;
    pub const PHONE_MAX: usize = 20;
    pub const LOCATION_MAX: usize = 250;
    pub const ABOUT_MAX: usize = 2000;
    pub const NAME_MAX: usize = 150;

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.job_title.is_none()
            && self.phone_number.is_none()
            && self.location.is_none()
            && self.about_me.is_none()
            && self.about_me_ar.is_none()
    }

    pub fn optional(
        field: &'static str,
        value: Option<String>,
        max: usize,
    ) -> DomainResult<Option<Option<String>>> {
        value
            .map(|v| optional_text(field, Some(v), max))
            .transpose()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(v) = &self.first_name {
            user.first_name.clone_from(v);
        }
        if let Some(v) = &self.last_name {
            user.last_name.clone_from(v);
        }
        if let Some(v) = &self.email {
            user.email = v.clone();
        }
        if let Some(v) = &self.job_title {
            user.job_title.clone_from(v);
        }
        if let Some(v) = &self.phone_number {
            user.phone_number.clone_from(v);
        }
        if let Some(v) = &self.location {
            user.location.clone_from(v);
        }
        if let Some(v) = &self.about_me {
            user.about_me.clone_from(v);
        }
        if let Some(v) = &self.about_me_ar {
            user.about_me_ar.clone_from(v);
        }
    }
}
