// tests/support/builders.rs
use super::helpers::TestApp;
use super::mocks::{FIXED_NOW, StrictPasswordHasher};
use axum::http::{Method, StatusCode};
use folio_core::domain::user::{Email, NewUser, PasswordHash, UserRepository, Username};
use serde_json::{Value, json};

pub const PASSWORD: &str = "Sturdy-Lantern-42";

pub struct UserBuilder {
    username: String,
    email: String,
    password: String,
    superuser: bool,
}

impl UserBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.into(),
            email: format!("{username}@example.com"),
            password: PASSWORD.into(),
            superuser: false,
        }
    }

    pub fn superuser(mut self) -> Self {
        self.superuser = true;
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Inserts the user and returns its id.
    pub async fn insert(self, app: &TestApp) -> i64 {
        let mut new_user = NewUser::new(
            Username::new(self.username).unwrap(),
            Email::new(self.email).unwrap(),
            PasswordHash::new(StrictPasswordHasher::hash_of(&self.password)).unwrap(),
            *FIXED_NOW,
        );
        if self.superuser {
            new_user = new_user.superuser();
        }
        let user = UserRepository::insert(app.store.as_ref(), new_user)
            .await
            .unwrap();
        user.id.into()
    }
}

/// A superuser with a ready access token.
pub async fn admin(app: &TestApp) -> (i64, String) {
    let id = UserBuilder::new("admin").superuser().insert(app).await;
    (id, app.token_for(id).await)
}

pub async fn create_category(app: &TestApp, token: &str, name: &str, name_ar: &str) -> Value {
    let response = app
        .json(
            Method::POST,
            "/api/portfolio/categories/",
            Some(token),
            &json!({ "name": name, "name_ar": name_ar }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body
}

pub async fn create_portfolio(
    app: &TestApp,
    token: &str,
    title: &str,
    category_id: Option<i64>,
) -> Value {
    let response = app
        .json(
            Method::POST,
            "/api/portfolio/",
            Some(token),
            &json!({ "title": title, "body": "Details", "category_id": category_id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body
}

pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().unwrap()
}
