// tests/profile.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{Part, TestApp, UserBuilder, assert_error, multipart_request};

#[tokio::test]
async fn profile_requires_authentication() {
    let app = TestApp::new();
    let resp = app.get("/api/users/profile/", None).await;
    assert_error(&resp, StatusCode::UNAUTHORIZED, "auth.not_authenticated");
}

#[tokio::test]
async fn json_update_is_partial() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let token = app.token_for(id).await;

    let first = app
        .json(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            &json!({ "first_name": "Lina", "job_title": "Director", "location": "Amman" }),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK, "{}", first.body);
    assert_eq!(first.body["full_name"], "Lina");
    assert!(first.body["portfolio_title"].is_null());

    let second = app
        .json(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            &json!({ "job_title": "", "about_me_ar": "مخرجة" }),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK, "{}", second.body);
    assert!(second.body["job_title"].is_null());
    assert_eq!(second.body["location"], "Amman");
    assert_eq!(second.body["about_me_ar"], "مخرجة");

    let fetched = app.get("/api/users/profile/", Some(&token)).await;
    assert_eq!(fetched.body, second.body);
}

#[tokio::test]
async fn invalid_email_is_reported_on_the_field() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let token = app.token_for(id).await;
    let resp = app
        .json(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            &json!({ "email": "not-an-address" }),
        )
        .await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "users.email_invalid");
    assert_eq!(resp.body["field"], "email");
    assert_eq!(app.store.user(id).unwrap().email.as_str(), "lina@example.com");
}

#[tokio::test]
async fn multipart_update_stores_background_image() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let token = app.token_for(id).await;

    let resp = app
        .send(multipart_request(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            vec![
                Part::Text("portfolio_title_ar", "أعمال لينا"),
                Part::File {
                    name: "background_image",
                    file_name: "hero.jpg",
                    content_type: "image/jpeg",
                    data: vec![1_u8; 2048],
                },
            ],
        ))
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{}", resp.body);
    assert_eq!(resp.body["portfolio_title"], "My Portfolio");
    assert_eq!(resp.body["portfolio_title_ar"], "أعمال لينا");
    let url = resp.body["background_image"].as_str().unwrap();
    assert!(url.starts_with("/media/portfolio_background/"), "{url}");
    assert!(url.ends_with(".jpg"));

    let replaced = app
        .send(multipart_request(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            vec![Part::File {
                name: "background_image",
                file_name: "hero.png",
                content_type: "image/png",
                data: vec![2_u8; 4096],
            }],
        ))
        .await;
    assert_eq!(replaced.status, StatusCode::OK, "{}", replaced.body);
    assert_eq!(app.storage.len(), 1);
}

#[tokio::test]
async fn non_image_background_is_rejected() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let token = app.token_for(id).await;
    let resp = app
        .send(multipart_request(
            Method::PUT,
            "/api/users/profile/",
            Some(&token),
            vec![Part::File {
                name: "background_image",
                file_name: "notes.pdf",
                content_type: "application/pdf",
                data: vec![3_u8; 128],
            }],
        ))
        .await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "media.image_invalid");
    assert_eq!(resp.body["field"], "background_image");
    assert_eq!(app.storage.len(), 0);
}
