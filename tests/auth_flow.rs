// tests/auth_flow.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{PASSWORD, TestApp, UserBuilder, assert_error};

#[tokio::test]
async fn login_returns_user_and_both_tokens() {
    let app = TestApp::new();
    UserBuilder::new("maha").insert(&app).await;

    let resp = app
        .json(
            Method::POST,
            "/api/auth/login/",
            None,
            &json!({ "username": "maha", "password": PASSWORD }),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK, "{}", resp.body);
    assert_eq!(resp.body["user"]["username"], "maha");
    assert!(resp.body["access"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(resp.body["refresh"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn bad_credentials_are_rejected_without_tokens() {
    let app = TestApp::new();
    UserBuilder::new("maha").insert(&app).await;

    for payload in [
        json!({ "username": "maha", "password": "wrong-password" }),
        json!({ "username": "nobody", "password": PASSWORD }),
    ] {
        let resp = app
            .json(Method::POST, "/api/auth/login/", None, &payload)
            .await;
        assert_error(&resp, StatusCode::BAD_REQUEST, "auth.invalid_credentials");
        assert_eq!(resp.body["message"], "Invalid credentials");
        assert!(resp.body.get("access").is_none());
    }
}

#[tokio::test]
async fn me_requires_a_valid_access_token() {
    let app = TestApp::new();
    let id = UserBuilder::new("omar").insert(&app).await;

    let anonymous = app.get("/api/auth/me/", None).await;
    assert_error(&anonymous, StatusCode::UNAUTHORIZED, "auth.not_authenticated");

    let garbage = app.get("/api/auth/me/", Some("not-a-token")).await;
    assert_error(&garbage, StatusCode::UNAUTHORIZED, "auth.token_invalid");

    let refresh = app.refresh_token_for(id).await;
    let wrong_type = app.get("/api/auth/me/", Some(&refresh)).await;
    assert_error(&wrong_type, StatusCode::UNAUTHORIZED, "auth.token_wrong_type");

    let access = app.token_for(id).await;
    let resp = app.get("/api/auth/me/", Some(&access)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({
            "id": id,
            "username": "omar",
            "email": "omar@example.com",
            "first_name": "",
            "last_name": ""
        })
    );
}

#[tokio::test]
async fn logout_is_stateless() {
    let app = TestApp::new();
    let id = UserBuilder::new("omar").insert(&app).await;
    let access = app.token_for(id).await;

    let resp = app
        .json(Method::POST, "/api/auth/logout/", Some(&access), &json!({}))
        .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    // nothing is revoked; the access token keeps working until it expires
    let me = app.get("/api/auth/me/", Some(&access)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn refresh_token_can_be_reused() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let refresh = app.refresh_token_for(id).await;

    for _ in 0..2 {
        let resp = app
            .json(
                Method::POST,
                "/api/auth/token/refresh/",
                None,
                &json!({ "refresh": refresh }),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "{}", resp.body);
        let access = resp.body["access"].as_str().unwrap().to_string();
        let me = app.get("/api/auth/me/", Some(&access)).await;
        assert_eq!(me.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn access_token_cannot_refresh() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;
    let access = app.token_for(id).await;

    let resp = app
        .json(
            Method::POST,
            "/api/auth/token/refresh/",
            None,
            &json!({ "refresh": access }),
        )
        .await;
    assert_error(&resp, StatusCode::UNAUTHORIZED, "auth.invalid_refresh_token");
}

#[tokio::test]
async fn verify_accepts_either_token_type() {
    let app = TestApp::new();
    let id = UserBuilder::new("lina").insert(&app).await;

    for token in [app.token_for(id).await, app.refresh_token_for(id).await] {
        let resp = app
            .json(
                Method::POST,
                "/api/auth/token/verify/",
                None,
                &json!({ "token": token }),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body, json!({}));
    }

    let resp = app
        .json(
            Method::POST,
            "/api/auth/token/verify/",
            None,
            &json!({ "token": "abc.def.ghi" }),
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn password_change_checks_old_password_and_strength() {
    let app = TestApp::new();
    let id = UserBuilder::new("samir").insert(&app).await;
    let token = app.token_for(id).await;

    let wrong_old = app
        .json(
            Method::POST,
            "/api/auth/password-change/",
            Some(&token),
            &json!({ "old_password": "nope", "new_password": "Another-Good-Pass9" }),
        )
        .await;
    assert_error(&wrong_old, StatusCode::BAD_REQUEST, "auth.old_password_incorrect");
    assert_eq!(wrong_old.body["field"], "old_password");

    for (weak, code) in [
        ("short1", "auth.password_too_short"),
        ("9876543210", "auth.password_entirely_numeric"),
        ("password", "auth.password_too_common"),
        ("samir123", "auth.password_too_similar"),
    ] {
        let resp = app
            .json(
                Method::POST,
                "/api/auth/password-change/",
                Some(&token),
                &json!({ "old_password": PASSWORD, "new_password": weak }),
            )
            .await;
        assert_error(&resp, StatusCode::BAD_REQUEST, code);
        assert_eq!(resp.body["field"], "new_password");
    }

    let ok = app
        .json(
            Method::POST,
            "/api/auth/password-change/",
            Some(&token),
            &json!({ "old_password": PASSWORD, "new_password": "Another-Good-Pass9" }),
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK, "{}", ok.body);
    assert!(ok.body["detail"].as_str().is_some_and(|d| !d.is_empty()));

    let login = app
        .json(
            Method::POST,
            "/api/auth/login/",
            None,
            &json!({ "username": "samir", "password": "Another-Good-Pass9" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login/")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let resp = app.send(request).await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "request.malformed");
}
