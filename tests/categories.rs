// tests/categories.rs
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{
    TestApp, UserBuilder, admin, assert_error, create_category, create_portfolio, id_of, request,
};

#[tokio::test]
async fn anyone_can_list_but_only_superusers_create() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    create_category(&app, &token, "Web Design", "تصميم المواقع").await;

    let listed = app.get("/api/portfolio/categories/", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let payload = json!({ "name": "Branding", "name_ar": "هوية" });
    let anonymous = app
        .json(Method::POST, "/api/portfolio/categories/", None, &payload)
        .await;
    assert_error(&anonymous, StatusCode::UNAUTHORIZED, "auth.not_authenticated");

    let member_id = UserBuilder::new("member").insert(&app).await;
    let member = app.token_for(member_id).await;
    let forbidden = app
        .json(Method::POST, "/api/portfolio/categories/", Some(&member), &payload)
        .await;
    assert_error(&forbidden, StatusCode::FORBIDDEN, "auth.permission_denied");
}

#[tokio::test]
async fn permissions_are_checked_before_the_body_is_read() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    let created = create_category(&app, &token, "Web Design", "تصميم المواقع").await;
    let item = format!("/api/portfolio/categories/{}/", id_of(&created));
    let member_id = UserBuilder::new("member").insert(&app).await;
    let member = app.token_for(member_id).await;

    let targets = [
        (Method::POST, "/api/portfolio/categories/"),
        (Method::PUT, item.as_str()),
        (Method::PATCH, item.as_str()),
    ];
    for (method, uri) in targets {
        for (caller, status, code) in [
            (None, StatusCode::UNAUTHORIZED, "auth.not_authenticated"),
            (Some(member.as_str()), StatusCode::FORBIDDEN, "auth.permission_denied"),
        ] {
            let garbled = request(method.clone(), uri, caller)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap();
            let resp = app.send(garbled).await;
            assert_error(&resp, status, code);
        }
    }

    let unchanged = app.get(&item, None).await;
    assert_eq!(unchanged.body["name"], "Web Design");
}

#[tokio::test]
async fn slug_is_derived_once_and_survives_updates() {
    let app = TestApp::new();
    let (admin_id, token) = admin(&app).await;
    let created = create_category(&app, &token, "Web Design", "تصميم المواقع").await;
    assert_eq!(created["slug"], "web-design");
    assert_eq!(created["user"], admin_id);

    let uri = format!("/api/portfolio/categories/{}/", id_of(&created));
    let updated = app
        .json(
            Method::PATCH,
            &uri,
            Some(&token),
            &json!({ "name": "Motion Graphics", "slug": "ignored", "order": 2 }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{}", updated.body);
    assert_eq!(updated.body["name"], "Motion Graphics");
    assert_eq!(updated.body["slug"], "web-design");
    assert_eq!(updated.body["order"], 2);
}

#[tokio::test]
async fn names_are_checked_per_script() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;

    let english = app
        .json(
            Method::POST,
            "/api/portfolio/categories/",
            Some(&token),
            &json!({ "name": "Design 2", "name_ar": "تصميم" }),
        )
        .await;
    assert_error(&english, StatusCode::BAD_REQUEST, "categories.name_not_english");
    assert_eq!(english.body["field"], "name");

    let created = create_category(&app, &token, "Design", "تصميم").await;
    let uri = format!("/api/portfolio/categories/{}/", id_of(&created));
    let arabic = app
        .json(Method::PUT, &uri, Some(&token), &json!({ "name_ar": "Design" }))
        .await;
    assert_error(&arabic, StatusCode::BAD_REQUEST, "categories.name_ar_not_arabic");
    assert_eq!(arabic.body["field"], "name_ar");
}

#[tokio::test]
async fn list_is_ordered_by_order_then_name() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    for (name, name_ar, order) in [
        ("Video", "فيديو", 1),
        ("Branding", "هوية", 1),
        ("Photography", "تصوير", 0),
    ] {
        let resp = app
            .json(
                Method::POST,
                "/api/portfolio/categories/",
                Some(&token),
                &json!({ "name": name, "name_ar": name_ar, "order": order }),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED);
    }

    let listed = app.get("/api/portfolio/categories/", None).await;
    let names: Vec<&str> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Photography", "Branding", "Video"]);
}

#[tokio::test]
async fn negative_order_is_rejected() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    let resp = app
        .json(
            Method::POST,
            "/api/portfolio/categories/",
            Some(&token),
            &json!({ "name": "Video", "name_ar": "فيديو", "order": -1 }),
        )
        .await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "fields.negative");
    assert_eq!(resp.body["field"], "order");
}

#[tokio::test]
async fn referenced_category_cannot_be_deleted() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    let category = create_category(&app, &token, "Video", "فيديو").await;
    let category_id = id_of(&category);
    create_portfolio(&app, &token, "Reel", Some(category_id)).await;
    create_portfolio(&app, &token, "Teaser", Some(category_id)).await;

    let uri = format!("/api/portfolio/categories/{category_id}/");
    let resp = app.delete(&uri, Some(&token)).await;
    assert_error(&resp, StatusCode::BAD_REQUEST, "categories.protected");
    assert_eq!(
        resp.body["message"],
        "Cannot delete category with 2 existing portfolio(s)."
    );
    assert!(app.store.category(category_id).is_some());
}

#[tokio::test]
async fn unused_category_is_deleted() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    let category = create_category(&app, &token, "Video", "فيديو").await;
    let uri = format!("/api/portfolio/categories/{}/", id_of(&category));

    let resp = app.delete(&uri, Some(&token)).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let gone = app.get(&uri, None).await;
    assert_error(&gone, StatusCode::NOT_FOUND, "categories.not_found");
}

#[tokio::test]
async fn only_the_owner_may_modify() {
    let app = TestApp::new();
    let (_, token) = admin(&app).await;
    let category = create_category(&app, &token, "Video", "فيديو").await;
    let uri = format!("/api/portfolio/categories/{}/", id_of(&category));

    let other_id = UserBuilder::new("curator").superuser().insert(&app).await;
    let other = app.token_for(other_id).await;

    let update = app
        .json(Method::PATCH, &uri, Some(&other), &json!({ "order": 4 }))
        .await;
    assert_error(&update, StatusCode::FORBIDDEN, "auth.permission_denied");

    let delete = app.delete(&uri, Some(&other)).await;
    assert_error(&delete, StatusCode::FORBIDDEN, "auth.permission_denied");

    let anonymous = app.delete(&uri, None).await;
    assert_error(&anonymous, StatusCode::UNAUTHORIZED, "auth.not_authenticated");
}
